//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat_widget::ChatWidget;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, admin_documents::DocumentsPage, admin_prompts::PromptsPage,
    contact::ContactPage, home::HomePage, services::ServicesPage,
};
use crate::util::conversation_id;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the conversation identifier context (read once from local
/// storage at initialization) and sets up client-side routing. The chat
/// widget is mounted outside the route outlet so it persists across
/// navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(conversation_id::load_or_create());

    view! {
        <Stylesheet id="leptos" href="/pkg/meridian.css"/>
        <Title text="Meridian Labs"/>

        <Router>
            <Navbar/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("admin") view=DocumentsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("prompts")) view=PromptsPage/>
                </Routes>
            </main>
            <Footer/>
            <ChatWidget/>
        </Router>
    }
}
