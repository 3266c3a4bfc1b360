//! Top navigation bar shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Meridian Labs"</A>
            <div class="navbar__links">
                <A href="/services" attr:class="navbar__link">"Services"</A>
                <A href="/about" attr:class="navbar__link">"About"</A>
                <A href="/contact" attr:class="navbar__link navbar__link--cta">"Start a Project"</A>
            </div>
        </nav>
    }
}
