//! Contact page with the project-inquiry form.
//!
//! The server's response message is shown verbatim; failures surface as an
//! inline status line and never leave the form unusable.

use leptos::prelude::*;

use crate::net::types::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let project_details = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = ContactForm {
            first_name: first_name.get().trim().to_owned(),
            last_name: last_name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            project_details: project_details.get().trim().to_owned(),
        };
        if form.first_name.is_empty() || form.email.is_empty() || form.project_details.is_empty() {
            status.set("Please fill in your name, email, and project details.".to_owned());
            return;
        }
        busy.set(true);
        status.set("Sending...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(&form).await {
                Ok(message) => status.set(message),
                Err(e) => status.set(format!("Submission failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page page--contact">
            <h1>"Tell us what you want to build"</h1>
            <form class="contact-form" on:submit=on_submit>
                <div class="contact-form__row">
                    <input
                        class="contact-form__input"
                        type="text"
                        placeholder="Jane"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="contact-form__input"
                        type="text"
                        placeholder="Doe"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </div>
                <input
                    class="contact-form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <textarea
                    class="contact-form__textarea"
                    placeholder="Tell us what you want to build..."
                    prop:value=move || project_details.get()
                    on:input=move |ev| project_details.set(event_target_value(&ev))
                ></textarea>
                <button class="contact-form__submit" type="submit" disabled=move || busy.get()>
                    "Send Inquiry"
                </button>
            </form>
            <Show when=move || !status.get().is_empty()>
                <p class="contact-form__status">{move || status.get()}</p>
            </Show>
        </section>
    }
}
