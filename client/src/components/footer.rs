//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <span class="footer__brand">"Meridian Labs"</span>
                    <p class="footer__tagline">"Applied AI for operations that can't stand still."</p>
                </div>
                <div class="footer__column">
                    <span class="footer__heading">"Company"</span>
                    <A href="/about" attr:class="footer__link">"About"</A>
                    <A href="/services" attr:class="footer__link">"Services"</A>
                    <A href="/contact" attr:class="footer__link">"Contact"</A>
                </div>
            </div>
            <p class="footer__legal">"© 2026 Meridian Labs. All rights reserved."</p>
        </footer>
    }
}
