//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1>"About Meridian Labs"</h1>
            <p>
                "We are a small team of engineers and researchers who have spent the last \
                decade building data platforms and machine-learning systems for finance, \
                logistics, and healthcare."
            </p>
            <p>
                "We believe the gap between an impressive demo and a dependable product is \
                where most AI projects die. Our work lives in that gap: evaluation, \
                observability, fallbacks, and the operational discipline to keep a model \
                honest after launch."
            </p>
        </section>
    }
}
