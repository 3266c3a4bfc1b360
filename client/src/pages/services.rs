//! Services page.

use leptos::prelude::*;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="page page--services">
            <h1>"Services"</h1>
            <div class="service">
                <h2>"Assistant & RAG Builds"</h2>
                <p>"Customer-facing and internal assistants grounded in your knowledge base, with ingestion, chunking, and evaluation handled end to end."</p>
            </div>
            <div class="service">
                <h2>"Process Automation"</h2>
                <p>"LLM-driven automation for document-heavy workflows: intake, classification, extraction, and human-in-the-loop review."</p>
            </div>
            <div class="service">
                <h2>"Platform Engineering"</h2>
                <p>"The unglamorous parts that make AI dependable: serving, caching, observability, cost controls, and rollout tooling."</p>
            </div>
        </section>
    }
}
