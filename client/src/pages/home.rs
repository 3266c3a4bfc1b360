//! Home page: hero and capability highlights.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Ship AI that actually ships."</h1>
            <p class="hero__subtitle">
                "Meridian Labs designs, builds, and operates production AI systems \
                for teams that need results, not demos."
            </p>
            <A href="/contact" attr:class="hero__cta">"Start a Project"</A>
        </section>
        <section class="highlights">
            <div class="highlight-card">
                <h3>"Retrieval Pipelines"</h3>
                <p>"Grounded assistants backed by your own documents, kept current by an ingestion pipeline your team controls."</p>
            </div>
            <div class="highlight-card">
                <h3>"Workflow Automation"</h3>
                <p>"Agents that take real work off your queue: triage, drafting, reconciliation, and review."</p>
            </div>
            <div class="highlight-card">
                <h3>"Advisory"</h3>
                <p>"A pragmatic roadmap from pilot to production, with the guardrails to get it past your security review."</p>
            </div>
        </section>
    }
}
