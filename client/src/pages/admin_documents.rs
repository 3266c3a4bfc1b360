//! Knowledge-base admin: document list and upload.
//!
//! DESIGN
//! ======
//! The list is always re-queried from the server after an upload rather
//! than optimistically patched, so it reflects persisted state at the cost
//! of one extra round-trip. Upload and embedding outcomes surface as
//! distinct notices; an embedding failure leaves the document listed.

use leptos::prelude::*;

use crate::net::types::Document;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let documents = RwSignal::new(Vec::<Document>::new());
    let loading = RwSignal::new(true);
    let uploading = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let refresh = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            documents.set(crate::net::api::fetch_documents().await.unwrap_or_default());
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    };
    refresh();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if uploading.get_untracked() {
                return;
            }
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            uploading.set(true);
            notice.set(String::new());
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_document(&file).await {
                    Ok(outcome) => {
                        if outcome.embedding_ok {
                            notice.set("Document uploaded and embeddings generated.".to_owned());
                        } else {
                            notice.set(format!(
                                "Document uploaded but embedding generation failed: {}",
                                outcome.embedding_message
                            ));
                        }
                    }
                    Err(e) => notice.set(format!("Upload failed: {e}")),
                }
                // Re-query from source of truth instead of patching the list.
                documents.set(crate::net::api::fetch_documents().await.unwrap_or_default());
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <section class="page page--admin">
            <div class="admin-header">
                <h1>"Documents"</h1>
                <label class="admin-upload" class:admin-upload--busy=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload Document" }}
                    <input
                        class="admin-upload__input"
                        type="file"
                        on:change=on_file_change
                        disabled=move || uploading.get()
                    />
                </label>
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="admin-notice">{move || notice.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="admin-empty">"Loading..."</p> }.into_any();
                }
                let docs = documents.get();
                if docs.is_empty() {
                    return view! { <p class="admin-empty">"No documents uploaded"</p> }.into_any();
                }
                docs.iter()
                    .map(|doc| {
                        let title = doc.title.clone();
                        let created = doc.created_at.chars().take(10).collect::<String>();
                        let source_type = doc.source_type.clone();
                        view! {
                            <div class="document-card">
                                <div>
                                    <p class="document-card__title">{title}</p>
                                    <p class="document-card__date">{created}</p>
                                </div>
                                <span class="document-card__type">{source_type}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
