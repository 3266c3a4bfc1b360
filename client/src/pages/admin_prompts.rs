//! Knowledge-base admin: prompt template list and editor.
//!
//! DESIGN
//! ======
//! Templates are created at version 1 and edited by replacing content; the
//! server bumps the version by exactly one per saved edit. Templates are
//! toggled active/inactive, never deleted. Every mutation re-fetches the
//! list from the server.

use leptos::prelude::*;

use crate::net::types::PromptTemplate;

#[component]
pub fn PromptsPage() -> impl IntoView {
    let prompts = RwSignal::new(Vec::<PromptTemplate>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(String::new());

    // Editor modal state. `editing_id` is `None` for a new template.
    let modal_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let edit_name = RwSignal::new(String::new());
    let edit_content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let refresh = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            prompts.set(crate::net::api::fetch_prompts().await.unwrap_or_default());
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    };
    refresh();

    let open_editor = move |prompt: Option<PromptTemplate>| {
        match prompt {
            Some(p) => {
                editing_id.set(Some(p.id));
                edit_name.set(p.name);
                edit_content.set(p.content);
            }
            None => {
                editing_id.set(None);
                edit_name.set(String::new());
                edit_content.set(String::new());
            }
        }
        notice.set(String::new());
        modal_open.set(true);
    };

    let can_save = move || {
        !saving.get() && !edit_name.get().trim().is_empty() && !edit_content.get().trim().is_empty()
    };

    let on_save = move |_| {
        if !can_save() {
            return;
        }
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let name = edit_name.get_untracked().trim().to_owned();
            let content = edit_content.get_untracked();
            let result = match editing_id.get_untracked() {
                Some(id) => crate::net::api::update_prompt(&id, &name, &content).await,
                None => crate::net::api::create_prompt(&name, &content).await,
            };
            match result {
                Ok(()) => {
                    modal_open.set(false);
                    refresh();
                }
                Err(e) => notice.set(format!("Failed to save prompt: {e}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        saving.set(false);
    };

    let toggle_active = move |id: String, currently_active: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::set_prompt_active(&id, !currently_active).await {
                notice.set(format!("Failed to update status: {e}"));
            }
            refresh();
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, currently_active);
        }
    };

    view! {
        <section class="page page--admin">
            <div class="admin-header">
                <h1>"Prompt Templates"</h1>
                <button class="admin-button" on:click=move |_| open_editor(None)>
                    "New Prompt"
                </button>
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="admin-notice">{move || notice.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="admin-empty">"Loading prompts..."</p> }.into_any();
                }
                prompts
                    .get()
                    .iter()
                    .map(|prompt| {
                        let for_edit = prompt.clone();
                        let toggle_id = prompt.id.clone();
                        let is_active = prompt.is_active;
                        let name = prompt.name.clone();
                        let version = prompt.version;
                        let content = prompt.content.clone();
                        let created = prompt.created_at.chars().take(10).collect::<String>();
                        view! {
                            <div class="prompt-card">
                                <div class="prompt-card__header">
                                    <div>
                                        <h3 class="prompt-card__name">
                                            {name}
                                            <span class="prompt-card__version">{format!("v{version}")}</span>
                                            <span
                                                class="prompt-card__badge"
                                                class:prompt-card__badge--active=is_active
                                            >
                                                {if is_active { "Active" } else { "Inactive" }}
                                            </span>
                                        </h3>
                                        <p class="prompt-card__date">{format!("Created: {created}")}</p>
                                    </div>
                                    <div class="prompt-card__actions">
                                        <button
                                            class="admin-button admin-button--ghost"
                                            on:click=move |_| open_editor(Some(for_edit.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="admin-button admin-button--ghost"
                                            on:click=move |_| toggle_active(toggle_id.clone(), is_active)
                                        >
                                            {if is_active { "Deactivate" } else { "Activate" }}
                                        </button>
                                    </div>
                                </div>
                                <pre class="prompt-card__content">{content}</pre>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}

            <Show when=move || modal_open.get()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <div class="modal__header">
                            <h3>
                                {move || if editing_id.get().is_some() { "Edit Prompt" } else { "New Prompt" }}
                            </h3>
                            <button class="modal__close" on:click=move |_| modal_open.set(false)>
                                "×"
                            </button>
                        </div>
                        <label class="modal__label">"Name"</label>
                        <input
                            class="modal__input"
                            type="text"
                            placeholder="e.g. Chatbot System Prompt"
                            prop:value=move || edit_name.get()
                            on:input=move |ev| edit_name.set(event_target_value(&ev))
                        />
                        <label class="modal__label">"Template Content"</label>
                        <textarea
                            class="modal__textarea"
                            placeholder="Enter prompt template..."
                            prop:value=move || edit_content.get()
                            on:input=move |ev| edit_content.set(event_target_value(&ev))
                        ></textarea>
                        <div class="modal__actions">
                            <button class="admin-button admin-button--ghost" on:click=move |_| modal_open.set(false)>
                                "Cancel"
                            </button>
                            <button class="admin-button" on:click=on_save disabled=move || !can_save()>
                                "Save Prompt"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
