//! Chat widget: floating/docked affordance, bubble hint, and the open
//! conversation panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once in the app shell so it survives route changes. Display
//! mode is derived per render from the route, scroll offset, open flag,
//! and bubble flag (`state::visibility`); the conversation store and
//! dispatch rules live in `state::chat`.
//!
//! LIFECYCLE
//! =========
//! The bubble schedule is cancelled permanently on first open and on
//! unmount. In-flight sends are not cancellable; their completion
//! callbacks check an alive flag so a reply resolving after unmount never
//! touches dead signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::bubble::BubbleSchedule;
use crate::state::chat::{ChatRole, ChatState};
use crate::state::visibility::{DisplayMode, display_mode};
use crate::util::conversation_id::ConversationId;
use crate::util::format::{Inline, parse_inline};

/// Label drawn in the hint bubble next to the unopened affordance.
const BUBBLE_TEXT: &str = "Hi, need a hand?";

/// Render message content as structured nodes (bold spans, line breaks).
fn render_content(content: &str) -> impl IntoView + use<> {
    parse_inline(content)
        .into_iter()
        .map(|node| match node {
            Inline::Text(text) => view! { <span>{text}</span> }.into_any(),
            Inline::Bold(text) => view! { <strong>{text}</strong> }.into_any(),
            Inline::Break => view! { <br/> }.into_any(),
        })
        .collect_view()
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    // Read once from context; written at app initialization.
    let conversation = StoredValue::new(expect_context::<ConversationId>().0);
    let chat = RwSignal::new(ChatState::default());
    let open = RwSignal::new(false);
    let bubble_visible = RwSignal::new(false);
    let scroll_y = RwSignal::new(0.0_f64);
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let schedule = StoredValue::new(BubbleSchedule::start(bubble_visible));
    on_cleanup(move || schedule.get_value().cancel());

    // Replies resolving after unmount must not mutate the store.
    let alive = StoredValue::new(Arc::new(AtomicBool::new(true)));
    on_cleanup(move || alive.get_value().store(false, Ordering::Relaxed));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            scroll_y.set(offset);
        });
        on_cleanup(move || handle.remove());
    }

    let location = leptos_router::hooks::use_location();
    let mode = Memo::new(move |_| {
        display_mode(&location.pathname.get(), scroll_y.get(), open.get(), bubble_visible.get())
    });

    // First open retires the bubble for good; the schedule's cancel flag
    // is permanent, so closing again never resumes it.
    let open_chat = move |_| {
        open.set(true);
        bubble_visible.set(false);
        schedule.get_value().cancel();
    };
    let close_chat = move |_| open.set(false);

    // Keep the newest message in view while the panel is open.
    Effect::new(move || {
        let _ = chat.get().messages.len();
        if !open.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(text) = chat.try_update(|c| c.begin_send(&input.get_untracked())).flatten()
        else {
            return;
        };
        input.set(String::new());
        let conversation_id = conversation.get_value();
        let alive = alive.get_value();
        leptos::task::spawn_local(async move {
            let reply = crate::net::api::send_chat_message(&conversation_id, &text).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            chat.update(|c| c.complete_send(reply));
        });
    };

    let on_click_send = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !chat.get().busy && !input.get().trim().is_empty();

    view! {
        <Show when=move || mode.get() == DisplayMode::Open>
            <div class="chat-widget chat-widget--open">
                <div class="chat-panel">
                    <header class="chat-panel__header">
                        <span class="chat-panel__title">"Meridian Assistant"</span>
                        <button class="chat-panel__close" on:click=close_chat>"×"</button>
                    </header>
                    <div class="chat-panel__messages" node_ref=messages_ref>
                        {move || {
                            let state = chat.get();
                            state
                                .messages
                                .iter()
                                .map(|msg| {
                                    let from_user = msg.role == ChatRole::User;
                                    view! {
                                        <div
                                            class="chat-message"
                                            class:chat-message--user=from_user
                                            class:chat-message--assistant=!from_user
                                        >
                                            {render_content(&msg.content)}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <Show when=move || chat.get().busy>
                            <div class="chat-message chat-message--assistant chat-message--pending">
                                "Thinking..."
                            </div>
                        </Show>
                    </div>
                    <div class="chat-panel__input-row">
                        <input
                            class="chat-panel__input"
                            type="text"
                            placeholder="Ask anything..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                            disabled=move || chat.get().busy
                        />
                        <button
                            class="chat-panel__send"
                            on:click=on_click_send
                            disabled=move || !can_send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
        <Show when=move || mode.get() != DisplayMode::Open>
            <div class="chat-widget chat-widget--closed" class:chat-widget--docked=move || mode.get().is_docked()>
                <Show when=move || mode.get().has_bubble()>
                    <div class="chat-widget__bubble">{BUBBLE_TEXT}</div>
                </Show>
                <button class="chat-widget__launcher" on:click=open_chat>
                    <span class="chat-widget__launcher-glyph">"◈"</span>
                </button>
            </div>
        </Show>
    }
}
