use crate::config::AppConfig;
use crate::markdown::markdown_to_html;
use crate::types::{ChatMessage, Role};
use crate::wiki::{
    ContentState, Conversation, HttpWikiClient, SUGGESTED_QUESTIONS, WikiBackend, load_content,
};
use dioxus::events::Key;
use dioxus::prelude::*;

const SCROLL_TO_END: &str =
    "document.getElementById('chat-end')?.scrollIntoView({ behavior: 'smooth' });";

#[component]
pub fn Wiki() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_signal(|| HttpWikiClient::from_config(&config));
    let mut content = use_signal(ContentState::default);
    let mut conversation = use_signal(Conversation::default);
    let mut chat_open = use_signal(|| false);

    // One generation request per mount; dropped with the scope if still pending.
    use_future(move || async move {
        let backend = client();
        content.set(load_content(&backend).await);
    });

    use_effect(move || {
        let _ = conversation.read().messages().len();
        document::eval(SCROLL_TO_END);
    });

    let mut send_message = move || {
        let Some(request) = conversation.with_mut(Conversation::begin_send) else {
            return;
        };
        let backend = client();
        spawn(async move {
            let result = backend.chat(&request).await;
            conversation.with_mut(|convo| convo.complete(result));
        });
    };

    let document_body = match content() {
        ContentState::Loading => rsx! {
            div { class: "wiki-loading",
                div { class: "spinner" }
                p { "Generating wiki..." }
            }
        },
        loaded => {
            let html = markdown_to_html(loaded.markdown().unwrap_or_default());
            rsx! {
                div { class: "markdown-content", dangerous_inner_html: "{html}" }
            }
        }
    };

    let snapshot = conversation();

    rsx! {
        div { class: "wiki-container",
            div { class: "wiki-content", {document_body} }

            div { class: if chat_open() { "chat-widget open" } else { "chat-widget" },
                if !chat_open() {
                    button {
                        class: "chat-toggle",
                        onclick: move |_| chat_open.set(true),
                        "💬 Ask about documents"
                    }
                } else {
                    div { class: "chat-panel",
                        div { class: "chat-header",
                            h3 { "Document Assistant" }
                            button {
                                class: "chat-close",
                                onclick: move |_| chat_open.set(false),
                                "×"
                            }
                        }

                        div { class: "chat-messages",
                            if snapshot.messages().is_empty() {
                                div { class: "chat-empty",
                                    p { "👋 Ask me anything about the documents!" }
                                    div { class: "suggested-questions",
                                        for question in SUGGESTED_QUESTIONS {
                                            button {
                                                key: "{question}",
                                                onclick: move |_| conversation.with_mut(|convo| convo.set_input(question)),
                                                "{question}"
                                            }
                                        }
                                    }
                                }
                            } else {
                                for (i, msg) in snapshot.messages().iter().enumerate() {
                                    MessageBubble { key: "{i}", message: msg.clone() }
                                }
                            }
                            if snapshot.is_sending() {
                                div { class: "message assistant",
                                    div { class: "typing-indicator",
                                        span {}
                                        span {}
                                        span {}
                                    }
                                }
                            }
                            div { id: "chat-end" }
                        }

                        div { class: "chat-input",
                            input {
                                r#type: "text",
                                placeholder: "Ask a question...",
                                value: "{snapshot.input()}",
                                disabled: snapshot.is_sending(),
                                oninput: move |ev| conversation.with_mut(|convo| convo.set_input(ev.value())),
                                onkeydown: move |ev| {
                                    if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                        ev.prevent_default();
                                        send_message();
                                    }
                                },
                            }
                            button {
                                r#type: "button",
                                disabled: !snapshot.can_send(),
                                onclick: move |_| send_message(),
                                "Send"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let role = message.role.as_str();
    let sources = message.sources_line();

    rsx! {
        div { class: "message {role}",
            div { class: "message-content", "{message.content}" }
            if matches!(message.role, Role::Assistant) {
                if let Some(line) = sources {
                    div { class: "message-sources",
                        small { "{line}" }
                    }
                }
            }
        }
    }
}
