//! Chat page component and server functions.

use crate::types::{ChatMessage, ServiceOption};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Server function to list the services the user can pick from.
#[server]
pub async fn list_services() -> Result<Vec<ServiceOption>, ServerFnError> {
    use crate::server_helpers::get_conversation;

    let conversation = get_conversation();
    Ok(conversation
        .list_services()
        .into_iter()
        .map(ServiceOption::from)
        .collect())
}

/// Server function to get the key of the service answering messages.
#[server]
pub async fn get_active_service() -> Result<String, ServerFnError> {
    use crate::server_helpers::get_conversation;

    Ok(get_conversation().active_service_key().await)
}

/// Server function to switch the service answering messages.
#[server]
pub async fn set_active_service(key: String) -> Result<(), ServerFnError> {
    use crate::error::ChatError;
    use crate::server_helpers::get_conversation;

    let conversation = get_conversation();
    conversation.set_active_service(&key).await.map_err(|e| {
        tracing::debug!(error = %e, key = %key, "Rejected service switch");
        ChatError::from(e).into_server_error()
    })?;

    tracing::info!(
        conversation_id = %conversation.id(),
        service = %key,
        "Active chat service changed"
    );

    Ok(())
}

/// Server function to fetch the message history in display order.
#[server]
pub async fn get_history() -> Result<Vec<ChatMessage>, ServerFnError> {
    use crate::server_helpers::get_conversation;

    let history = get_conversation().render().await;
    Ok(history.iter().map(ChatMessage::from).collect())
}

/// Server function to submit a message. Returns the reply, or `None` when
/// the text was blank and nothing was sent.
#[server]
pub async fn send_message(text: String) -> Result<Option<ChatMessage>, ServerFnError> {
    use crate::error::ChatError;
    use crate::server_helpers::get_conversation;

    let conversation = get_conversation();
    let reply = conversation.submit_user_text(&text).await.map_err(|e| {
        tracing::warn!(
            error = %e,
            conversation_id = %conversation.id(),
            "Message submission failed"
        );
        ChatError::from(e).into_server_error()
    })?;

    Ok(reply.as_ref().map(ChatMessage::from))
}

/// The chat tab: message list, service selector and input.
#[component]
pub fn ChatPage() -> impl IntoView {
    let services = Resource::new(|| (), |_| list_services());
    let active_service = Resource::new(|| (), |_| get_active_service());
    let history = Resource::new(|| (), |_| get_history());

    let (draft, set_draft) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (send_error, set_send_error) = signal(Option::<String>::None);
    let (service_error, set_service_error) = signal(Option::<String>::None);

    // Send stays disabled while a reply is pending; the server rejects
    // overlapping submissions as well.
    let submit = move || {
        if pending.get_untracked() {
            return;
        }
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }

        set_pending.set(true);
        set_send_error.set(None);
        set_draft.set(String::new());
        spawn_local(async move {
            if let Err(e) = send_message(text).await {
                set_send_error.set(Some(e.to_string()));
            }
            history.refetch();
            set_pending.set(false);
        });
    };

    let on_service_change = move |ev: leptos::ev::Event| {
        let key = event_target_value(&ev);
        set_service_error.set(None);
        spawn_local(async move {
            if let Err(e) = set_active_service(key).await {
                set_service_error.set(Some(e.to_string()));
            }
            active_service.refetch();
        });
    };

    view! {
        <div class="chat-page">
            <div class="service-bar">
                <label for="service">"Service"</label>
                <Suspense fallback=move || view! { <span>"Loading..."</span> }>
                    {move || {
                        let active = active_service.get().and_then(Result::ok).unwrap_or_default();
                        services.get().map(|result| {
                            match result {
                                Ok(options) => view! {
                                    <select
                                        id="service"
                                        class="service-select"
                                        prop:disabled=move || pending.get()
                                        on:change=on_service_change
                                    >
                                        {options.into_iter().map(|option| {
                                            let selected = option.key == active;
                                            view! {
                                                <option
                                                    value=option.key
                                                    title=option.description
                                                    selected=selected
                                                >{option.display_name}</option>
                                            }
                                        }).collect_view()}
                                    </select>
                                }.into_any(),
                                Err(_) => view! {
                                    <span class="error">"Failed to load services."</span>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
                {move || service_error.get().map(|msg| view! { <span class="error">{msg}</span> })}
            </div>

            <div class="chat-container">
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        history.get().map(|result| {
                            match result {
                                Ok(messages) if messages.is_empty() => view! {
                                    <p class="empty-hint">"Say something to get started."</p>
                                }.into_any(),
                                Ok(messages) => messages.into_iter().map(|message| view! {
                                    <MessageBubble message=message/>
                                }).collect_view().into_any(),
                                Err(_) => view! {
                                    <p class="error">"Failed to load messages. Please reload."</p>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
                {move || send_error.get().map(|msg| view! {
                    <div class="message error-marker">{format!("Not answered: {}", msg)}</div>
                })}
                {move || pending.get().then(|| view! {
                    <div class="message assistant-message typing">"..."</div>
                })}
            </div>

            <div class="input-container">
                <textarea
                    class="message-input"
                    placeholder="Type your message..."
                    rows="2"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            submit();
                        }
                    }
                ></textarea>
                <button
                    class="send-button"
                    disabled=move || pending.get() || draft.get().trim().is_empty()
                    on:click=move |_| submit()
                >
                    {move || if pending.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}

/// One message in the list, aligned by role.
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = if message.is_user() {
        "message user-message"
    } else {
        "message assistant-message"
    };

    view! {
        <div class=class title=message.sent_at>
            <div class="message-content">{message.content}</div>
        </div>
    }
}
