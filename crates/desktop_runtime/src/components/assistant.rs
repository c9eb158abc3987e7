use super::*;
use crate::chat::{ChatMessage, ChatSender};
use system_ui::{
    Button, ButtonVariant, ChatBubble, ChatSide, ChatTranscript, FloatingPanel, TextField,
};

fn chat_side(sender: ChatSender) -> ChatSide {
    match sender {
        ChatSender::User => ChatSide::Outgoing,
        ChatSender::Bot => ChatSide::Incoming,
    }
}

#[component]
pub(super) fn AssistantPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let chat = runtime.chat;
    let draft = create_rw_signal(String::new());
    let transcript_ref = create_node_ref::<html::Div>();
    let busy = create_memo(move |_| chat.get().is_busy());
    let messages = create_memo(move |_| chat.get().messages().to_vec());

    create_effect(move |_| {
        messages.with(|messages| messages.len());
        if let Some(transcript) = transcript_ref.get() {
            transcript.set_scroll_top(transcript.scroll_height());
        }
    });

    let submit = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() || busy.get_untracked() {
            return;
        }
        draft.set(String::new());
        runtime.submit_chat(text);
    };

    view! {
        <FloatingPanel aria_label="Assistant" ui_slot="assistant">
            <ChatTranscript node_ref=transcript_ref>
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, message): (usize, ChatMessage)| {
                        view! {
                            <ChatBubble side=chat_side(message.sender)>{message.text}</ChatBubble>
                        }
                    }
                />
            </ChatTranscript>
            <div class="assistant-composer">
                <TextField
                    placeholder="Ask the assistant..."
                    aria_label="Message"
                    value=Signal::derive(move || draft.get())
                    on_input=Callback::new(move |ev: web_sys::Event| draft.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    })
                />
                <Button
                    variant=ButtonVariant::Primary
                    aria_label="Send"
                    disabled=Signal::derive(move || busy.get())
                    on_click=Callback::new(move |_| submit())
                >
                    {move || if busy.get() { "..." } else { "Send" }}
                </Button>
            </div>
        </FloatingPanel>
    }
}
