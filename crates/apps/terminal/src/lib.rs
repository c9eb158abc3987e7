//! Terminal desktop app: a small built-in command interpreter and its window contents.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod session;

use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::prelude::*;

pub use session::{TerminalEntry, TerminalSession};

fn entry_tone(entry: &TerminalEntry) -> TextTone {
    match entry {
        TerminalEntry::System(_) => TextTone::Secondary,
        TerminalEntry::Prompt(_) => TextTone::Accent,
        TerminalEntry::Output(_) => TextTone::Primary,
        TerminalEntry::Error(_) => TextTone::Danger,
    }
}

#[component]
/// Terminal app window contents.
pub fn TerminalApp() -> impl IntoView {
    let session = create_rw_signal(TerminalSession::default());
    let input = create_rw_signal(String::new());
    let input_ref = create_node_ref::<html::Input>();

    let submit = move || {
        let line = input.get_untracked();
        session.update(|session| session.execute(&line));
        input.set(String::new());
    };

    let indexed_entries = move || {
        session
            .get()
            .transcript()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <TerminalSurface
            layout_class="app-terminal"
            on_click=Callback::new(move |_| {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            })
        >
            <TerminalTranscript aria_label="Terminal output">
                <For
                    each=indexed_entries
                    key=|(idx, entry)| (*idx, entry.render())
                    let:entry
                >
                    <TerminalLine tone=entry_tone(&entry.1)>{entry.1.render()}</TerminalLine>
                </For>
            </TerminalTranscript>
            <TerminalPrompt>
                <span class="terminal-prompt-glyph">">"</span>
                <TextField
                    layout_class="terminal-input"
                    aria_label="Terminal input"
                    node_ref=input_ref
                    value=input
                    on_input=Callback::new(move |ev: web_sys::Event| input.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    })
                />
            </TerminalPrompt>
        </TerminalSurface>
    }
}
