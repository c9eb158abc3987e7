//! Assistant chat session: an append-only transcript plus a single in-flight request.

use std::{cell::RefCell, rc::Weak};

use leptos::{logging, RwSignal, SignalUpdate};
use platform_host::{CompanionError, CompanionService};

pub const CHAT_GREETING: &str = "Hello! I'm the MinecraftOS assistant. How can I help?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::Bot,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    busy: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(CHAT_GREETING)],
            busy: false,
        }
    }
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Accepts `text` as the next user turn and marks the session busy.
    ///
    /// Returns the trimmed message to send, or `None` when the text is blank or a request is
    /// already in flight.
    pub fn begin_turn(&mut self, text: &str) -> Option<String> {
        let message = text.trim();
        if message.is_empty() || self.busy {
            return None;
        }
        self.messages.push(ChatMessage::user(message));
        self.busy = true;
        Some(message.to_string())
    }

    /// Appends the bot turn for a settled request.
    pub fn finish_turn(&mut self, outcome: Result<String, CompanionError>) {
        let text = match outcome {
            Ok(reply) => reply,
            Err(err) => format!("Sorry, I couldn't reach the assistant: {}", err.message()),
        };
        self.messages.push(ChatMessage::bot(text));
    }

    fn release(&mut self) {
        self.busy = false;
    }
}

/// Access to a [`ChatSession`] that may have been disposed.
///
/// `None` means the owner is gone (for example, the shell unmounted) and the update was skipped.
pub trait ChatStore {
    fn with_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R>;
}

impl ChatStore for RwSignal<ChatSession> {
    fn with_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ChatStore for Weak<RefCell<ChatSession>> {
    fn with_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        let session = self.upgrade()?;
        let mut session = session.borrow_mut();
        Some(f(&mut session))
    }
}

/// Clears the busy flag when the in-flight request settles or is dropped.
struct BusyRelease<'a, S: ChatStore> {
    store: &'a S,
}

impl<S: ChatStore> Drop for BusyRelease<'_, S> {
    fn drop(&mut self) {
        let _ = self.store.with_session(ChatSession::release);
    }
}

/// Submits `text` to the assistant and records the exchange in `store`.
///
/// The user turn is appended before the request is issued. Returns `false` without calling the
/// companion when the text is blank, a request is already in flight, or the session is gone.
pub async fn submit_chat<S: ChatStore>(
    store: &S,
    companion: &dyn CompanionService,
    text: &str,
) -> bool {
    let Some(Some(message)) = store.with_session(|session| session.begin_turn(text)) else {
        return false;
    };
    let _release = BusyRelease { store };

    let outcome = companion.send_chat(&message).await;
    if let Err(err) = &outcome {
        logging::warn!("assistant chat failed: {err}");
    }
    let _ = store.with_session(|session| session.finish_turn(outcome));
    true
}
