//! Shared shell, overlay, data-display, and control primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod overlays;
mod shell;

pub use controls::{Button, TextField};
pub use data_display::{
    ChatBubble, ChatTranscript, EmptyState, Heading, ItemCard, TerminalLine, TerminalPrompt,
    TerminalSurface, TerminalTranscript, Text,
};
pub use overlays::{Banner, BootSplash, FloatingPanel, FullscreenOverlay};
pub use shell::{
    ClockButton, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer, Taskbar, TaskbarButton, TaskbarSection, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic text tones.
pub enum TextTone {
    /// Default foreground.
    #[default]
    Primary,
    /// De-emphasized foreground.
    Secondary,
    /// Accent foreground.
    Accent,
    /// Error foreground.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side a chat bubble is attached to.
pub enum ChatSide {
    /// Messages typed by the local user.
    Outgoing,
    /// Messages from the assistant.
    Incoming,
}

impl ChatSide {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Outgoing => "outgoing",
            Self::Incoming => "incoming",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-panel", None), "ui-panel");
        assert_eq!(merge_layout_class("ui-panel", Some("")), "ui-panel");
        assert_eq!(
            merge_layout_class("ui-panel", Some("assistant-panel")),
            "ui-panel assistant-panel"
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::Sm.token(), "sm");
        assert_eq!(TextTone::Danger.token(), "danger");
        assert_eq!(ChatSide::Incoming.token(), "incoming");
    }
}
