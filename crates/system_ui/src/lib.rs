//! Shared UI primitive library for the desktop shell and its built-in applications.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the shell stylesheet. Shell components and apps compose these primitives instead of emitting
//! ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Banner, BootSplash, Button, ButtonSize, ButtonVariant, ChatBubble, ChatSide, ChatTranscript,
    ClockButton, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer, EmptyState, FloatingPanel, FullscreenOverlay, Heading, ItemCard, Taskbar,
    TaskbarButton, TaskbarSection, TerminalLine, TerminalPrompt, TerminalSurface,
    TerminalTranscript, Text, TextField, TextTone, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Banner, BootSplash, Button, ButtonSize, ButtonVariant, ChatBubble, ChatSide,
        ChatTranscript, ClockButton, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
        DesktopRoot, DesktopWindowLayer, EmptyState, FloatingPanel, FullscreenOverlay, Heading,
        ItemCard, Taskbar, TaskbarButton, TaskbarSection, TerminalLine, TerminalPrompt,
        TerminalSurface, TerminalTranscript, Text, TextField, TextTone, WindowBody,
        WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
