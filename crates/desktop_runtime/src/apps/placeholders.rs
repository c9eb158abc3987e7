//! Placeholder bodies for internal apps without a real implementation yet.

use leptos::*;
use system_ui::{EmptyState, Heading, Text, TextTone};

fn placeholder(title: &'static str, body: &'static str) -> View {
    view! {
        <EmptyState ui_slot="app-placeholder">
            <Heading>{title}</Heading>
            <Text tone=TextTone::Secondary>{body}</Text>
        </EmptyState>
    }
    .into_view()
}

pub(super) fn mount_files_placeholder() -> View {
    placeholder("Files", "Your worlds, screenshots, and resource packs will show up here.")
}

pub(super) fn mount_settings_placeholder() -> View {
    placeholder("Settings", "Display, sound, and companion settings are coming soon.")
}

pub(super) fn mount_browser_placeholder() -> View {
    placeholder("Browser", "Web browsing is not available in this build.")
}
