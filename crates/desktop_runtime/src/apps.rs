//! Window contents for the built-in internal apps.

mod placeholders;

use desktop_app_terminal::TerminalApp;
use leptos::*;

use crate::model::InternalApp;

/// Mounts the contents of an internal app window.
pub fn mount_internal_app(app: InternalApp) -> View {
    match app {
        InternalApp::Terminal => view! { <TerminalApp /> }.into_view(),
        InternalApp::Files => placeholders::mount_files_placeholder(),
        InternalApp::Settings => placeholders::mount_settings_placeholder(),
        InternalApp::Browser => placeholders::mount_browser_placeholder(),
    }
}
