//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::{DesktopIcon, StoreItem};
use thiserror::Error;

use crate::{
    model::{
        DesktopIconEntry, DesktopState, IconTarget, InteractionState, InternalApp,
        PointerPosition, ShellView, StoreState, Viewport, ICONS_UNAVAILABLE_MESSAGE,
    },
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// The boot splash timer elapsed.
    BootCompleted,
    /// The companion returned the desktop icon list.
    IconsLoaded {
        /// Icons with absolute image URLs.
        icons: Vec<DesktopIcon>,
    },
    /// The desktop icon fetch failed.
    IconsFailed {
        /// Failure description, for logs.
        message: String,
    },
    /// A desktop icon was double-clicked.
    ActivateIcon {
        /// Id of the activated icon.
        icon_id: String,
        /// Desktop viewport used for placing a newly opened window.
        viewport: Viewport,
    },
    /// Open (or keep) the window of an internal app.
    OpenWindow {
        /// App to open.
        app: InternalApp,
        /// Desktop viewport used for default placement.
        viewport: Viewport,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: String,
    },
    /// Begin dragging a window by its titlebar.
    BeginDrag {
        /// Window being dragged.
        window_id: String,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    DragTo {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndDrag,
    /// The companion rejected or could not receive a launch request.
    LaunchFailed {
        /// App that failed to launch.
        app_id: String,
    },
    /// Hide the banner.
    DismissBanner,
    /// Leave the store overlay.
    CloseStore,
    /// Store items arrived for the given overlay generation.
    StoreItemsLoaded {
        /// Generation the request was issued for.
        generation: u64,
        /// Listed items.
        items: Vec<StoreItem>,
    },
    /// Store items could not be loaded for the given overlay generation.
    StoreItemsFailed {
        /// Generation the request was issued for.
        generation: u64,
        /// Failure description shown inline.
        message: String,
    },
    /// Show or hide the assistant panel.
    ToggleAssistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Fetch the desktop icon list from the companion.
    FetchIcons,
    /// Ask the companion to launch an external app.
    LaunchApp(String),
    /// Fetch store items for the current overlay generation.
    FetchStoreItems {
        /// Overlay generation the response belongs to.
        generation: u64,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// The activated icon id is not in the loaded icon list.
    #[error("icon not found")]
    IconNotFound,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for the shell view, the desktop
/// icons, the window manager, and the store overlay. Companion calls are never made here; they
/// are emitted as [`RuntimeEffect`] values.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when a drag references a window that is not open, and
/// [`ReducerError::IconNotFound`] when an activation references an unknown icon. State is left
/// unchanged in both cases.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::BootCompleted => {
            if state.view == ShellView::Booting {
                state.view = ShellView::Desktop;
                if !state.icons_requested {
                    state.icons_requested = true;
                    effects.push(RuntimeEffect::FetchIcons);
                }
            }
        }
        DesktopAction::IconsLoaded { icons } => {
            state.icons = icons.into_iter().map(DesktopIconEntry::new).collect();
        }
        DesktopAction::IconsFailed { .. } => {
            state.banner = Some(ICONS_UNAVAILABLE_MESSAGE.to_string());
        }
        DesktopAction::ActivateIcon { icon_id, viewport } => {
            if state.view != ShellView::Desktop {
                return Ok(effects);
            }
            let target = state
                .icon(&icon_id)
                .map(|entry| entry.target.clone())
                .ok_or(ReducerError::IconNotFound)?;
            match target {
                IconTarget::Store => {
                    state.view = ShellView::StoreOpen;
                    state.store_generation += 1;
                    state.store = StoreState::Loading;
                    effects.push(RuntimeEffect::FetchStoreItems {
                        generation: state.store_generation,
                    });
                }
                IconTarget::InternalApp(app) => {
                    window_manager::open_window(state, app, viewport);
                }
                IconTarget::ExternalApp(app_id) => effects.push(RuntimeEffect::LaunchApp(app_id)),
            }
        }
        DesktopAction::OpenWindow { app, viewport } => {
            window_manager::open_window(state, app, viewport);
        }
        DesktopAction::CloseWindow { window_id } => {
            window_manager::close_window(state, interaction, &window_id);
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            if !window_manager::begin_drag(state, interaction, &window_id, pointer) {
                return Err(ReducerError::WindowNotFound);
            }
        }
        DesktopAction::DragTo { pointer } => {
            window_manager::drag_to(state, interaction, pointer);
        }
        DesktopAction::EndDrag => window_manager::end_drag(interaction),
        DesktopAction::LaunchFailed { app_id } => {
            state.banner = Some(format!("Launch failed for {app_id}"));
        }
        DesktopAction::DismissBanner => state.banner = None,
        DesktopAction::CloseStore => {
            if state.view == ShellView::StoreOpen {
                state.view = ShellView::Desktop;
            }
        }
        DesktopAction::StoreItemsLoaded { generation, items } => {
            if is_current_store_request(state, generation) {
                state.store = StoreState::Loaded(items);
            }
        }
        DesktopAction::StoreItemsFailed {
            generation,
            message,
        } => {
            if is_current_store_request(state, generation) {
                state.store = StoreState::Failed(message);
            }
        }
        DesktopAction::ToggleAssistant => state.assistant_open = !state.assistant_open,
    }
    Ok(effects)
}

fn is_current_store_request(state: &DesktopState, generation: u64) -> bool {
    state.view == ShellView::StoreOpen && state.store_generation == generation
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowPosition, STORE_APP_ID};

    const VIEWPORT: Viewport = Viewport { w: 1024, h: 720 };

    fn icon(id: &str, name: &str) -> DesktopIcon {
        DesktopIcon {
            id: id.to_string(),
            name: name.to_string(),
            icon: format!("http://localhost:8787/{id}.png"),
        }
    }

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn booted_with_icons(icons: Vec<DesktopIcon>) -> (DesktopState, InteractionState) {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::BootCompleted);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::IconsLoaded { icons },
        );
        (state, interaction)
    }

    fn activate(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        icon_id: &str,
    ) -> Vec<RuntimeEffect> {
        reduce(
            state,
            interaction,
            DesktopAction::ActivateIcon {
                icon_id: icon_id.to_string(),
                viewport: VIEWPORT,
            },
        )
    }

    #[test]
    fn boot_completes_once_and_fetches_icons_once() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert_eq!(state.view, ShellView::Booting);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::BootCompleted);
        assert_eq!(effects, vec![RuntimeEffect::FetchIcons]);
        assert_eq!(state.view, ShellView::Desktop);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::BootCompleted);
        assert!(effects.is_empty());
    }

    #[test]
    fn icon_failure_sets_banner_and_leaves_grid_empty() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::BootCompleted);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::IconsFailed {
                message: "connection refused".to_string(),
            },
        );

        assert!(effects.is_empty());
        assert!(state.icons.is_empty());
        assert_eq!(state.banner.as_deref(), Some(ICONS_UNAVAILABLE_MESSAGE));

        reduce(&mut state, &mut interaction, DesktopAction::DismissBanner);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn loaded_icons_carry_their_target() {
        let (state, _) = booted_with_icons(vec![
            icon("store", "Store"),
            icon("terminal", "Terminal"),
            icon("hmcl", "HMCL"),
        ]);

        let targets: Vec<_> = state.icons.iter().map(|e| e.target.clone()).collect();
        assert_eq!(
            targets,
            vec![
                IconTarget::Store,
                IconTarget::InternalApp(InternalApp::Terminal),
                IconTarget::ExternalApp("hmcl".to_string()),
            ]
        );
    }

    #[test]
    fn activating_an_internal_app_twice_opens_one_window() {
        let (mut state, mut interaction) = booted_with_icons(vec![icon("terminal", "Terminal")]);

        assert!(activate(&mut state, &mut interaction, "terminal").is_empty());
        assert!(activate(&mut state, &mut interaction, "terminal").is_empty());

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].title, "Terminal");
        assert_eq!(state.windows[0].position, WindowPosition { x: 256, y: 180 });
    }

    #[test]
    fn external_icons_emit_launch_effects() {
        let (mut state, mut interaction) = booted_with_icons(vec![icon("hmcl", "HMCL")]);

        let effects = activate(&mut state, &mut interaction, "hmcl");

        assert_eq!(effects, vec![RuntimeEffect::LaunchApp("hmcl".to_string())]);
        assert!(state.windows.is_empty());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchFailed {
                app_id: "hmcl".to_string(),
            },
        );
        assert_eq!(state.banner.as_deref(), Some("Launch failed for hmcl"));
    }

    #[test]
    fn unknown_icon_is_an_error_and_changes_nothing() {
        let (mut state, mut interaction) = booted_with_icons(vec![icon("files", "Files")]);
        let before = state.clone();

        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                icon_id: "ghost".to_string(),
                viewport: VIEWPORT,
            },
        );

        assert_eq!(result, Err(ReducerError::IconNotFound));
        assert_eq!(state, before);
    }

    #[test]
    fn activations_outside_the_desktop_are_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        state.icons = vec![DesktopIconEntry::new(icon("files", "Files"))];

        assert!(activate(&mut state, &mut interaction, "files").is_empty());
        assert!(state.windows.is_empty());

        reduce(&mut state, &mut interaction, DesktopAction::BootCompleted);
        state.view = ShellView::StoreOpen;
        assert!(activate(&mut state, &mut interaction, "files").is_empty());
        assert!(state.windows.is_empty());
    }

    #[test]
    fn store_replaces_desktop_and_close_restores_it_intact() {
        let (mut state, mut interaction) =
            booted_with_icons(vec![icon(STORE_APP_ID, "Store"), icon("files", "Files")]);
        activate(&mut state, &mut interaction, "files");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchFailed {
                app_id: "hmcl".to_string(),
            },
        );
        let windows_before = state.windows.clone();

        let effects = activate(&mut state, &mut interaction, STORE_APP_ID);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchStoreItems { generation: 1 }]
        );
        assert_eq!(state.view, ShellView::StoreOpen);
        assert_eq!(state.store, StoreState::Loading);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::CloseStore);
        assert!(effects.is_empty());
        assert_eq!(state.view, ShellView::Desktop);
        assert_eq!(state.windows, windows_before);
        assert_eq!(state.icons.len(), 2);
        assert_eq!(state.banner.as_deref(), Some("Launch failed for hmcl"));
    }

    #[test]
    fn stale_store_responses_are_discarded() {
        let (mut state, mut interaction) = booted_with_icons(vec![icon(STORE_APP_ID, "Store")]);
        activate(&mut state, &mut interaction, STORE_APP_ID);
        reduce(&mut state, &mut interaction, DesktopAction::CloseStore);
        activate(&mut state, &mut interaction, STORE_APP_ID);
        assert_eq!(state.store_generation, 2);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::StoreItemsFailed {
                generation: 1,
                message: "late".to_string(),
            },
        );
        assert_eq!(state.store, StoreState::Loading);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::StoreItemsLoaded {
                generation: 2,
                items: Vec::new(),
            },
        );
        assert_eq!(state.store, StoreState::Loaded(Vec::new()));
    }

    #[test]
    fn store_failure_is_shown_inline() {
        let (mut state, mut interaction) = booted_with_icons(vec![icon(STORE_APP_ID, "Store")]);
        activate(&mut state, &mut interaction, STORE_APP_ID);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::StoreItemsFailed {
                generation: 1,
                message: "companion unavailable: offline".to_string(),
            },
        );

        assert_eq!(
            state.store,
            StoreState::Failed("companion unavailable: offline".to_string())
        );
        assert_eq!(state.banner, None);
    }

    #[test]
    fn drag_actions_move_only_through_an_active_drag() {
        let (mut state, mut interaction) = booted_with_icons(Vec::new());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                app: InternalApp::Files,
                viewport: VIEWPORT,
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DragTo {
                pointer: PointerPosition { x: 5, y: 5 },
            },
        );
        assert_eq!(state.windows[0].position, WindowPosition { x: 256, y: 180 });

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: "files".to_string(),
                pointer: PointerPosition { x: 300, y: 190 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DragTo {
                pointer: PointerPosition { x: 100, y: 90 },
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::EndDrag);

        assert_eq!(state.windows[0].position, WindowPosition { x: 56, y: 80 });
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn begin_drag_on_unknown_window_is_an_error() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: "files".to_string(),
                pointer: PointerPosition::default(),
            },
        );

        assert_eq!(result, Err(ReducerError::WindowNotFound));
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn closing_the_dragged_window_ends_the_drag() {
        let (mut state, mut interaction) = booted_with_icons(Vec::new());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                app: InternalApp::Settings,
                viewport: VIEWPORT,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: "settings".to_string(),
                pointer: PointerPosition::default(),
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: "settings".to_string(),
            },
        );

        assert!(state.windows.is_empty());
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn assistant_toggle_flips_visibility() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::ToggleAssistant);
        assert!(state.assistant_open);
        reduce(&mut state, &mut interaction, DesktopAction::ToggleAssistant);
        assert!(!state.assistant_open);
    }
}
