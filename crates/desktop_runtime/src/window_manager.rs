//! Window-manager transitions used by the desktop reducer.
//!
//! Windows are keyed by application id, so each internal app has at most one window. The window
//! list is in render order and the last entry is on top.

use crate::model::{
    DesktopState, DragSession, InteractionState, InternalApp, PointerPosition, Viewport,
    WindowPosition, WindowState,
};

/// Opens a window for `app` at the default placement.
///
/// Returns `false` (and changes nothing) when the app already has a window.
pub fn open_window(state: &mut DesktopState, app: InternalApp, viewport: Viewport) -> bool {
    if state.window(app.id()).is_some() {
        return false;
    }
    state
        .windows
        .push(WindowState::new(app, viewport.default_window_position()));
    true
}

/// Closes `window_id`, ending the drag if it was the drag target.
///
/// Returns `false` when no such window is open.
pub fn close_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: &str,
) -> bool {
    let before_len = state.windows.len();
    state.windows.retain(|window| window.id != window_id);
    if state.windows.len() == before_len {
        return false;
    }
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.window_id == window_id)
    {
        interaction.dragging = None;
    }
    true
}

/// Moves `window_id` to the top of the render order.
pub fn raise_window(state: &mut DesktopState, window_id: &str) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };
    if index + 1 != state.windows.len() {
        let window = state.windows.remove(index);
        state.windows.push(window);
    }
    true
}

/// Starts dragging `window_id`, raising it and recording the pointer-to-window offset.
pub fn begin_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: &str,
    pointer: PointerPosition,
) -> bool {
    let Some(position) = state.window(window_id).map(|window| window.position) else {
        return false;
    };
    raise_window(state, window_id);
    interaction.dragging = Some(DragSession {
        window_id: window_id.to_string(),
        offset: PointerPosition {
            x: pointer.x - position.x,
            y: pointer.y - position.y,
        },
    });
    true
}

/// Moves the dragged window so the grab offset stays under the pointer.
///
/// Returns `false` when no drag is active.
pub fn drag_to(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
) -> bool {
    let Some(session) = interaction.dragging.as_ref() else {
        return false;
    };
    let Some(window) = state
        .windows
        .iter_mut()
        .find(|window| window.id == session.window_id)
    else {
        return false;
    };
    window.position = WindowPosition {
        x: pointer.x - session.offset.x,
        y: pointer.y - session.offset.y,
    };
    true
}

/// Clears drag state.
pub fn end_drag(interaction: &mut InteractionState) {
    interaction.dragging = None;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport { w: 1200, h: 800 };

    fn ids(state: &DesktopState) -> Vec<&str> {
        state.windows.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn open_is_single_instance() {
        let mut state = DesktopState::default();
        assert!(open_window(&mut state, InternalApp::Files, VIEWPORT));
        assert!(open_window(&mut state, InternalApp::Terminal, VIEWPORT));
        assert!(!open_window(&mut state, InternalApp::Files, VIEWPORT));

        assert_eq!(ids(&state), vec!["files", "terminal"]);
    }

    #[test]
    fn every_window_opens_at_the_same_default_placement() {
        let mut state = DesktopState::default();
        open_window(&mut state, InternalApp::Files, VIEWPORT);
        open_window(&mut state, InternalApp::Settings, VIEWPORT);

        for window in &state.windows {
            assert_eq!(window.position, WindowPosition { x: 300, y: 200 });
        }
    }

    #[test]
    fn reopen_after_close_resets_position() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open_window(&mut state, InternalApp::Browser, VIEWPORT);
        begin_drag(
            &mut state,
            &mut interaction,
            "browser",
            PointerPosition { x: 310, y: 210 },
        );
        drag_to(&mut state, &interaction, PointerPosition { x: 10, y: 10 });
        end_drag(&mut interaction);
        assert_ne!(state.windows[0].position, WindowPosition { x: 300, y: 200 });

        assert!(close_window(&mut state, &mut interaction, "browser"));
        open_window(&mut state, InternalApp::Browser, VIEWPORT);
        assert_eq!(state.windows[0].position, WindowPosition { x: 300, y: 200 });
    }

    #[test]
    fn close_missing_window_is_a_no_op() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open_window(&mut state, InternalApp::Files, VIEWPORT);

        assert!(!close_window(&mut state, &mut interaction, "terminal"));
        assert_eq!(ids(&state), vec!["files"]);
    }

    #[test]
    fn drag_keeps_the_grab_offset() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open_window(&mut state, InternalApp::Terminal, VIEWPORT);

        begin_drag(
            &mut state,
            &mut interaction,
            "terminal",
            PointerPosition { x: 320, y: 215 },
        );
        drag_to(&mut state, &interaction, PointerPosition { x: 400, y: 260 });
        drag_to(&mut state, &interaction, PointerPosition { x: 500, y: 100 });
        end_drag(&mut interaction);

        // pointerEnd - (pointerStart - initialPosition)
        assert_eq!(
            state.windows[0].position,
            WindowPosition {
                x: 500 - (320 - 300),
                y: 100 - (215 - 200),
            }
        );
        assert!(!drag_to(
            &mut state,
            &interaction,
            PointerPosition { x: 0, y: 0 }
        ));
        assert_eq!(state.windows[0].position, WindowPosition { x: 480, y: 85 });
    }

    #[test]
    fn begin_drag_raises_the_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open_window(&mut state, InternalApp::Files, VIEWPORT);
        open_window(&mut state, InternalApp::Terminal, VIEWPORT);

        assert!(begin_drag(
            &mut state,
            &mut interaction,
            "files",
            PointerPosition::default()
        ));
        assert_eq!(ids(&state), vec!["terminal", "files"]);
        assert!(!begin_drag(
            &mut state,
            &mut interaction,
            "ghost",
            PointerPosition::default()
        ));
    }

    #[test]
    fn closing_the_dragged_window_ends_the_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open_window(&mut state, InternalApp::Files, VIEWPORT);
        open_window(&mut state, InternalApp::Terminal, VIEWPORT);
        begin_drag(
            &mut state,
            &mut interaction,
            "files",
            PointerPosition::default(),
        );

        close_window(&mut state, &mut interaction, "terminal");
        assert!(interaction.dragging.is_some());
        close_window(&mut state, &mut interaction, "files");
        assert_eq!(interaction.dragging, None);
    }
}
