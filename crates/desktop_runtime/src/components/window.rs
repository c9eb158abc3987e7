use super::*;
use crate::apps::mount_internal_app;
use system_ui::{
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(initial) = runtime.state.get_untracked().window(&window_id).cloned() else {
        return ().into_view();
    };

    let placement = create_memo({
        let window_id = window_id.clone();
        move |_| {
            let desktop = runtime.state.get();
            desktop
                .windows
                .iter()
                .position(|window| window.id == window_id)
                .map(|index| (index, desktop.windows[index].position))
        }
    });
    let dragging = create_memo({
        let window_id = window_id.clone();
        move |_| {
            runtime
                .interaction
                .get()
                .dragging
                .is_some_and(|session| session.window_id == window_id)
        }
    });
    let style = Signal::derive(move || {
        placement
            .get()
            .map(|(index, position)| {
                format!(
                    "left:{}px;top:{}px;z-index:{};",
                    position.x,
                    position.y,
                    index + 1
                )
            })
            .unwrap_or_default()
    });

    let begin_drag = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !ev.is_primary() || ev.button() != 0 {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginDrag {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let close = move |_| {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.clone(),
        })
    };

    view! {
        <WindowFrame
            style=style
            aria_label=initial.title.clone()
            dragging=Signal::derive(move || dragging.get())
            data_app=initial.id.clone()
        >
            <WindowTitleBar on_pointerdown=Callback::new(begin_drag)>
                <WindowTitle>{initial.title.clone()}</WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Close window" on_click=Callback::new(close)>
                        "x"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{mount_internal_app(initial.app)}</WindowBody>
        </WindowFrame>
    }
    .into_view()
}
