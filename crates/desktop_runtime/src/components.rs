//! Desktop shell UI composition and interaction surfaces.

mod assistant;
mod store;
mod taskbar;
mod window;

use std::{cell::RefCell, rc::Rc};

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use system_ui::{
    Banner, BootSplash, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer, Heading, Text, TextTone,
};

use self::{assistant::AssistantPanel, store::StoreOverlay, taskbar::DesktopTaskbar, window::DesktopWindow};
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
use crate::{
    model::{PointerPosition, ShellView},
    reducer::DesktopAction,
};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn remove_listeners(listeners: &RefCell<Vec<WindowListenerHandle>>) {
    for handle in listeners.borrow_mut().drain(..) {
        handle.remove();
    }
}

/// Attaches global pointer listeners for the lifetime of each window drag.
fn install_drag_listeners(runtime: DesktopRuntimeContext) {
    let drag_active = create_memo(move |_| runtime.interaction.get().dragging.is_some());
    let listeners = Rc::new(RefCell::new(Vec::<WindowListenerHandle>::new()));

    create_effect({
        let listeners = listeners.clone();
        move |_| {
            if !drag_active.get() {
                remove_listeners(&listeners);
                return;
            }
            let mut active = listeners.borrow_mut();
            if !active.is_empty() {
                return;
            }
            active.push(window_event_listener(ev::pointermove, move |ev| {
                runtime.dispatch_action(DesktopAction::DragTo {
                    pointer: pointer_from_pointer_event(&ev),
                });
            }));
            active.push(window_event_listener(ev::pointerup, move |_| {
                runtime.dispatch_action(DesktopAction::EndDrag);
            }));
            active.push(window_event_listener(ev::pointercancel, move |_| {
                runtime.dispatch_action(DesktopAction::EndDrag);
            }));
        }
    });

    on_cleanup(move || remove_listeners(&listeners));
}

#[component]
/// Top-level desktop shell: boot splash, desktop surface, or the store overlay.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let view_state = create_memo(move |_| runtime.state.get().view);

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            view_state=Signal::derive(move || view_state.get().token())
        >
            {move || match view_state.get() {
                ShellView::Booting => view! { <BootScreen /> }.into_view(),
                ShellView::Desktop => view! { <DesktopSurface /> }.into_view(),
                ShellView::StoreOpen => view! { <StoreOverlay /> }.into_view(),
            }}
        </DesktopRoot>
    }
}

#[component]
fn BootScreen() -> impl IntoView {
    view! {
        <BootSplash>
            <Heading>"MinecraftOS"</Heading>
            <Text tone=TextTone::Secondary>"Loading world..."</Text>
        </BootSplash>
    }
}

#[component]
fn DesktopSurface() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let banner = create_memo(move |_| state.get().banner);
    let icons = create_memo(move |_| state.get().icons);
    let window_ids = create_memo(move |_| {
        state
            .get()
            .windows
            .into_iter()
            .map(|window| window.id)
            .collect::<Vec<_>>()
    });
    let assistant_open = create_memo(move |_| state.get().assistant_open);

    install_drag_listeners(runtime);

    view! {
        <DesktopBackdrop>
            {move || {
                banner
                    .get()
                    .map(|message| {
                        view! {
                            <Banner
                                message=message
                                on_dismiss=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::DismissBanner)
                                })
                            />
                        }
                    })
            }}
            <DesktopIconGrid>
                <For
                    each=move || icons.get()
                    key=|entry| entry.icon.id.clone()
                    let:entry
                >
                    {{
                        let icon_id = entry.icon.id.clone();
                        view! {
                            <DesktopIconButton
                                label=entry.icon.name.clone()
                                image_src=entry.icon.icon.clone()
                                data_app=entry.icon.id.clone()
                                on_dblclick=Callback::new(move |_| {
                                    runtime.activate_icon(icon_id.clone())
                                })
                            />
                        }
                    }}
                </For>
            </DesktopIconGrid>

            <DesktopWindowLayer>
                <For each=move || window_ids.get() key=|id| id.clone() let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </DesktopWindowLayer>

            <Show when=move || assistant_open.get() fallback=|| ()>
                <AssistantPanel />
            </Show>
        </DesktopBackdrop>

        <DesktopTaskbar />
    }
}
