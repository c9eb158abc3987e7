//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; companion calls, the boot timer, and viewport queries live behind
//! this typed boundary. Every async continuation checks the mounted flag before re-entering the
//! runtime, so work that settles after the shell unmounts is dropped.

mod boot;
mod effects;
mod host_ui;

use std::{cell::Cell, rc::Rc};

use leptos::{spawn_local, Callback, RwSignal};
use platform_host::{CompanionConfig, CompanionService, HostServices};

use crate::{
    chat::{self, ChatSession},
    model::Viewport,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub use boot::BOOT_SPLASH_DURATION;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    companion: Rc<dyn CompanionService>,
    companion_config: CompanionConfig,
    host_strategy_name: &'static str,
    mounted: Rc<Cell<bool>>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::offline())
    }
}

impl DesktopHostContext {
    /// Creates a host context from an injected service bundle.
    pub fn new(host_services: HostServices) -> Self {
        Self {
            companion: host_services.companion,
            companion_config: host_services.companion_config,
            host_strategy_name: host_services.host_strategy.as_str(),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Returns the configured companion service.
    pub fn companion(&self) -> Rc<dyn CompanionService> {
        self.companion.clone()
    }

    /// Returns the companion configuration.
    pub fn companion_config(&self) -> &CompanionConfig {
        &self.companion_config
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Returns whether the owning provider is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Marks the owning provider as unmounted; pending continuations become no-ops.
    pub fn mark_unmounted(&self) {
        self.mounted.set(false);
    }

    /// Starts the boot splash timer, cleared when the current reactive owner is disposed.
    pub fn install_boot_timer(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_timer(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FetchIcons => effects::fetch_icons(self.clone(), runtime.dispatch),
            RuntimeEffect::LaunchApp(app_id) => {
                effects::launch_app(self.clone(), runtime.dispatch, app_id)
            }
            RuntimeEffect::FetchStoreItems { generation } => {
                effects::fetch_store_items(self.clone(), runtime.dispatch, generation)
            }
        }
    }

    /// Sends `text` through the assistant chat session held in `chat`.
    pub fn submit_chat(&self, chat: RwSignal<ChatSession>, text: String) {
        let companion = self.companion();
        spawn_local(async move {
            chat::submit_chat(&chat, companion.as_ref(), &text).await;
        });
    }

    /// Returns the current desktop viewport available to the window manager.
    pub fn desktop_viewport(&self, taskbar_height_px: i32) -> Viewport {
        host_ui::desktop_viewport(taskbar_height_px)
    }
}
