//! Companion-backed runtime effects.

use leptos::{logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, reducer::DesktopAction};

pub(super) fn fetch_icons(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    spawn_local(async move {
        let companion = host.companion();
        let outcome = companion.fetch_icons().await;
        if !host.is_mounted() {
            return;
        }
        match outcome {
            Ok(icons) => dispatch.call(DesktopAction::IconsLoaded { icons }),
            Err(err) => {
                logging::warn!("desktop icon fetch failed: {err}");
                dispatch.call(DesktopAction::IconsFailed {
                    message: err.to_string(),
                });
            }
        }
    });
}

pub(super) fn launch_app(
    host: DesktopHostContext,
    dispatch: Callback<DesktopAction>,
    app_id: String,
) {
    logging::log!("launching external app `{app_id}`");
    spawn_local(async move {
        let companion = host.companion();
        let outcome = companion.launch_app(&app_id).await;
        if !host.is_mounted() {
            return;
        }
        match outcome {
            Ok(()) => logging::log!("external app `{app_id}` launched"),
            Err(err) => {
                logging::warn!("{err}");
                dispatch.call(DesktopAction::LaunchFailed { app_id });
            }
        }
    });
}

pub(super) fn fetch_store_items(
    host: DesktopHostContext,
    dispatch: Callback<DesktopAction>,
    generation: u64,
) {
    spawn_local(async move {
        let companion = host.companion();
        let outcome = companion.fetch_store_items().await;
        if !host.is_mounted() {
            return;
        }
        match outcome {
            Ok(items) => dispatch.call(DesktopAction::StoreItemsLoaded { generation, items }),
            Err(err) => {
                logging::warn!("store listing failed: {err}");
                dispatch.call(DesktopAction::StoreItemsFailed {
                    generation,
                    message: err.to_string(),
                });
            }
        }
    });
}
