use std::time::Duration;

use leptos::{logging, on_cleanup, set_timeout_with_handle, Callable, Callback};

use crate::{host::DesktopHostContext, reducer::DesktopAction};

/// How long the boot splash stays up before the desktop appears.
pub const BOOT_SPLASH_DURATION: Duration = Duration::from_millis(2_500);

pub(super) fn install_boot_timer(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    match set_timeout_with_handle(
        move || {
            if host.is_mounted() {
                dispatch.call(DesktopAction::BootCompleted);
            }
        },
        BOOT_SPLASH_DURATION,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => {
            logging::warn!("boot timer unavailable, skipping splash: {err:?}");
            dispatch.call(DesktopAction::BootCompleted);
        }
    }
}
