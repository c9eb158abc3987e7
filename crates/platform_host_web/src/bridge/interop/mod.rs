//! Shared transport interop for the browser bridge.
//!
//! Calls are routed to target-specific implementations behind a uniform API.

use platform_host::{CompanionRequest, CompanionResponse};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn http_exchange(request: &CompanionRequest) -> Result<CompanionResponse, String> {
    imp::http_exchange(request).await
}
