//! Companion transport adapter backed by the browser `fetch` API.

use platform_host::{CompanionFuture, CompanionRequest, CompanionResponse, CompanionTransport};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser companion transport backed by the bridge interop layer.
///
/// Outside `wasm32` every exchange fails as a transport error, which the companion client maps
/// to its usual unavailable/failed variants.
pub struct FetchTransport;

impl CompanionTransport for FetchTransport {
    fn send<'a>(
        &'a self,
        request: CompanionRequest,
    ) -> CompanionFuture<'a, Result<CompanionResponse, String>> {
        Box::pin(async move { bridge::http_exchange(&request).await })
    }
}
