//! Browser capability bridge used by the `platform_host_web` companion adapter.
//!
//! Target-specific transport glue lives under `interop`; this module keeps a stable async API
//! for the adapters regardless of compilation target.

mod interop;

use platform_host::{CompanionRequest, CompanionResponse};

pub async fn http_exchange(request: &CompanionRequest) -> Result<CompanionResponse, String> {
    interop::http_exchange(request).await
}
