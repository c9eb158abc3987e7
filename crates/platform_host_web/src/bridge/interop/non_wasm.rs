use super::*;

fn unsupported() -> String {
    "Browser fetch is only available when compiled for wasm32".to_string()
}

pub async fn http_exchange(request: &CompanionRequest) -> Result<CompanionResponse, String> {
    let _ = request;
    Err(unsupported())
}
