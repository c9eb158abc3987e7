use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::*;

fn js_error(context: &str, err: JsValue) -> String {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    format!("{context}: {detail}")
}

async fn await_promise(context: &str, promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise)
        .await
        .map_err(|err| js_error(context, err))
}

pub async fn http_exchange(request: &CompanionRequest) -> Result<CompanionResponse, String> {
    let window = web_sys::window().ok_or_else(|| "browser window unavailable".to_string())?;

    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    if let Some(body) = request.body.as_deref() {
        init.set_body(&JsValue::from_str(body));
    }

    let fetch_request = Request::new_with_str_and_init(&request.url, &init)
        .map_err(|err| js_error("build request", err))?;
    if request.body.is_some() {
        fetch_request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| js_error("set content type", err))?;
    }

    let value = await_promise("fetch", window.fetch_with_request(&fetch_request)).await?;
    let response: Response = value
        .dyn_into()
        .map_err(|err| js_error("fetch response", err))?;
    let text_promise = response
        .text()
        .map_err(|err| js_error("read response body", err))?;
    let body = await_promise("read response body", text_promise)
        .await?
        .as_string()
        .unwrap_or_default();

    Ok(CompanionResponse::new(response.status(), body))
}
