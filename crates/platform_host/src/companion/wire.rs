//! Request builders and response decoders for the companion protocol.
//!
//! These are pure functions so status/body handling can be verified without a network.

use super::{
    config::{CHAT_PATH, DESKTOP_ICONS_PATH, LAUNCH_APP_PATH, STORE_ITEMS_PATH},
    types::{ChatBody, ChatResponseBody, LaunchAppBody},
    CompanionConfig, CompanionError, CompanionRequest, CompanionResponse, DesktopIcon, StoreItem,
};

/// Builds the icon listing request.
pub fn icons_request(config: &CompanionConfig) -> CompanionRequest {
    CompanionRequest::get(config.endpoint(DESKTOP_ICONS_PATH))
}

/// Builds the launch request for `app_id`.
pub fn launch_request(config: &CompanionConfig, app_id: &str) -> CompanionRequest {
    CompanionRequest::post_json(
        config.endpoint(LAUNCH_APP_PATH),
        encode_json(&LaunchAppBody { app_id }),
    )
}

/// Builds the chat request carrying `message`.
pub fn chat_request(config: &CompanionConfig, message: &str) -> CompanionRequest {
    CompanionRequest::post_json(config.endpoint(CHAT_PATH), encode_json(&ChatBody { message }))
}

/// Builds the marketplace listing request.
pub fn store_items_request(config: &CompanionConfig) -> CompanionRequest {
    CompanionRequest::get(config.endpoint(STORE_ITEMS_PATH))
}

fn encode_json<T: serde::Serialize>(body: &T) -> String {
    // Bodies are plain structs of string slices; serialization cannot fail.
    serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string())
}

/// Decodes the icon listing and rewrites relative icon paths against the base URL.
///
/// # Errors
///
/// Returns [`CompanionError::Unavailable`] for transport failures, non-`2xx` statuses, and bodies
/// that are not a JSON array of icons.
pub fn decode_icons(
    config: &CompanionConfig,
    outcome: Result<CompanionResponse, String>,
) -> Result<Vec<DesktopIcon>, CompanionError> {
    let response = read_endpoint(outcome)?;
    let icons: Vec<DesktopIcon> = serde_json::from_str(&response.body)
        .map_err(|err| CompanionError::Unavailable(format!("invalid icon listing: {err}")))?;
    Ok(icons
        .into_iter()
        .map(|icon| DesktopIcon {
            icon: config.resolve_icon_url(&icon.icon),
            ..icon
        })
        .collect())
}

/// Interprets a launch response. Only the status matters.
///
/// # Errors
///
/// Returns [`CompanionError::LaunchFailed`] for transport failures and non-`2xx` statuses.
pub fn decode_launch(
    app_id: &str,
    outcome: Result<CompanionResponse, String>,
) -> Result<(), CompanionError> {
    let failed = |reason: String| CompanionError::LaunchFailed {
        app_id: app_id.to_string(),
        reason,
    };
    match outcome {
        Ok(response) if response.is_success() => Ok(()),
        Ok(response) => Err(failed(
            server_error_message(&response.body)
                .unwrap_or_else(|| format!("companion answered with status {}", response.status)),
        )),
        Err(err) => Err(failed(err)),
    }
}

/// Decodes a chat reply.
///
/// # Errors
///
/// Returns [`CompanionError::ChatFailed`] carrying the server `error` field when present, a
/// status-derived message otherwise, or the transport error description.
pub fn decode_chat(outcome: Result<CompanionResponse, String>) -> Result<String, CompanionError> {
    let response = outcome.map_err(CompanionError::ChatFailed)?;
    if !response.is_success() {
        return Err(CompanionError::ChatFailed(
            server_error_message(&response.body).unwrap_or_else(|| {
                format!("the assistant is unavailable (status {})", response.status)
            }),
        ));
    }
    let body: ChatResponseBody = serde_json::from_str(&response.body)
        .map_err(|_| CompanionError::ChatFailed("malformed chat reply".to_string()))?;
    match (body.reply, body.error) {
        (Some(reply), _) => Ok(reply),
        (None, Some(error)) => Err(CompanionError::ChatFailed(error)),
        (None, None) => Err(CompanionError::ChatFailed("malformed chat reply".to_string())),
    }
}

/// Decodes the marketplace listing.
///
/// # Errors
///
/// Returns [`CompanionError::Unavailable`] for transport failures, non-`2xx` statuses, and
/// undecodable bodies.
pub fn decode_store_items(
    outcome: Result<CompanionResponse, String>,
) -> Result<Vec<StoreItem>, CompanionError> {
    let response = read_endpoint(outcome)?;
    serde_json::from_str(&response.body)
        .map_err(|err| CompanionError::Unavailable(format!("invalid store listing: {err}")))
}

fn read_endpoint(
    outcome: Result<CompanionResponse, String>,
) -> Result<CompanionResponse, CompanionError> {
    match outcome {
        Ok(response) if response.is_success() => Ok(response),
        Ok(response) => Err(CompanionError::Unavailable(format!(
            "companion answered with status {}",
            response.status
        ))),
        Err(err) => Err(CompanionError::Unavailable(err)),
    }
}

fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ChatResponseBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|error| !error.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::HttpMethod;

    fn ok(body: &str) -> Result<CompanionResponse, String> {
        Ok(CompanionResponse::new(200, body))
    }

    fn status(code: u16, body: &str) -> Result<CompanionResponse, String> {
        Ok(CompanionResponse::new(code, body))
    }

    #[test]
    fn request_builders_target_companion_endpoints() {
        let config = CompanionConfig::new("http://companion.local:8787/");

        let icons = icons_request(&config);
        assert_eq!(icons.method, HttpMethod::Get);
        assert_eq!(icons.url, "http://companion.local:8787/desktop-icons");
        assert_eq!(icons.body, None);

        let launch = launch_request(&config, "files");
        assert_eq!(launch.method, HttpMethod::Post);
        assert_eq!(launch.url, "http://companion.local:8787/launch-app");
        let body: Value = serde_json::from_str(launch.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "app_id": "files" }));

        let chat = chat_request(&config, "hi \"there\"");
        assert_eq!(chat.url, "http://companion.local:8787/chat");
        let body: Value = serde_json::from_str(chat.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "message": "hi \"there\"" }));

        assert_eq!(
            store_items_request(&config).url,
            "http://companion.local:8787/store-items"
        );
    }

    #[test]
    fn icons_are_absolutized_only_when_relative() {
        let config = CompanionConfig::default();
        let icons = decode_icons(
            &config,
            ok(r#"[
                {"id":"terminal","name":"Terminal","icon":"/t.png"},
                {"id":"files","name":"Fichiers","icon":"file:///usr/share/icons/files.svg"}
            ]"#),
        )
        .expect("icons");

        assert_eq!(
            icons,
            vec![
                DesktopIcon {
                    id: "terminal".to_string(),
                    name: "Terminal".to_string(),
                    icon: "http://localhost:8787/t.png".to_string(),
                },
                DesktopIcon {
                    id: "files".to_string(),
                    name: "Fichiers".to_string(),
                    icon: "file:///usr/share/icons/files.svg".to_string(),
                },
            ]
        );
    }

    #[test]
    fn icon_failures_map_to_unavailable() {
        let config = CompanionConfig::default();
        assert!(matches!(
            decode_icons(&config, status(500, r#"{"error":"boom"}"#)),
            Err(CompanionError::Unavailable(_))
        ));
        assert_eq!(
            decode_icons(&config, Err("connection refused".to_string())),
            Err(CompanionError::Unavailable("connection refused".to_string()))
        );
        assert!(matches!(
            decode_icons(&config, ok(r#"{"not":"a list"}"#)),
            Err(CompanionError::Unavailable(_))
        ));
    }

    #[test]
    fn launch_only_checks_status() {
        assert_eq!(decode_launch("files", ok("not even json")), Ok(()));
        assert_eq!(
            decode_launch(
                "ghost",
                status(400, r#"{"error":"ID d'application manquant ou invalide."}"#)
            ),
            Err(CompanionError::LaunchFailed {
                app_id: "ghost".to_string(),
                reason: "ID d'application manquant ou invalide.".to_string(),
            })
        );
        assert_eq!(
            decode_launch("files", Err("offline".to_string())),
            Err(CompanionError::LaunchFailed {
                app_id: "files".to_string(),
                reason: "offline".to_string(),
            })
        );
    }

    #[test]
    fn chat_reply_and_error_variants() {
        assert_eq!(decode_chat(ok(r#"{"reply":"hello"}"#)), Ok("hello".to_string()));
        assert_eq!(
            decode_chat(status(500, r#"{"error":"overloaded"}"#)),
            Err(CompanionError::ChatFailed("overloaded".to_string()))
        );
        assert_eq!(
            decode_chat(status(502, "<html>bad gateway</html>")),
            Err(CompanionError::ChatFailed(
                "the assistant is unavailable (status 502)".to_string()
            ))
        );
        assert_eq!(
            decode_chat(Err("Failed to fetch".to_string())),
            Err(CompanionError::ChatFailed("Failed to fetch".to_string()))
        );
        assert_eq!(
            decode_chat(ok(r#"{"status":"ok"}"#)),
            Err(CompanionError::ChatFailed("malformed chat reply".to_string()))
        );
    }

    #[test]
    fn store_items_decode_and_fail_as_unavailable() {
        let items = decode_store_items(ok(r#"[{
            "id":"hmcl","name":"HMCL Launcher","description":"Launcher Minecraft open source.",
            "author":"huanghongxun","icon":"/store/hmcl.png","price":"Gratuit"
        }]"#))
        .expect("items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].icon, "/store/hmcl.png");
        assert_eq!(items[0].price, "Gratuit");

        assert!(matches!(
            decode_store_items(status(404, "")),
            Err(CompanionError::Unavailable(_))
        ));
    }
}
