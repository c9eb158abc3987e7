//! Companion endpoint configuration and URL helpers.

/// Base URL used when no override is configured.
pub const DEFAULT_COMPANION_BASE_URL: &str = "http://localhost:8787";

/// Build-time environment variable that overrides [`DEFAULT_COMPANION_BASE_URL`].
pub const COMPANION_URL_ENV: &str = "MINECRAFTOS_COMPANION_URL";

/// Path of the desktop icon listing endpoint.
pub const DESKTOP_ICONS_PATH: &str = "/desktop-icons";
/// Path of the application launch endpoint.
pub const LAUNCH_APP_PATH: &str = "/launch-app";
/// Path of the assistant chat endpoint.
pub const CHAT_PATH: &str = "/chat";
/// Path of the marketplace listing endpoint.
pub const STORE_ITEMS_PATH: &str = "/store-items";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Companion client configuration.
///
/// `base_url` prefixes every request and every relative icon path returned by the companion.
pub struct CompanionConfig {
    base_url: String,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANION_BASE_URL)
    }
}

impl CompanionConfig {
    /// Builds a config for `base_url`, trimming whitespace and trailing slashes.
    ///
    /// A blank value falls back to [`DEFAULT_COMPANION_BASE_URL`].
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_COMPANION_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Reads the build-time [`COMPANION_URL_ENV`] override, if any.
    ///
    /// Browser builds have no process environment, so the value is captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("MINECRAFTOS_COMPANION_URL"))
    }

    /// Builds a config from an optional override value.
    pub fn from_override(value: Option<&str>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    /// Returns the normalized base URL (never ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Rewrites a companion-supplied icon path into an absolute URL.
    ///
    /// Absolute URLs pass through unchanged; anything else is prefixed with the base URL.
    pub fn resolve_icon_url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            path.to_string()
        } else {
            join_url(&self.base_url, path)
        }
    }
}

/// Returns whether `value` already names an absolute resource (scheme-qualified or `data:`).
pub fn is_absolute_url(value: &str) -> bool {
    let value = value.trim();
    if value.starts_with("data:") || value.starts_with("blob:") {
        return true;
    }
    let Some((scheme, _)) = value.split_once("://") else {
        return false;
    };
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
