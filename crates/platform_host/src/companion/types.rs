//! Companion wire models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop icon metadata listed by the companion.
///
/// After a successful fetch `icon` always holds an absolute image URL.
pub struct DesktopIcon {
    /// Stable application id, unique within one listing.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Icon image URL.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Marketplace entry listed by the companion.
pub struct StoreItem {
    /// Stable item id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Author or publisher label.
    pub author: String,
    /// Icon image URL.
    pub icon: String,
    /// Price as a display string (for example `Free`).
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct LaunchAppBody<'a> {
    pub app_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ChatBody<'a> {
    pub message: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct ChatResponseBody {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
