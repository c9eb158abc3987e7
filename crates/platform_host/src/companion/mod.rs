//! Companion-service contracts: wire models, configuration, failures, and the HTTP client.

mod config;
mod error;
mod service;
mod transport;
mod types;
pub mod wire;

use std::{future::Future, pin::Pin};

pub use config::{
    is_absolute_url, CompanionConfig, CHAT_PATH, COMPANION_URL_ENV, DEFAULT_COMPANION_BASE_URL,
    DESKTOP_ICONS_PATH, LAUNCH_APP_PATH, STORE_ITEMS_PATH,
};
pub use error::CompanionError;
pub use service::{CompanionClient, CompanionService, NoopCompanionService};
pub use transport::{
    CompanionRequest, CompanionResponse, CompanionTransport, HttpMethod, ScriptedTransport,
};
pub use types::{DesktopIcon, StoreItem};

/// Object-safe boxed future used by [`CompanionService`] and [`CompanionTransport`].
pub type CompanionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
