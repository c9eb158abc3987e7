//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for the companion service. It exposes the companion wire
//! models, configuration, failure taxonomy, the [`CompanionService`] trait and its HTTP-backed
//! [`CompanionClient`], while the concrete `fetch` transport lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod companion;
pub mod host;

pub use companion::{
    is_absolute_url, CompanionClient, CompanionConfig, CompanionError, CompanionFuture,
    CompanionRequest, CompanionResponse, CompanionService, CompanionTransport, DesktopIcon,
    HttpMethod, NoopCompanionService, ScriptedTransport, StoreItem, COMPANION_URL_ENV,
    DEFAULT_COMPANION_BASE_URL,
};
pub use host::{HostServices, HostStrategy};
