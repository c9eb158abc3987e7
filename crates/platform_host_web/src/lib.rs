//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the companion service: a
//! `fetch`-backed [`FetchTransport`] plus compile-time host-strategy selection.
//!
//! Bridge bindings live under `bridge/`, with `bridge::interop` holding the wasm/non-wasm
//! transport glue.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod companion;

pub use adapters::{
    build_host_services, build_host_services_with, companion_service, host_strategy_name,
    selected_host_strategy, CompanionServiceAdapter,
};
pub use companion::FetchTransport;
