//! Companion service contract and its HTTP-backed client.

use super::{
    wire, CompanionConfig, CompanionError, CompanionFuture, CompanionTransport, DesktopIcon,
    StoreItem,
};

/// Host service for the local companion backend.
///
/// Every operation is independent and stateless; callers may retry freely and implementations
/// never retry on their own.
pub trait CompanionService {
    /// Lists desktop icons with absolute icon URLs.
    fn fetch_icons<'a>(&'a self) -> CompanionFuture<'a, Result<Vec<DesktopIcon>, CompanionError>>;

    /// Asks the companion to launch an external application.
    fn launch_app<'a>(&'a self, app_id: &'a str)
        -> CompanionFuture<'a, Result<(), CompanionError>>;

    /// Sends one chat message and resolves with the assistant reply.
    fn send_chat<'a>(
        &'a self,
        message: &'a str,
    ) -> CompanionFuture<'a, Result<String, CompanionError>>;

    /// Lists marketplace items.
    fn fetch_store_items<'a>(
        &'a self,
    ) -> CompanionFuture<'a, Result<Vec<StoreItem>, CompanionError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Companion service for hosts without network access; every call reports the companion as
/// unavailable.
pub struct NoopCompanionService;

const NOOP_REASON: &str = "no companion transport on this host";

impl CompanionService for NoopCompanionService {
    fn fetch_icons<'a>(&'a self) -> CompanionFuture<'a, Result<Vec<DesktopIcon>, CompanionError>> {
        Box::pin(async { Err(CompanionError::Unavailable(NOOP_REASON.to_string())) })
    }

    fn launch_app<'a>(
        &'a self,
        app_id: &'a str,
    ) -> CompanionFuture<'a, Result<(), CompanionError>> {
        Box::pin(async move {
            Err(CompanionError::LaunchFailed {
                app_id: app_id.to_string(),
                reason: NOOP_REASON.to_string(),
            })
        })
    }

    fn send_chat<'a>(
        &'a self,
        _message: &'a str,
    ) -> CompanionFuture<'a, Result<String, CompanionError>> {
        Box::pin(async { Err(CompanionError::ChatFailed(NOOP_REASON.to_string())) })
    }

    fn fetch_store_items<'a>(
        &'a self,
    ) -> CompanionFuture<'a, Result<Vec<StoreItem>, CompanionError>> {
        Box::pin(async { Err(CompanionError::Unavailable(NOOP_REASON.to_string())) })
    }
}

#[derive(Debug, Clone)]
/// [`CompanionService`] speaking the companion HTTP protocol over a [`CompanionTransport`].
pub struct CompanionClient<T> {
    config: CompanionConfig,
    transport: T,
}

impl<T: CompanionTransport> CompanionClient<T> {
    /// Creates a client for `config` using `transport`.
    pub fn new(config: CompanionConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CompanionConfig {
        &self.config
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: CompanionTransport> CompanionService for CompanionClient<T> {
    fn fetch_icons<'a>(&'a self) -> CompanionFuture<'a, Result<Vec<DesktopIcon>, CompanionError>> {
        Box::pin(async move {
            let outcome = self
                .transport
                .send(wire::icons_request(&self.config))
                .await;
            wire::decode_icons(&self.config, outcome)
        })
    }

    fn launch_app<'a>(
        &'a self,
        app_id: &'a str,
    ) -> CompanionFuture<'a, Result<(), CompanionError>> {
        Box::pin(async move {
            let outcome = self
                .transport
                .send(wire::launch_request(&self.config, app_id))
                .await;
            wire::decode_launch(app_id, outcome)
        })
    }

    fn send_chat<'a>(
        &'a self,
        message: &'a str,
    ) -> CompanionFuture<'a, Result<String, CompanionError>> {
        Box::pin(async move {
            let outcome = self
                .transport
                .send(wire::chat_request(&self.config, message))
                .await;
            wire::decode_chat(outcome)
        })
    }

    fn fetch_store_items<'a>(
        &'a self,
    ) -> CompanionFuture<'a, Result<Vec<StoreItem>, CompanionError>> {
        Box::pin(async move {
            let outcome = self
                .transport
                .send(wire::store_items_request(&self.config))
                .await;
            wire::decode_store_items(outcome)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{HttpMethod, ScriptedTransport};

    fn client() -> (CompanionClient<ScriptedTransport>, ScriptedTransport) {
        let transport = ScriptedTransport::default();
        (
            CompanionClient::new(CompanionConfig::default(), transport.clone()),
            transport,
        )
    }

    #[test]
    fn fetch_icons_resolves_relative_paths() {
        let (client, transport) = client();
        transport.push_response(200, r#"[{"id":"terminal","name":"Terminal","icon":"/t.png"}]"#);
        let service: &dyn CompanionService = &client;

        let icons = block_on(service.fetch_icons()).expect("icons");

        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].icon, "http://localhost:8787/t.png");
        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].url, "http://localhost:8787/desktop-icons");
    }

    #[test]
    fn launch_posts_app_id_and_reports_failures() {
        let (client, transport) = client();
        transport.push_response(200, "").push_response(500, "");

        block_on(client.launch_app("files")).expect("launch");
        let err = block_on(client.launch_app("files")).unwrap_err();

        assert_eq!(err.to_string(), "launch failed for files: companion answered with status 500");
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"app_id":"files"}"#)
        );
    }

    #[test]
    fn send_chat_surfaces_server_error_text() {
        let (client, transport) = client();
        transport
            .push_response(200, r#"{"reply":"hello"}"#)
            .push_response(500, r#"{"error":"overloaded"}"#);

        assert_eq!(block_on(client.send_chat("hi")), Ok("hello".to_string()));
        let err = block_on(client.send_chat("hi again")).unwrap_err();
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn client_never_retries() {
        let (client, transport) = client();
        transport.push_transport_error("offline");

        assert!(block_on(client.fetch_store_items()).is_err());
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn noop_service_reports_every_call_unavailable() {
        let service = NoopCompanionService;
        assert!(matches!(
            block_on(service.fetch_icons()),
            Err(CompanionError::Unavailable(_))
        ));
        assert!(matches!(
            block_on(service.launch_app("x")),
            Err(CompanionError::LaunchFailed { .. })
        ));
        assert!(matches!(
            block_on(service.send_chat("x")),
            Err(CompanionError::ChatFailed(_))
        ));
        assert!(block_on(service.fetch_store_items()).is_err());
    }
}
