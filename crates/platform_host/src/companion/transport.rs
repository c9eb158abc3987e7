//! Wire-exchange seam between the companion client and a concrete HTTP stack.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use super::CompanionFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTTP methods used by the companion protocol.
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl HttpMethod {
    /// Returns the method token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outbound companion request.
pub struct CompanionRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute request URL.
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json` when present.
    pub body: Option<String>,
}

impl CompanionRequest {
    /// Builds a body-less `GET` request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    /// Builds a `POST` request carrying a JSON body.
    pub fn post_json(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw companion response: status code plus body text.
pub struct CompanionResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text (may be empty).
    pub body: String,
}

impl CompanionResponse {
    /// Builds a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns whether the status is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations return `Err` only for transport failures (unreachable host, aborted fetch);
/// any status code the server sends back is an `Ok` response.
pub trait CompanionTransport {
    /// Sends `request` and resolves with the raw response.
    fn send<'a>(
        &'a self,
        request: CompanionRequest,
    ) -> CompanionFuture<'a, Result<CompanionResponse, String>>;
}

impl<T: CompanionTransport + ?Sized> CompanionTransport for Rc<T> {
    fn send<'a>(
        &'a self,
        request: CompanionRequest,
    ) -> CompanionFuture<'a, Result<CompanionResponse, String>> {
        (**self).send(request)
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory transport replaying queued outcomes in order and recording every request.
///
/// Clones share the same queue and request log.
pub struct ScriptedTransport {
    outcomes: Rc<RefCell<VecDeque<Result<CompanionResponse, String>>>>,
    requests: Rc<RefCell<Vec<CompanionRequest>>>,
}

impl ScriptedTransport {
    /// Queues a response with `status` and `body`.
    pub fn push_response(&self, status: u16, body: impl Into<String>) -> &Self {
        self.outcomes
            .borrow_mut()
            .push_back(Ok(CompanionResponse::new(status, body)));
        self
    }

    /// Queues a transport failure.
    pub fn push_transport_error(&self, message: impl Into<String>) -> &Self {
        self.outcomes.borrow_mut().push_back(Err(message.into()));
        self
    }

    /// Returns every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<CompanionRequest> {
        self.requests.borrow().clone()
    }

    /// Returns the number of queued outcomes not yet consumed.
    pub fn pending(&self) -> usize {
        self.outcomes.borrow().len()
    }
}

impl CompanionTransport for ScriptedTransport {
    fn send<'a>(
        &'a self,
        request: CompanionRequest,
    ) -> CompanionFuture<'a, Result<CompanionResponse, String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(request);
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted companion response".to_string()))
        })
    }
}
