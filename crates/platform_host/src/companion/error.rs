//! Companion failure taxonomy.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures reported by [`crate::CompanionService`] operations.
///
/// None of these are fatal: the desktop shell recovers each one at its boundary.
pub enum CompanionError {
    /// A read endpoint (icons, store items) failed at the transport or status level, or returned
    /// an undecodable payload.
    #[error("companion unavailable: {0}")]
    Unavailable(String),
    /// The launch endpoint rejected the request or could not be reached.
    #[error("launch failed for {app_id}: {reason}")]
    LaunchFailed {
        /// Application id that failed to launch.
        app_id: String,
        /// Human-readable failure reason.
        reason: String,
    },
    /// The chat endpoint failed; carries a human-readable message.
    #[error("{0}")]
    ChatFailed(String),
}

impl CompanionError {
    /// Returns the human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Unavailable(message) | Self::ChatFailed(message) => message,
            Self::LaunchFailed { reason, .. } => reason,
        }
    }
}
