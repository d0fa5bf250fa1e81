//! Chat service abstraction.
//!
//! A chat service turns one user message into one reply. Services are
//! registered under a short key in the [`ServiceRegistry`] and picked by
//! the conversation at submit time.
//!
//! [`ServiceRegistry`]: crate::registry::ServiceRegistry

use crate::error::ServiceError;
use async_trait::async_trait;

/// A pluggable responder behind the chat.
///
/// Implementations may suspend while they wait on remote work, and may keep
/// their own internal counters or caches, but must not mutate any other
/// shared state.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Human-facing name, used in logs and the service selector.
    fn name(&self) -> &str;

    /// One-line summary shown next to the name in the selector.
    fn description(&self) -> &str;

    /// Produces a reply for `message`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the service is unavailable, rate
    /// limited, or rejects the input.
    async fn respond(&self, message: &str) -> Result<String, ServiceError>;
}

/// Replies with the message it was given.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoService;

impl EchoService {
    /// Registry key the echo service is installed under by default.
    pub const KEY: &'static str = "echo";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatService for EchoService {
    fn name(&self) -> &str {
        "Echo"
    }

    fn description(&self) -> &str {
        "Echoes back whatever message you send"
    }

    async fn respond(&self, message: &str) -> Result<String, ServiceError> {
        Ok(message.to_string())
    }
}
