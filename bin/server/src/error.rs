//! Domain error types for server operations.
//!
//! Detailed causes are logged where the error is raised; only user-safe
//! text crosses to the browser.

use leptos::server_fn::error::ServerFnError;
use parley_conversation::ConversationError;
use std::fmt;

/// Chat-related errors.
#[derive(Debug)]
pub enum ChatError {
    /// The requested service key is not registered.
    UnknownService { key: String },
    /// The active service failed; the user message was kept without a reply.
    ServiceFailed { service: String, details: String },
    /// A message is already awaiting its reply.
    Busy,
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownService { key } => write!(f, "unknown service '{}'", key),
            Self::ServiceFailed { service, details } => {
                write!(f, "service '{}' failed: {}", service, details)
            }
            Self::Busy => write!(f, "a message is already awaiting its reply"),
        }
    }
}

impl From<ConversationError> for ChatError {
    fn from(err: ConversationError) -> Self {
        match err {
            ConversationError::UnknownService { key } => Self::UnknownService { key },
            ConversationError::Service { service, source } => Self::ServiceFailed {
                service,
                details: source.to_string(),
            },
            ConversationError::ConcurrentSubmission => Self::Busy,
        }
    }
}

impl ChatError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            ChatError::UnknownService { .. } => ServerFnError::new("Unknown service"),
            ChatError::ServiceFailed { .. } => {
                ServerFnError::new("The service could not answer this message")
            }
            ChatError::Busy => ServerFnError::new("Still waiting for the previous reply"),
        }
    }
}

/// Settings file errors.
#[derive(Debug)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    Io { path: String, details: String },
    /// The settings could not be encoded as JSON.
    Serialize { details: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, details } => {
                write!(f, "settings file '{}' I/O error: {}", path, details)
            }
            Self::Serialize { details } => {
                write!(f, "failed to encode settings: {}", details)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
