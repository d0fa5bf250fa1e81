//! Error types for the conversation crate.
//!
//! - `ServiceError`: raised by a chat service's `respond`
//! - `RegistryError`: raised while populating the service registry
//! - `ConversationError`: raised by conversation operations

use std::fmt;

/// Errors a chat service may return from `respond`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service cannot be reached or is not ready.
    Unavailable { reason: String },
    /// The service is throttling requests.
    RateLimited { retry_after_secs: Option<u64> },
    /// The service refused the input.
    InvalidInput { reason: String },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "service unavailable: {reason}"),
            Self::RateLimited { retry_after_secs } => {
                if let Some(secs) = retry_after_secs {
                    write!(f, "rate limited, retry after {secs}s")
                } else {
                    write!(f, "rate limited")
                }
            }
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Errors from building a service registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A service is already registered under this key.
    DuplicateService { key: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateService { key } => {
                write!(f, "a service is already registered as '{key}'")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors from conversation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// The key does not name a registered service.
    UnknownService { key: String },
    /// The active service failed to respond. The user message stays in the
    /// history without a reply.
    Service { service: String, source: ServiceError },
    /// A submission was made while another one was awaiting its response.
    ConcurrentSubmission,
}

impl fmt::Display for ConversationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownService { key } => write!(f, "unknown service: {key}"),
            Self::Service { service, source } => {
                write!(f, "service '{service}' failed: {source}")
            }
            Self::ConcurrentSubmission => {
                write!(f, "a submission is already awaiting its response")
            }
        }
    }
}

impl std::error::Error for ConversationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Service { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn rate_limited_display() {
        let with_hint = ServiceError::RateLimited {
            retry_after_secs: Some(30),
        };
        assert_eq!(with_hint.to_string(), "rate limited, retry after 30s");

        let without = ServiceError::RateLimited {
            retry_after_secs: None,
        };
        assert_eq!(without.to_string(), "rate limited");
    }

    #[test]
    fn service_failure_keeps_its_source() {
        let err = ConversationError::Service {
            service: "echo".to_string(),
            source: ServiceError::Unavailable {
                reason: "offline".to_string(),
            },
        };
        assert!(err.to_string().contains("echo"));
        assert!(err.source().expect("source").to_string().contains("offline"));
    }

    #[test]
    fn unknown_service_display() {
        let err = ConversationError::UnknownService {
            key: "nonexistent".to_string(),
        };
        assert_eq!(err.to_string(), "unknown service: nonexistent");
    }
}
