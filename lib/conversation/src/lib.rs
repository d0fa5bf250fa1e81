//! Conversation core for parley.
//!
//! This crate provides:
//!
//! - **Chat services**: the [`ChatService`] capability and the built-in
//!   [`EchoService`]
//! - **Service registry**: key to service lookup, fixed at startup
//! - **Conversation**: the append-only message log and its single-flight
//!   submit loop

pub mod conversation;
pub mod error;
pub mod message;
pub mod registry;
pub mod service;

pub use conversation::Conversation;
pub use error::{ConversationError, RegistryError, ServiceError};
pub use message::{Message, MessageRole};
pub use registry::{ServiceInfo, ServiceRegistry};
pub use service::{ChatService, EchoService};
