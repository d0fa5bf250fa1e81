//! Core types shared by every parley crate.
//!
//! Provides the rootcause-backed [`Result`] alias and the ULID-based
//! identifiers used for conversations and messages.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ConversationId, MessageId, ParseIdError};
