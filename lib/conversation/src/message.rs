//! Message types for conversations.

use chrono::{DateTime, Utc};
use parley_core::MessageId;
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Text typed by the person chatting.
    User,
    /// A reply produced by a chat service.
    Assistant,
}

impl MessageRole {
    /// Lowercase name, as used in serialized form and CSS classes.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a conversation's history.
///
/// Fields are private: a message cannot change after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: MessageRole,
    content: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn role(&self) -> MessageRole {
        self.role
    }

    /// The message text, exactly as submitted or returned. Not escaped.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_role() {
        let user = Message::user("Hello!");
        assert_eq!(user.role(), MessageRole::User);
        assert_eq!(user.content(), "Hello!");

        let reply = Message::assistant("Hello!");
        assert_eq!(reply.role(), MessageRole::Assistant);
        assert_ne!(user.id(), reply.id());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::Assistant).expect("serialize");
        assert_eq!(json, "\"assistant\"");
        assert_eq!(MessageRole::User.to_string(), "user");
    }

    #[test]
    fn content_is_kept_verbatim() {
        let msg = Message::user("  <b>hi</b>\n");
        assert_eq!(msg.content(), "  <b>hi</b>\n");
    }
}
