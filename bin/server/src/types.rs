//! Shared types used across server functions and UI components.

use serde::{Deserialize, Serialize};

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A chat message as shown in the message list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    /// Raw message text. Rendered as a text node, never as markup.
    pub content: String,
    /// RFC 3339 creation time.
    pub sent_at: String,
}

impl ChatMessage {
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// An entry in the service selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub key: String,
    pub display_name: String,
    pub description: String,
}

/// UI color scheme, persisted in the settings file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn from_dark_mode(enabled: bool) -> Self {
        if enabled { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(feature = "ssr")]
impl From<parley_conversation::MessageRole> for ChatRole {
    fn from(role: parley_conversation::MessageRole) -> Self {
        match role {
            parley_conversation::MessageRole::User => Self::User,
            parley_conversation::MessageRole::Assistant => Self::Assistant,
        }
    }
}

#[cfg(feature = "ssr")]
impl From<&parley_conversation::Message> for ChatMessage {
    fn from(message: &parley_conversation::Message) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role().into(),
            content: message.content().to_string(),
            sent_at: message.timestamp().to_rfc3339(),
        }
    }
}

#[cfg(feature = "ssr")]
impl From<parley_conversation::ServiceInfo> for ServiceOption {
    fn from(info: parley_conversation::ServiceInfo) -> Self {
        Self {
            key: info.key,
            display_name: info.display_name,
            description: info.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).expect("serialize"), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").expect("deserialize");
        assert_eq!(parsed, Theme::Light);
    }

    #[test]
    fn theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(Theme::from_dark_mode(true).is_dark());
        assert!(!Theme::from_dark_mode(false).is_dark());
    }

    #[test]
    fn chat_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).expect("serialize"),
            "\"assistant\""
        );
        assert!(serde_json::from_str::<ChatRole>("\"User\"").is_err());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn chat_message_from_core_message() {
        let core = parley_conversation::Message::user("<i>hi</i>");
        let view = ChatMessage::from(&core);
        assert!(view.is_user());
        assert_eq!(view.role, ChatRole::User);
        assert_eq!(view.content, "<i>hi</i>");
        assert!(view.id.starts_with("msg_"));
    }
}
