//! Shared application state handed to server functions through Leptos context.

use crate::config::ServerConfig;
use crate::settings::SettingsStore;
use parley_conversation::{Conversation, ConversationError, ServiceRegistry};
use std::sync::Arc;

/// Everything a request needs: the one conversation and the settings file.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<Conversation>,
    pub settings: Arc<SettingsStore>,
}

impl AppState {
    /// Builds the registry with the built-in services and starts an empty
    /// conversation on the configured default service.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::UnknownService`] if the configured
    /// default service is not registered.
    pub fn new(config: &ServerConfig) -> Result<Self, ConversationError> {
        let registry = Arc::new(ServiceRegistry::with_builtin_services());
        let conversation = Conversation::new(registry, config.default_service.clone())?;

        Ok(Self {
            conversation: Arc::new(conversation),
            settings: Arc::new(SettingsStore::new(config.settings_path.clone())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_on_configured_service() {
        let state = AppState::new(&ServerConfig::default()).expect("echo is built in");
        assert_eq!(state.conversation.active_service_key().await, "echo");
        assert!(state.conversation.is_empty().await);
    }

    #[test]
    fn rejects_unregistered_default_service() {
        let config = ServerConfig {
            default_service: "oracle".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            AppState::new(&config),
            Err(ConversationError::UnknownService { ref key }) if key == "oracle"
        ));
    }
}
