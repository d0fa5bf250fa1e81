//! Registry of chat services.
//!
//! Populated once at startup and read-only afterwards. Listing is ordered
//! by key so the selector renders the same way on every request.

use crate::error::RegistryError;
use crate::service::{ChatService, EchoService};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Listing entry describing one registered service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Registry key used to select the service.
    pub key: String,
    /// The service's name.
    pub display_name: String,
    /// The service's description.
    pub description: String,
}

/// Maps service keys to service instances.
#[derive(Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, Arc<dyn ChatService>>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the built-in services.
    #[must_use]
    pub fn with_builtin_services() -> Self {
        let mut services: BTreeMap<String, Arc<dyn ChatService>> = BTreeMap::new();
        services.insert(EchoService::KEY.to_string(), Arc::new(EchoService::new()));
        Self { services }
    }

    /// Registers `service` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateService`] if `key` is taken; the
    /// existing service is kept.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        service: impl ChatService + 'static,
    ) -> Result<(), RegistryError> {
        let key = key.into();
        if self.services.contains_key(&key) {
            return Err(RegistryError::DuplicateService { key });
        }
        tracing::debug!(key = %key, service = service.name(), "Registered chat service");
        self.services.insert(key, Arc::new(service));
        Ok(())
    }

    /// Looks up the service registered under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<dyn ChatService>> {
        self.services.get(key).cloned()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.services.contains_key(key)
    }

    /// Describes every registered service, ordered by key.
    #[must_use]
    pub fn list(&self) -> Vec<ServiceInfo> {
        self.services
            .iter()
            .map(|(key, service)| ServiceInfo {
                key: key.clone(),
                display_name: service.name().to_string(),
                description: service.description().to_string(),
            })
            .collect()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("keys", &self.services.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use async_trait::async_trait;

    struct Shout;

    #[async_trait]
    impl ChatService for Shout {
        fn name(&self) -> &str {
            "Shout"
        }

        fn description(&self) -> &str {
            "Replies in capitals"
        }

        async fn respond(&self, message: &str) -> Result<String, ServiceError> {
            Ok(message.to_uppercase())
        }
    }

    #[test]
    fn builtin_registry_has_echo() {
        let registry = ServiceRegistry::with_builtin_services();
        assert_eq!(registry.list().len(), 1);
        assert!(registry.contains("echo"));
        assert_eq!(registry.get("echo").expect("echo").name(), "Echo");
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut registry = ServiceRegistry::with_builtin_services();
        let err = registry.register("echo", Shout).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateService {
                key: "echo".to_string()
            }
        );
        assert_eq!(registry.get("echo").expect("kept").name(), "Echo");
    }

    #[test]
    fn list_is_ordered_by_key() {
        let mut registry = ServiceRegistry::with_builtin_services();
        registry.register("aloud", Shout).expect("register");

        let listed = registry.list();
        let keys: Vec<_> = listed.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["aloud", "echo"]);
        assert_eq!(listed[0].display_name, "Shout");
        assert_eq!(listed[1].description, "Echoes back whatever message you send");
    }

    #[test]
    fn missing_key_yields_none() {
        let registry = ServiceRegistry::new();
        assert!(registry.list().is_empty());
        assert!(registry.get("echo").is_none());
    }
}
