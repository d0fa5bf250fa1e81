//! The conversation log and its submit loop.
//!
//! A conversation owns an append-only history and the key of the active
//! service. Each submission moves it from idle to awaiting a response and
//! back. Only one submission may be in flight at a time; a second one is
//! rejected rather than queued.

use crate::error::ConversationError;
use crate::message::Message;
use crate::registry::{ServiceInfo, ServiceRegistry};
use parley_core::ConversationId;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

/// Claims the in-flight flag for one submission and releases it on drop.
///
/// Dropping covers every exit path, including the submit future being
/// dropped mid-await.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(in_flight: &'a AtomicBool) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { in_flight })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

/// An append-only chat log bound to a service registry.
///
/// Shared as `Arc<Conversation>`; every operation takes `&self`. Locks are
/// never held across the service call, so [`render`](Self::render) stays
/// responsive while a reply is pending.
pub struct Conversation {
    id: ConversationId,
    registry: Arc<ServiceRegistry>,
    history: RwLock<Vec<Message>>,
    active_service: RwLock<String>,
    in_flight: AtomicBool,
}

impl Conversation {
    /// Creates an empty conversation answered by the service under `active_key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::UnknownService`] if `active_key` is not
    /// registered.
    pub fn new(
        registry: Arc<ServiceRegistry>,
        active_key: impl Into<String>,
    ) -> Result<Self, ConversationError> {
        let active_key = active_key.into();
        if !registry.contains(&active_key) {
            return Err(ConversationError::UnknownService { key: active_key });
        }

        Ok(Self {
            id: ConversationId::new(),
            registry,
            history: RwLock::new(Vec::new()),
            active_service: RwLock::new(active_key),
            in_flight: AtomicBool::new(false),
        })
    }

    #[must_use]
    pub fn id(&self) -> ConversationId {
        self.id
    }

    /// Submits user text and records the active service's reply.
    ///
    /// Blank input (empty after trimming) is ignored: nothing is appended,
    /// no service is called, and `Ok(None)` is returned. Otherwise the user
    /// message is appended as given, the active service is asked for a
    /// reply, and the reply is appended and returned.
    ///
    /// # Errors
    ///
    /// - [`ConversationError::ConcurrentSubmission`] if another submission
    ///   is still awaiting its response. Nothing is appended.
    /// - [`ConversationError::Service`] if the service fails. The user
    ///   message stays in the history with no reply.
    #[instrument(skip(self, text), fields(conversation_id = %self.id, len = text.len()))]
    pub async fn submit_user_text(&self, text: &str) -> Result<Option<Message>, ConversationError> {
        if text.trim().is_empty() {
            debug!("Ignoring blank submission");
            return Ok(None);
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("Rejected submission while another is awaiting its response");
            return Err(ConversationError::ConcurrentSubmission);
        };

        let key = self.active_service.read().await.clone();
        let service = self
            .registry
            .get(&key)
            .ok_or_else(|| ConversationError::UnknownService { key: key.clone() })?;

        self.history.write().await.push(Message::user(text));

        let reply = service.respond(text).await.map_err(|source| {
            warn!(service = %key, error = %source, "Chat service failed to respond");
            ConversationError::Service {
                service: key.clone(),
                source,
            }
        })?;

        let reply = Message::assistant(reply);
        self.history.write().await.push(reply.clone());
        debug!(service = %key, "Recorded reply");

        Ok(Some(reply))
    }

    /// Makes the service under `key` answer subsequent submissions.
    ///
    /// A submission already in flight keeps the service it started with.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::UnknownService`] if `key` is not
    /// registered; the active service is left unchanged.
    pub async fn set_active_service(&self, key: &str) -> Result<(), ConversationError> {
        if !self.registry.contains(key) {
            return Err(ConversationError::UnknownService {
                key: key.to_string(),
            });
        }

        let mut active = self.active_service.write().await;
        if *active != key {
            debug!(conversation_id = %self.id, from = %active.as_str(), to = %key, "Switched chat service");
            *active = key.to_string();
        }
        Ok(())
    }

    /// Key of the service answering submissions.
    pub async fn active_service_key(&self) -> String {
        self.active_service.read().await.clone()
    }

    /// Describes every service this conversation can switch to.
    #[must_use]
    pub fn list_services(&self) -> Vec<ServiceInfo> {
        self.registry.list()
    }

    /// Snapshot of the history in insertion order.
    pub async fn render(&self) -> Vec<Message> {
        self.history.read().await.clone()
    }

    /// Number of messages in the history.
    pub async fn len(&self) -> usize {
        self.history.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.history.read().await.is_empty()
    }

    /// True while a submission is waiting on its service.
    #[must_use]
    pub fn is_awaiting_response(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}
