//! Outbound publishing capability
//!
//! Request lifecycles never reach for a global connection; they are handed a
//! [`Publisher`] at construction. [`NatsClient`](crate::nats::NatsClient) is
//! the production implementation and [`InMemoryPublisher`] records messages
//! for tests and dry runs.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::{WorkerError, WorkerResult};

/// Publishes raw payloads to subjects
///
/// Implementations must tolerate concurrent publishes from many handlers.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish `payload` to `subject`
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> WorkerResult<()>;
}

/// A message captured by [`InMemoryPublisher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub subject: String,
    pub payload: Vec<u8>,
}

impl PublishedMessage {
    /// Decode the payload as JSON
    pub fn json(&self) -> WorkerResult<serde_json::Value> {
        Ok(serde_json::from_slice(&self.payload)?)
    }
}

/// Publisher that keeps every message in memory, in publish order
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    messages: Mutex<Vec<PublishedMessage>>,
    reject: bool,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every publish fails
    pub fn rejecting() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    /// All messages published so far
    pub async fn messages(&self) -> Vec<PublishedMessage> {
        self.messages.lock().await.clone()
    }

    /// Messages published to one subject
    pub async fn messages_on(&self, subject: &str) -> Vec<PublishedMessage> {
        self.messages
            .lock()
            .await
            .iter()
            .filter(|m| m.subject == subject)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Publisher for InMemoryPublisher {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> WorkerResult<()> {
        if self.reject {
            return Err(WorkerError::Publish(format!(
                "publisher rejected message for {subject}"
            )));
        }

        debug!(subject = %subject, payload_size = payload.len(), "Recorded message");
        self.messages.lock().await.push(PublishedMessage {
            subject: subject.to_string(),
            payload,
        });
        Ok(())
    }
}
