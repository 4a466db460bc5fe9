//! NATS client abstraction for the worker's messaging

use async_nats::{Client, ConnectOptions, Subscriber};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::errors::{WorkerError, WorkerResult};
use crate::publisher::Publisher;

/// Configuration for NATS connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatsConfig {
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Client name
    pub name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            name: "firewall-delete-aws".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// NATS client wrapper used for both subscribing and publishing
#[derive(Clone)]
pub struct NatsClient {
    client: Client,
}

impl NatsClient {
    /// Create a new NATS client with the given configuration
    pub async fn new(config: &NatsConfig) -> WorkerResult<Self> {
        if config.servers.is_empty() {
            return Err(WorkerError::Configuration(
                "no NATS servers configured".to_string(),
            ));
        }

        let connect_options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout)
            .request_timeout(Some(config.request_timeout));

        let client =
            async_nats::connect_with_options(config.servers.join(","), connect_options).await?;

        info!("Connected to NATS at {:?}", config.servers);

        Ok(Self { client })
    }

    /// Subscribe to a subject
    pub async fn subscribe(&self, subject: &str) -> WorkerResult<Subscriber> {
        let subscriber = self.client.subscribe(subject.to_string()).await?;

        info!("Subscribed to subject: {}", subject);
        Ok(subscriber)
    }

    /// Flush pending publishes to the server
    pub async fn flush(&self) -> WorkerResult<()> {
        self.client
            .flush()
            .await
            .map_err(|e| WorkerError::Publish(e.to_string()))
    }
}

#[async_trait]
impl Publisher for NatsClient {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> WorkerResult<()> {
        let size = payload.len();
        self.client
            .publish(subject.to_string(), payload.into())
            .await?;

        debug!(subject = %subject, payload_size = size, "Published message");
        Ok(())
    }
}

/// Trait for handling raw messages from NATS
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Error produced while handling a message
    type Error: std::error::Error + Send + Sync + 'static;

    /// Handle one raw message payload
    async fn handle(&self, payload: Vec<u8>) -> Result<(), Self::Error>;

    /// Get the subject this handler subscribes to
    fn subject(&self) -> &str;
}

/// Message processor that runs handlers for subscriptions
pub struct MessageProcessor {
    client: NatsClient,
}

impl MessageProcessor {
    /// Create a new message processor
    pub fn new(client: NatsClient) -> Self {
        Self { client }
    }

    /// Subscribe for a handler and spawn one task per inbound message
    ///
    /// The returned handle finishes when the subscription ends.
    pub async fn run_handler<H>(&self, handler: Arc<H>) -> WorkerResult<JoinHandle<()>>
    where
        H: MessageHandler + 'static,
    {
        let subject = handler.subject().to_string();
        let subscriber = self.client.subscribe(&subject).await?;

        Ok(tokio::spawn(dispatch_messages(subscriber, handler, subject)))
    }
}

async fn dispatch_messages<H>(mut subscriber: Subscriber, handler: Arc<H>, subject: String)
where
    H: MessageHandler + 'static,
{
    while let Some(msg) = subscriber.next().await {
        debug!(
            subject = %msg.subject,
            payload_size = msg.payload.len(),
            "Received message"
        );

        let handler = Arc::clone(&handler);
        let subject = subject.clone();
        tokio::spawn(async move {
            if let Err(e) = handler.handle(msg.payload.to_vec()).await {
                error!("Handler error for subject {}: {}", subject, e);
            }
        });
    }

    warn!(subject = %subject, "Subscription ended");
}
