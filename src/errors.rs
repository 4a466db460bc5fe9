//! Error types for worker infrastructure operations

use thiserror::Error;

/// Errors that can occur in worker infrastructure operations
#[derive(Debug, Error)]
pub enum WorkerError {
    /// NATS connection error
    #[error("NATS connection error: {0}")]
    NatsConnection(String),

    /// Publish error
    #[error("Publish error: {0}")]
    Publish(String),

    /// NATS subscribe error
    #[error("NATS subscribe error: {0}")]
    NatsSubscribe(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for worker infrastructure operations
pub type WorkerResult<T> = Result<T, WorkerError>;

impl From<async_nats::ConnectError> for WorkerError {
    fn from(err: async_nats::ConnectError) -> Self {
        WorkerError::NatsConnection(err.to_string())
    }
}

impl From<async_nats::PublishError> for WorkerError {
    fn from(err: async_nats::PublishError) -> Self {
        WorkerError::Publish(err.to_string())
    }
}

impl From<async_nats::SubscribeError> for WorkerError {
    fn from(err: async_nats::SubscribeError) -> Self {
        WorkerError::NatsSubscribe(err.to_string())
    }
}

impl From<serde_json::Error> for WorkerError {
    fn from(err: serde_json::Error) -> Self {
        WorkerError::Serialization(err.to_string())
    }
}
