//! AWS firewall deletion worker for the orchestration platform
//!
//! Listens on `firewall.delete.aws`, validates each request, deletes the
//! named EC2 security group, and answers on `firewall.delete.aws.done` or
//! `firewall.delete.aws.error`. Every request produces exactly one answer.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod nats;
pub mod publisher;
pub mod service;
pub mod state_machine;
pub mod subjects;

// Re-export commonly used types
pub use adapters::{DeleteSecurityGroupRequest, ProviderError, SecurityGroupDeleter};
pub use config::WorkerConfig;
pub use domain::{FirewallEvent, Rule, RuleSet, ValidationError};
pub use errors::{WorkerError, WorkerResult};
pub use nats::{MessageHandler, MessageProcessor, NatsClient, NatsConfig};
pub use publisher::{InMemoryPublisher, PublishedMessage, Publisher};
pub use service::{Dispatcher, Disposition, EventLifecycle, LifecycleError};
pub use subjects::Subjects;
