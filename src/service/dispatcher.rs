// Copyright (c) 2025 - Cowboy AI, Inc.
//! Delete-Firewall Dispatcher
//!
//! Subscription handler for `firewall.delete.aws`. Each inbound payload gets
//! its own [`EventLifecycle`]:
//!
//! ```text
//! process ──✗──▶ (raw echo already published)
//!    ↓
//! validate ──✗──▶ error
//!    ↓
//! provider delete ──✗──▶ error
//!    ↓
//! complete
//! ```
//!
//! Handlers share only the publisher and the provider adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::adapters::{DeleteSecurityGroupRequest, SecurityGroupDeleter};
use crate::nats::MessageHandler;
use crate::publisher::Publisher;
use crate::subjects::Subjects;

use super::lifecycle::{Disposition, EventLifecycle, LifecycleError};

/// Drives delete-firewall requests through their lifecycle
pub struct Dispatcher {
    publisher: Arc<dyn Publisher>,
    deleter: Arc<dyn SecurityGroupDeleter>,
    subjects: Arc<Subjects>,
}

impl Dispatcher {
    /// Create a dispatcher for the `firewall.delete.aws` subjects
    pub fn new(publisher: Arc<dyn Publisher>, deleter: Arc<dyn SecurityGroupDeleter>) -> Self {
        Self {
            publisher,
            deleter,
            subjects: Arc::new(Subjects::firewall_delete_aws()),
        }
    }

    /// Use a different subject set
    pub fn with_subjects(mut self, subjects: Subjects) -> Self {
        self.subjects = Arc::new(subjects);
        self
    }

    pub fn subjects(&self) -> &Subjects {
        &self.subjects
    }

    /// Handle one inbound payload, returning the terminal message it produced
    pub async fn dispatch(&self, payload: &[u8]) -> Result<Disposition, LifecycleError> {
        let mut lifecycle =
            EventLifecycle::new(Arc::clone(&self.publisher), Arc::clone(&self.subjects));

        match lifecycle.process(payload).await {
            Ok(()) => {}
            Err(LifecycleError::Decode(_)) => return Ok(Disposition::Rejected),
            Err(e) => return Err(e),
        }

        if let Err(e) = lifecycle.validate() {
            return lifecycle.error(e).await;
        }

        let request = DeleteSecurityGroupRequest::from(lifecycle.event());
        if let Err(e) = self.deleter.delete(&request).await {
            return lifecycle.error(e).await;
        }

        lifecycle.complete().await
    }
}

#[async_trait]
impl MessageHandler for Dispatcher {
    type Error = LifecycleError;

    async fn handle(&self, payload: Vec<u8>) -> Result<(), Self::Error> {
        let disposition = self.dispatch(&payload).await?;

        match disposition {
            Disposition::Completed => debug!("Request completed"),
            Disposition::Errored => info!("Request failed, error event published"),
            Disposition::Rejected => info!("Request rejected, payload echoed"),
        }
        Ok(())
    }

    fn subject(&self) -> &str {
        &self.subjects.request
    }
}
