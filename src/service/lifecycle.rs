// Copyright (c) 2025 - Cowboy AI, Inc.
//! Firewall Event Lifecycle
//!
//! Drives one inbound request from raw bytes to exactly one terminal event.
//!
//! ```text
//! new → process → validate → complete   (firewall.delete.aws.done)
//!          ↓          ↓          ↓
//!        echo       error ←── error     (firewall.delete.aws.error)
//! ```
//!
//! # Terminal Semantics
//!
//! - `process` failure publishes the raw payload unchanged and leaves the
//!   lifecycle in the terminal `Errored` stage.
//! - `complete` and `error` consume the lifecycle, so at most one of them
//!   runs per request.
//! - `complete` on an event that has not passed validation, or that cannot
//!   be serialized, publishes an error event instead.
//! - `error` aborts the process if the event cannot be serialized; the
//!   failure report itself must never be lost silently.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::{validate_event, FirewallEvent, ValidationError};
use crate::errors::WorkerError;
use crate::publisher::Publisher;
use crate::state_machine::{
    LifecycleInput, LifecycleStage, StateMachine, TransitionError,
};
use crate::subjects::{Outcome, Subjects};

/// Errors surfaced by lifecycle operations
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// The inbound payload was not a valid event encoding
    #[error("Invalid event payload: {0}")]
    Decode(String),

    /// The operation is not allowed in the current stage
    #[error("Lifecycle transition rejected: {0}")]
    Transition(#[from] TransitionError),

    /// The event broke a request rule; displays the rule's exact message
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Publishing the terminal event failed
    #[error(transparent)]
    Worker(#[from] WorkerError),
}

/// Which terminal message a request produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// The event was published to the done subject
    Completed,
    /// The event, with its error message, was published to the error subject
    Errored,
    /// The undecodable payload was echoed to the error subject
    Rejected,
}

/// One request's event and the capabilities needed to finish it
pub struct EventLifecycle {
    publisher: Arc<dyn Publisher>,
    subjects: Arc<Subjects>,
    event: FirewallEvent,
    stage: LifecycleStage,
}

impl EventLifecycle {
    /// Create an empty lifecycle in the `Received` stage
    pub fn new(publisher: Arc<dyn Publisher>, subjects: Arc<Subjects>) -> Self {
        Self {
            publisher,
            subjects,
            event: FirewallEvent::default(),
            stage: LifecycleStage::Received,
        }
    }

    /// The event as currently populated
    pub fn event(&self) -> &FirewallEvent {
        &self.event
    }

    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    /// Decode the raw payload into the event
    ///
    /// On failure the raw bytes are published verbatim to the error subject
    /// and a [`LifecycleError::Decode`] is returned.
    pub async fn process(&mut self, raw: &[u8]) -> Result<(), LifecycleError> {
        let (next, ()) = self.stage.transition(&LifecycleInput::Decode)?;

        match FirewallEvent::from_slice(raw) {
            Ok(event) => {
                debug!(event_id = %event.id, "Processed firewall event");
                self.event = event;
                self.stage = next;
                Ok(())
            }
            Err(e) => {
                warn!(payload_size = raw.len(), error = %e, "Unable to decode firewall event");
                self.stage = LifecycleStage::Errored;

                if let Err(publish_err) = self
                    .publisher
                    .publish(self.subjects.for_outcome(Outcome::Error), raw.to_vec())
                    .await
                {
                    error!(
                        subject = %self.subjects.error,
                        error = %publish_err,
                        "Failed to echo undecodable payload"
                    );
                }

                Err(LifecycleError::Decode(e.to_string()))
            }
        }
    }

    /// Check the event against every request rule, first violation wins
    ///
    /// Only a processed event can be validated; any other stage is reported
    /// as a [`LifecycleError::Transition`] before the rules are checked.
    pub fn validate(&mut self) -> Result<(), LifecycleError> {
        let (next, ()) = self.stage.transition(&LifecycleInput::Validate)?;

        validate_event(&self.event)?;
        self.stage = next;
        Ok(())
    }

    /// Publish the event to the done subject
    ///
    /// Falls back to [`error`](Self::error) when the event was never
    /// validated or cannot be serialized.
    pub async fn complete(mut self) -> Result<Disposition, LifecycleError> {
        let next = match self.stage.transition(&LifecycleInput::Complete) {
            Ok((next, ())) => next,
            Err(e) => return self.error(e).await,
        };

        let payload = match serde_json::to_vec(&self.event) {
            Ok(payload) => payload,
            Err(e) => return self.error(e).await,
        };

        self.stage = next;
        self.publisher
            .publish(self.subjects.for_outcome(Outcome::Done), payload)
            .await?;

        info!(
            event_id = %self.event.id,
            security_group_aws_id = %self.event.security_group_aws_id,
            "Firewall delete completed"
        );
        Ok(Disposition::Completed)
    }

    /// Record `err` on the event and publish it to the error subject
    pub async fn error(mut self, err: impl fmt::Display) -> Result<Disposition, LifecycleError> {
        let (next, ()) = self.stage.transition(&LifecycleInput::Fail)?;

        let message = err.to_string();
        error!(event_id = %self.event.id, "Error: {}", message);
        self.event.record_error(message);

        let payload = match serde_json::to_vec(&self.event) {
            Ok(payload) => payload,
            Err(e) => {
                error!(event_id = %self.event.id, error = %e, "Unable to serialize error event");
                std::process::abort();
            }
        };

        self.stage = next;
        self.publisher
            .publish(self.subjects.for_outcome(Outcome::Error), payload)
            .await?;
        Ok(Disposition::Errored)
    }
}

impl fmt::Debug for EventLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLifecycle")
            .field("event", &self.event)
            .field("stage", &self.stage)
            .finish()
    }
}
