// Copyright (c) 2025 - Cowboy AI, Inc.

//! NATS subject hierarchy for firewall workers
//!
//! Requests and their terminal events follow the pattern:
//!
//! ```text
//! {resource}.{action}.{provider}[.{outcome}]
//! ```
//!
//! A request arrives on `firewall.delete.aws`; the worker answers on
//! `firewall.delete.aws.done` or `firewall.delete.aws.error`.
//!
//! # Examples
//!
//! ```rust
//! use firewall_delete_aws::subjects::{Action, Outcome, Provider, Resource, SubjectBuilder};
//!
//! let subject = SubjectBuilder::new(Resource::Firewall, Action::Delete, Provider::Aws)
//!     .outcome(Outcome::Done)
//!     .build();
//! assert_eq!(subject, "firewall.delete.aws.done");
//! ```

use std::fmt;

/// Resource kinds handled by the orchestration platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Security groups / firewalls
    Firewall,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Firewall => write!(f, "firewall"),
        }
    }
}

/// Requested action on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// Cloud provider executing the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Aws,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Aws => write!(f, "aws"),
        }
    }
}

/// Terminal outcome of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The request completed successfully
    Done,
    /// The request failed
    Error,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => write!(f, "done"),
            Outcome::Error => write!(f, "error"),
        }
    }
}

/// Builder for worker NATS subjects
#[derive(Debug, Clone)]
pub struct SubjectBuilder {
    resource: Resource,
    action: Action,
    provider: Provider,
    outcome: Option<Outcome>,
}

impl SubjectBuilder {
    /// Create a new subject builder for a request subject
    pub fn new(resource: Resource, action: Action, provider: Provider) -> Self {
        Self {
            resource,
            action,
            provider,
            outcome: None,
        }
    }

    /// Set the terminal outcome, turning the request subject into a reply subject
    pub fn outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Build the complete subject string
    pub fn build(self) -> String {
        match self.outcome {
            Some(outcome) => format!(
                "{}.{}.{}.{}",
                self.resource, self.action, self.provider, outcome
            ),
            None => format!("{}.{}.{}", self.resource, self.action, self.provider),
        }
    }
}

/// The request subject and its two terminal subjects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subjects {
    /// Inbound request subject
    pub request: String,
    /// Subject for successfully completed requests
    pub done: String,
    /// Subject for failed requests
    pub error: String,
}

impl Subjects {
    /// Build the subject set for one resource/action/provider triple
    pub fn new(resource: Resource, action: Action, provider: Provider) -> Self {
        let builder = SubjectBuilder::new(resource, action, provider);
        Self {
            request: builder.clone().build(),
            done: builder.clone().outcome(Outcome::Done).build(),
            error: builder.outcome(Outcome::Error).build(),
        }
    }

    /// Subjects for `firewall.delete.aws`
    pub fn firewall_delete_aws() -> Self {
        Self::new(Resource::Firewall, Action::Delete, Provider::Aws)
    }

    /// Subject for the given terminal outcome
    pub fn for_outcome(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Done => &self.done,
            Outcome::Error => &self.error,
        }
    }
}

impl Default for Subjects {
    fn default() -> Self {
        Self::firewall_delete_aws()
    }
}
