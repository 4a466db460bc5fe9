// Copyright (c) 2025 - Cowboy AI, Inc.
//! Firewall Domain Models
//!
//! - [`FirewallEvent`] - a delete-firewall request as it travels on the wire
//! - [`RuleSet`] / [`Rule`] - ingress and egress permission entries
//! - [`ValidationError`] - the closed set of request rule violations

pub mod firewall;
pub mod invariants;

pub use firewall::{FirewallEvent, Rule, RuleSet, MAX_PORT, MIN_PORT};
pub use invariants::{validate_event, ValidationError, ValidationResult};
