// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Lifecycle State Machine
//!
//! Stages a firewall request passes through while one handler owns it.
//!
//! # States
//!
//! - Received: constructed, payload not yet decoded
//! - Processed: payload decoded
//! - Validated: all request rules hold
//! - Completed: done event emitted (terminal)
//! - Errored: error event or raw echo emitted (terminal)
//!
//! # Inputs
//!
//! - Decode: Received → Processed
//! - Validate: Processed → Validated (Validated → Validated)
//! - Complete: Validated → Completed
//! - Fail: any non-terminal stage → Errored

use super::{StateMachine, TransitionError, TransitionResult};

/// Lifecycle stage of a firewall request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleStage {
    #[default]
    Received,
    Processed,
    Validated,
    Completed,
    Errored,
}

/// Lifecycle input (FSM input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleInput {
    /// The payload decoded into an event
    Decode,
    /// The event passed validation
    Validate,
    /// The done event is being emitted
    Complete,
    /// The error event is being emitted
    Fail,
}

impl StateMachine for LifecycleStage {
    type Input = LifecycleInput;
    type Output = ();

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use LifecycleInput::*;
        use LifecycleStage::*;

        match (self, input) {
            (Received, Decode) => Ok((Processed, ())),
            (Processed, Validate) | (Validated, Validate) => Ok((Validated, ())),
            (Validated, Complete) => Ok((Completed, ())),
            (Received, Fail) | (Processed, Fail) | (Validated, Fail) => Ok((Errored, ())),

            (Received, Complete) | (Processed, Complete) => Err(
                TransitionError::PreconditionFailed("event has not been validated".to_string()),
            ),

            (Completed, _) | (Errored, _) => Err(TransitionError::InvalidTransition {
                from: format!("{:?}", self),
                to: "any state".to_string(),
            }),

            (from, input) => Err(TransitionError::InvalidTransition {
                from: format!("{:?}", from),
                to: format!("{:?}", input),
            }),
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, LifecycleStage::Completed | LifecycleStage::Errored)
    }
}
