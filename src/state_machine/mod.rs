// Copyright (c) 2025 - Cowboy AI, Inc.
//! Finite State Machine Abstractions
//!
//! Generic state machine types for modeling request lifecycles. Transitions
//! are pure functions: `(State, Input) → Result<(State, Output)>`.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: States are strongly typed enums
//! 2. **Pure Functions**: All transitions are pure
//! 3. **Explicit**: All transitions explicitly defined
//!
//! # Example
//!
//! ```rust
//! use firewall_delete_aws::state_machine::{StateMachine, TransitionResult};
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! enum Switch {
//!     Off,
//!     On,
//! }
//!
//! struct Press;
//!
//! impl StateMachine for Switch {
//!     type Input = Press;
//!     type Output = ();
//!
//!     fn transition(&self, _input: &Press) -> TransitionResult<(Self, ())> {
//!         match self {
//!             Switch::Off => Ok((Switch::On, ())),
//!             Switch::On => Ok((Switch::Off, ())),
//!         }
//!     }
//! }
//!
//! let (next, _) = Switch::Off.transition(&Press).unwrap();
//! assert_eq!(next, Switch::On);
//! ```

pub mod event_lifecycle;

pub use event_lifecycle::{LifecycleInput, LifecycleStage};

/// Result of a state transition
pub type TransitionResult<S> = Result<S, TransitionError>;

/// Errors that can occur during state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Transition from current state to target state is not allowed
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Precondition not met for transition
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

/// Trait for finite state machines
///
/// Implement this trait to define a state machine with typed states,
/// inputs, and outputs.
pub trait StateMachine: Sized + Clone {
    /// Input type that triggers transitions
    type Input;

    /// Output type produced by transitions (use () if none)
    type Output;

    /// Attempt to transition to a new state given an input
    ///
    /// # Returns
    /// - Ok((new_state, output)) if transition is valid
    /// - Err(TransitionError) if transition is invalid
    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)>;

    /// Check if a transition is valid without performing it
    fn can_transition(&self, input: &Self::Input) -> bool {
        self.transition(input).is_ok()
    }

    /// Whether no input leads out of this state
    fn is_terminal(&self) -> bool;
}
