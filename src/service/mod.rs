// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Firewall Requests
//!
//! Coordinates the pure domain rules with the outside world:
//!
//! ```text
//! NATS message
//!     ↓
//! Dispatcher (this module)
//!     ↓
//! EventLifecycle: process → validate
//!     ↓
//! SecurityGroupDeleter (cloud provider)
//!     ↓
//! EventLifecycle: complete | error
//!     ↓
//! Publisher (done / error subject)
//! ```

pub mod dispatcher;
pub mod lifecycle;

pub use dispatcher::Dispatcher;
pub use lifecycle::{Disposition, EventLifecycle, LifecycleError};
