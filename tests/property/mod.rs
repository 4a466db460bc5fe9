// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of the request lifecycle checked with proptest.

mod lifecycle_properties;
