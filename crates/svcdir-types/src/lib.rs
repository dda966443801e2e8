//! Shared domain types for svcdir.
//!
//! This crate contains the service record, its request shapes, and the
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod error;
pub mod service;
