//! Business logic and repository trait definitions for svcdir.
//!
//! This crate defines the "port" (the service repository trait) that the
//! infrastructure layer implements, plus the pure validation rules and the
//! catalog service that ties them together. It depends only on
//! `svcdir-types` -- never on `svcdir-infra` or any database/IO crate.

pub mod repository;
pub mod service;
pub mod validate;
