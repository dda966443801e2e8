//! Infrastructure layer for svcdir.
//!
//! Contains the SQLite implementation of the repository trait defined in
//! `svcdir-core`, plus the database pool and demo seed data.

pub mod sqlite;
