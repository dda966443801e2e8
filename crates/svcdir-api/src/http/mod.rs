//! HTTP/REST API layer for svcdir.
//!
//! Axum-based REST API under `/api`, with CORS and request tracing, plus
//! static file serving for the browser client.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
