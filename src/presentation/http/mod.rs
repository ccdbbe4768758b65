//! HTTP API
//!
//! Routes, handlers and request extractors for the REST interface.

pub mod extractors;
pub mod handlers;
pub mod routes;
