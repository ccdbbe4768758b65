//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;

pub use logging::{create_trace_layer, track_metrics, MakeRequestSpan};
