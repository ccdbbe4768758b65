//! Shared Utilities
//!
//! Error taxonomy and payload validation used across all layers.

pub mod error;
pub mod validation;
