//! # Domain Layer
//!
//! Companies, invoices and the repository contracts that persist them.
//! Nothing here depends on the infrastructure or presentation layers.

pub mod entities;

pub use entities::*;
