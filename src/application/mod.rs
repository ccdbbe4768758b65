//! Application Layer
//!
//! Services orchestrating repository calls, and the request/response DTOs
//! exchanged with the presentation layer.

pub mod dto;
pub mod services;
