//! # BizTime
//!
//! REST service tracking companies and the invoices issued against them.
//!
//! - RESTful HTTP API over companies and invoices
//! - PostgreSQL for persistent storage, or an in-memory store for local runs
//! - Referential integrity surfaced through a typed error taxonomy
//!
//! ## Module Structure
//!
//! ```text
//! biztime/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors and validation
//! ```

// Configuration module
pub mod config;

// Domain layer - Entities and repository contracts
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
