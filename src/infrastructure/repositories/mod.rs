//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgCompanyRepository** / **PgInvoiceRepository** - PostgreSQL backed
//! - **InMemoryCompanyRepository** / **InMemoryInvoiceRepository** - share an
//!   [`InMemoryStore`], used for local runs and tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgCompanyRepository, PgInvoiceRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let company_repo = PgCompanyRepository::new(pool.clone());
//!     let invoice_repo = PgInvoiceRepository::new(pool);
//! }
//! ```

use std::time::Instant;

pub mod company_repository;
pub mod invoice_repository;
pub mod memory;

pub use company_repository::PgCompanyRepository;
pub use invoice_repository::PgInvoiceRepository;
pub use memory::{InMemoryCompanyRepository, InMemoryInvoiceRepository, InMemoryStore};

use crate::infrastructure::metrics;

fn observe(operation: &str, table: &str, start: Instant) {
    metrics::record_db_query(operation, table, start.elapsed().as_secs_f64());
}
