//! Company entity and repository trait.
//!
//! Maps to the `companies` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A company that invoices are issued against.
///
/// Maps to the `companies` table:
/// - code: TEXT PRIMARY KEY
/// - name: TEXT NOT NULL
/// - description: TEXT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Short identifier, immutable once created
    pub code: String,

    /// Display name
    pub name: String,

    pub description: Option<String>,
}

/// `{code, name}` projection returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// Fields accepted when creating a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Mutable fields of a company. The code never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyChanges {
    pub name: String,
    pub description: Option<String>,
}

/// Repository trait for Company data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// All companies ordered by code, compared bytewise.
    async fn list(&self) -> Result<Vec<CompanySummary>, AppError>;

    /// Find a company by its code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Company>, AppError>;

    /// Ids of invoices referencing `code`, ascending.
    async fn find_invoice_ids(&self, code: &str) -> Result<Vec<i32>, AppError>;

    /// Insert a company. Fails with `Conflict` when the code is taken.
    async fn create(&self, company: &NewCompany) -> Result<Company, AppError>;

    /// Overwrite name and description. Fails with `NotFound` when absent.
    async fn update(&self, code: &str, changes: &CompanyChanges) -> Result<Company, AppError>;

    /// Remove a company. Fails with `NotFound` when absent and with
    /// `Conflict` while invoices still reference it.
    async fn delete(&self, code: &str) -> Result<(), AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
