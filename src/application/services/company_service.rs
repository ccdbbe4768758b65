//! Company Service
//!
//! Company CRUD on top of a [`CompanyRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Company, CompanyChanges, CompanyRepository, CompanySummary, NewCompany};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Company service trait
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// List `{code, name}` for every company
    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError>;

    /// Get a company with the ids of its invoices
    async fn get_company(&self, code: &str) -> Result<CompanyDetailDto, AppError>;

    /// Create a new company
    async fn create_company(&self, company: NewCompany) -> Result<Company, AppError>;

    /// Replace name and description of a company
    async fn update_company(&self, code: &str, changes: CompanyChanges) -> Result<Company, AppError>;

    /// Delete a company that no invoice references
    async fn delete_company(&self, code: &str) -> Result<(), AppError>;

    /// Check the storage backend is reachable
    async fn ping(&self) -> Result<(), AppError>;
}

/// Company with the ids of invoices referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDetailDto {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

impl CompanyDetailDto {
    pub fn from_company(company: Company, invoices: Vec<i32>) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        }
    }
}

/// CompanyService implementation
pub struct CompanyServiceImpl<C>
where
    C: CompanyRepository,
{
    company_repo: Arc<C>,
}

impl<C> CompanyServiceImpl<C>
where
    C: CompanyRepository,
{
    pub fn new(company_repo: Arc<C>) -> Self {
        Self { company_repo }
    }
}

#[async_trait]
impl<C> CompanyService for CompanyServiceImpl<C>
where
    C: CompanyRepository + 'static,
{
    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError> {
        let result = self.company_repo.list().await;
        metrics::record_operation("company", "list", &result);
        result
    }

    async fn get_company(&self, code: &str) -> Result<CompanyDetailDto, AppError> {
        let result: Result<CompanyDetailDto, AppError> = async {
            let company = self
                .company_repo
                .find_by_code(code)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("No matching company: {}", code)))?;

            // Separate statement; an invoice added in between may or may not appear.
            let invoices = self.company_repo.find_invoice_ids(code).await?;

            Ok(CompanyDetailDto::from_company(company, invoices))
        }
        .await;

        metrics::record_operation("company", "get", &result);
        result
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company, AppError> {
        let result = self.company_repo.create(&company).await;
        metrics::record_operation("company", "create", &result);

        if result.is_ok() {
            tracing::info!(code = %company.code, "Company created");
        }
        result
    }

    async fn update_company(&self, code: &str, changes: CompanyChanges) -> Result<Company, AppError> {
        let result = self.company_repo.update(code, &changes).await;
        metrics::record_operation("company", "update", &result);

        if result.is_ok() {
            tracing::debug!(code = %code, "Company updated");
        }
        result
    }

    async fn delete_company(&self, code: &str) -> Result<(), AppError> {
        let result = self.company_repo.delete(code).await;
        metrics::record_operation("company", "delete", &result);

        match &result {
            Ok(()) => tracing::info!(code = %code, "Company deleted"),
            Err(AppError::Conflict(_)) => {
                tracing::debug!(code = %code, "Company delete refused, invoices still reference it")
            }
            Err(_) => {}
        }
        result
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.company_repo.ping().await
    }
}
