//! Company Repository Implementation
//!
//! PostgreSQL implementation of the CompanyRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use super::observe;
use crate::domain::{Company, CompanyChanges, CompanyRepository, CompanySummary, NewCompany};
use crate::shared::error::AppError;

/// Database row representation of the companies table.
#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    code: String,
    name: String,
    description: Option<String>,
}

impl CompanyRow {
    fn into_company(self) -> Company {
        Company {
            code: self.code,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CompanySummaryRow {
    code: String,
    name: String,
}

/// PostgreSQL company repository implementation.
///
/// Uniqueness of `code` and the invoice foreign key are enforced by the
/// schema; violations are translated into `Conflict` here.
#[derive(Clone)]
pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    /// Create a new PgCompanyRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    // Byte order, matching the in-memory store regardless of database collation
    async fn list(&self) -> Result<Vec<CompanySummary>, AppError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, CompanySummaryRow>(
            r#"
            SELECT code, name
            FROM companies
            ORDER BY code COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        observe("select", "companies", start);

        Ok(rows
            .into_iter()
            .map(|r| CompanySummary {
                code: r.code,
                name: r.name,
            })
            .collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Company>, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT code, name, description
            FROM companies
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        observe("select", "companies", start);

        Ok(row.map(|r| r.into_company()))
    }

    async fn find_invoice_ids(&self, code: &str) -> Result<Vec<i32>, AppError> {
        let start = Instant::now();
        let ids = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id
            FROM invoices
            WHERE comp_code = $1
            ORDER BY id
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;
        observe("select", "invoices", start);

        Ok(ids)
    }

    async fn create(&self, company: &NewCompany) -> Result<Company, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_db(e, format!("Company already exists: {}", company.code))
        })?;
        observe("insert", "companies", start);

        Ok(row.into_company())
    }

    async fn update(&self, code: &str, changes: &CompanyChanges) -> Result<Company, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies
            SET name = $2,
                description = $3
            WHERE code = $1
            RETURNING code, name, description
            "#,
        )
        .bind(code)
        .bind(&changes.name)
        .bind(&changes.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No matching company: {}", code)))?;
        observe("update", "companies", start);

        Ok(row.into_company())
    }

    async fn delete(&self, code: &str) -> Result<(), AppError> {
        let start = Instant::now();
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_db(e, format!("Company {} still has invoices", code))
            })?;
        observe("delete", "companies", start);

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No matching company: {}", code)));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
