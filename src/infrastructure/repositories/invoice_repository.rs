//! Invoice Repository Implementation
//!
//! PostgreSQL implementation of the InvoiceRepository trait.
//! Defaults for `paid`, `add_date` and `paid_date` come from the column
//! definitions, so inserts only carry the company code and amount.

use std::time::Instant;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::observe;
use crate::domain::{Invoice, InvoiceRepository, InvoiceSummary, NewInvoice};
use crate::shared::error::AppError;

/// Database row representation of the invoices table.
#[derive(Debug, sqlx::FromRow)]
struct InvoiceRow {
    id: i32,
    comp_code: String,
    amt: f64,
    paid: bool,
    add_date: NaiveDate,
    paid_date: Option<NaiveDate>,
}

impl InvoiceRow {
    fn into_invoice(self) -> Invoice {
        Invoice {
            id: self.id,
            comp_code: self.comp_code,
            amt: self.amt,
            paid: self.paid,
            add_date: self.add_date,
            paid_date: self.paid_date,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct InvoiceSummaryRow {
    id: i32,
    comp_code: String,
}

/// Translate an insert failure: the amount check becomes `InvalidRequest`,
/// a dangling `comp_code` becomes `Conflict`.
fn insert_error(err: sqlx::Error, comp_code: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
            AppError::InvalidRequest("amt must be greater than zero".into())
        }
        _ => AppError::from_db(err, format!("No matching company: {}", comp_code)),
    }
}

/// PostgreSQL invoice repository implementation.
#[derive(Clone)]
pub struct PgInvoiceRepository {
    pool: PgPool,
}

impl PgInvoiceRepository {
    /// Create a new PgInvoiceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {
    async fn list(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, InvoiceSummaryRow>(
            r#"
            SELECT id, comp_code
            FROM invoices
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        observe("select", "invoices", start);

        Ok(rows
            .into_iter()
            .map(|r| InvoiceSummary {
                id: r.id,
                comp_code: r.comp_code,
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        observe("select", "invoices", start);

        Ok(row.map(|r| r.into_invoice()))
    }

    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            INSERT INTO invoices (comp_code, amt)
            VALUES ($1, $2)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(&invoice.comp_code)
        .bind(invoice.amt)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, &invoice.comp_code))?;
        observe("insert", "invoices", start);

        Ok(row.into_invoice())
    }

    async fn update_amount(&self, id: i32, amt: f64) -> Result<Invoice, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            UPDATE invoices
            SET amt = $2
            WHERE id = $1
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(id)
        .bind(amt)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "amt must be greater than zero"))?
        .ok_or_else(|| AppError::NotFound(format!("No matching invoice: {}", id)))?;
        observe("update", "invoices", start);

        Ok(row.into_invoice())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let start = Instant::now();
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        observe("delete", "invoices", start);

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No matching invoice: {}", id)));
        }

        Ok(())
    }
}
