//! Invoice entity and repository trait.
//!
//! Maps to the `invoices` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// An invoice issued against a company.
///
/// Maps to the `invoices` table:
/// - id: SERIAL PRIMARY KEY
/// - comp_code: TEXT NOT NULL REFERENCES companies(code) ON DELETE RESTRICT
/// - amt: DOUBLE PRECISION NOT NULL CHECK (amt > 0)
/// - paid: BOOLEAN NOT NULL DEFAULT FALSE
/// - add_date: DATE NOT NULL DEFAULT CURRENT_DATE
/// - paid_date: DATE NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Storage-assigned identifier
    pub id: i32,

    /// Code of the owning company
    pub comp_code: String,

    pub amt: f64,

    pub paid: bool,

    /// Date the invoice was recorded
    pub add_date: NaiveDate,

    pub paid_date: Option<NaiveDate>,
}

/// `{id, comp_code}` projection returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code.clone(),
        }
    }
}

/// Fields accepted when creating an invoice; everything else is defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// Check that an amount is a finite, strictly positive number.
pub fn validate_amount(amt: f64) -> Result<(), AppError> {
    if !amt.is_finite() {
        return Err(AppError::InvalidRequest("amt must be a number".into()));
    }
    if amt <= 0.0 {
        return Err(AppError::InvalidRequest("amt must be greater than zero".into()));
    }
    Ok(())
}

/// Repository trait for Invoice data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// All invoices ordered by id.
    async fn list(&self) -> Result<Vec<InvoiceSummary>, AppError>;

    /// Find an invoice by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, AppError>;

    /// Insert an invoice with `paid = false`, `add_date = today` and no
    /// paid date. Fails with `Conflict` when `comp_code` names no company.
    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, AppError>;

    /// Overwrite the amount only. Fails with `NotFound` when absent.
    async fn update_amount(&self, id: i32, amt: f64) -> Result<Invoice, AppError>;

    /// Remove an invoice. Fails with `NotFound` when absent.
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}
