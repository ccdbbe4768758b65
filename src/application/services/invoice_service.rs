//! Invoice Service
//!
//! Invoice CRUD. Reading a single invoice composes the invoice row with its
//! company, fetched through the [`CompanyRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    validate_amount, Company, CompanyRepository, Invoice, InvoiceRepository, InvoiceSummary,
    NewInvoice,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Invoice service trait
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// List `{id, comp_code}` for every invoice
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError>;

    /// Get an invoice with its company embedded
    async fn get_invoice(&self, id: i32) -> Result<InvoiceDetailDto, AppError>;

    /// Create an unpaid invoice dated today
    async fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, AppError>;

    /// Change the amount of an invoice
    async fn update_invoice(&self, id: i32, amt: f64) -> Result<Invoice, AppError>;

    /// Delete an invoice
    async fn delete_invoice(&self, id: i32) -> Result<(), AppError>;
}

/// Invoice whose `comp_code` has been replaced by the company itself.
///
/// `company` is `None` when the company was deleted between the invoice read
/// and the company read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetailDto {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Option<Company>,
}

impl InvoiceDetailDto {
    pub fn from_invoice(invoice: Invoice, company: Option<Company>) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

/// InvoiceService implementation
pub struct InvoiceServiceImpl<I, C>
where
    I: InvoiceRepository,
    C: CompanyRepository,
{
    invoice_repo: Arc<I>,
    company_repo: Arc<C>,
}

impl<I, C> InvoiceServiceImpl<I, C>
where
    I: InvoiceRepository,
    C: CompanyRepository,
{
    pub fn new(invoice_repo: Arc<I>, company_repo: Arc<C>) -> Self {
        Self {
            invoice_repo,
            company_repo,
        }
    }

    /// Two independent statements, not a transaction.
    async fn fetch_detail(&self, id: i32) -> Result<InvoiceDetailDto, AppError> {
        let invoice = self
            .invoice_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No matching invoice: {}", id)))?;

        let comp_code = invoice.comp_code.clone();
        let company = self.company_repo.find_by_code(&comp_code).await?;
        if company.is_none() {
            tracing::warn!(
                invoice_id = id,
                comp_code = %comp_code,
                "Company disappeared while reading invoice"
            );
        }

        Ok(InvoiceDetailDto::from_invoice(invoice, company))
    }
}

#[async_trait]
impl<I, C> InvoiceService for InvoiceServiceImpl<I, C>
where
    I: InvoiceRepository + 'static,
    C: CompanyRepository + 'static,
{
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        let result = self.invoice_repo.list().await;
        metrics::record_operation("invoice", "list", &result);
        result
    }

    async fn get_invoice(&self, id: i32) -> Result<InvoiceDetailDto, AppError> {
        let result = self.fetch_detail(id).await;
        metrics::record_operation("invoice", "get", &result);
        result
    }

    async fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, AppError> {
        let result: Result<Invoice, AppError> = async {
            if invoice.comp_code.trim().is_empty() {
                return Err(AppError::InvalidRequest("comp_code is required".into()));
            }
            validate_amount(invoice.amt)?;

            self.invoice_repo.create(&invoice).await
        }
        .await;
        metrics::record_operation("invoice", "create", &result);

        if let Ok(created) = &result {
            tracing::info!(
                invoice_id = created.id,
                comp_code = %created.comp_code,
                "Invoice created"
            );
        }
        result
    }

    async fn update_invoice(&self, id: i32, amt: f64) -> Result<Invoice, AppError> {
        let result = match validate_amount(amt) {
            Ok(()) => self.invoice_repo.update_amount(id, amt).await,
            Err(e) => Err(e),
        };
        metrics::record_operation("invoice", "update", &result);

        if result.is_ok() {
            tracing::debug!(invoice_id = id, "Invoice amount updated");
        }
        result
    }

    async fn delete_invoice(&self, id: i32) -> Result<(), AppError> {
        let result = self.invoice_repo.delete(id).await;
        metrics::record_operation("invoice", "delete", &result);

        if result.is_ok() {
            tracing::info!(invoice_id = id, "Invoice deleted");
        }
        result
    }
}
