//! In-memory repositories for local runs and tests.
//!
//! Both repositories share one [`InMemoryStore`] so the company/invoice
//! relationship can be checked the same way the PostgreSQL schema does:
//! unique codes, invoices must name an existing company, and a company
//! cannot be deleted while invoices reference it.
//!
//! Codes are kept in a `BTreeMap`, so listings come out in byte order; the
//! PostgreSQL listing sorts with `COLLATE "C"` to agree.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{
    validate_amount, Company, CompanyChanges, CompanyRepository, CompanySummary, Invoice,
    InvoiceRepository, InvoiceSummary, NewCompany, NewInvoice,
};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    companies: BTreeMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
}

/// Shared backing store for the in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Company repository view over this store.
    pub fn companies(&self) -> InMemoryCompanyRepository {
        InMemoryCompanyRepository {
            store: self.clone(),
        }
    }

    /// Invoice repository view over this store.
    pub fn invoices(&self) -> InMemoryInvoiceRepository {
        InMemoryInvoiceRepository {
            store: self.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryCompanyRepository {
    store: InMemoryStore,
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn list(&self) -> Result<Vec<CompanySummary>, AppError> {
        let tables = self.store.tables.read();
        Ok(tables.companies.values().map(CompanySummary::from).collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Company>, AppError> {
        let tables = self.store.tables.read();
        Ok(tables.companies.get(code).cloned())
    }

    async fn find_invoice_ids(&self, code: &str) -> Result<Vec<i32>, AppError> {
        let tables = self.store.tables.read();
        Ok(tables
            .invoices
            .values()
            .filter(|invoice| invoice.comp_code == code)
            .map(|invoice| invoice.id)
            .collect())
    }

    async fn create(&self, company: &NewCompany) -> Result<Company, AppError> {
        let mut tables = self.store.tables.write();
        if tables.companies.contains_key(&company.code) {
            return Err(AppError::Conflict(format!(
                "Company already exists: {}",
                company.code
            )));
        }

        let stored = Company {
            code: company.code.clone(),
            name: company.name.clone(),
            description: company.description.clone(),
        };
        tables.companies.insert(stored.code.clone(), stored.clone());

        Ok(stored)
    }

    async fn update(&self, code: &str, changes: &CompanyChanges) -> Result<Company, AppError> {
        let mut tables = self.store.tables.write();
        let company = tables
            .companies
            .get_mut(code)
            .ok_or_else(|| AppError::NotFound(format!("No matching company: {}", code)))?;

        company.name = changes.name.clone();
        company.description = changes.description.clone();

        Ok(company.clone())
    }

    async fn delete(&self, code: &str) -> Result<(), AppError> {
        let mut tables = self.store.tables.write();
        if !tables.companies.contains_key(code) {
            return Err(AppError::NotFound(format!("No matching company: {}", code)));
        }
        if tables.invoices.values().any(|invoice| invoice.comp_code == code) {
            return Err(AppError::Conflict(format!(
                "Company {} still has invoices",
                code
            )));
        }

        tables.companies.remove(code);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryInvoiceRepository {
    store: InMemoryStore,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn list(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        let tables = self.store.tables.read();
        Ok(tables.invoices.values().map(InvoiceSummary::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        let tables = self.store.tables.read();
        Ok(tables.invoices.get(&id).cloned())
    }

    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, AppError> {
        validate_amount(invoice.amt)?;

        let mut tables = self.store.tables.write();
        if !tables.companies.contains_key(&invoice.comp_code) {
            return Err(AppError::Conflict(format!(
                "No matching company: {}",
                invoice.comp_code
            )));
        }

        tables.last_invoice_id += 1;
        let stored = Invoice {
            id: tables.last_invoice_id,
            comp_code: invoice.comp_code.clone(),
            amt: invoice.amt,
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        tables.invoices.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update_amount(&self, id: i32, amt: f64) -> Result<Invoice, AppError> {
        validate_amount(amt)?;

        let mut tables = self.store.tables.write();
        let invoice = tables
            .invoices
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("No matching invoice: {}", id)))?;

        invoice.amt = amt;
        Ok(invoice.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tables = self.store.tables.write();
        tables
            .invoices
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("No matching invoice: {}", id)))
    }
}
