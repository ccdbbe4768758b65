//! Response DTOs
//!
//! Envelopes wrapping service results under their JSON keys.

use serde::Serialize;

use crate::application::services::{CompanyDetailDto, InvoiceDetailDto};
use crate::domain::{Company, CompanySummary, Invoice, InvoiceSummary};

/// `{companies: [{code, name}]}`
#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

/// `{company: {code, name, description}}`
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

/// `{company: {code, name, description, invoices: [id]}}`
#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetailDto,
}

/// `{invoices: [{id, comp_code}]}`
#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceSummary>,
}

/// `{invoice: {id, comp_code, amt, paid, add_date, paid_date}}`
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

/// `{invoice: {id, amt, paid, add_date, paid_date, company}}`
#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetailDto,
}

/// `{status: "deleted"}`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}
