//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CompanyService**: company CRUD and invoice id lookup
//! - **InvoiceService**: invoice CRUD with the company embedded on reads

pub mod company_service;
pub mod invoice_service;

pub use company_service::{CompanyDetailDto, CompanyService, CompanyServiceImpl};
pub use invoice_service::{InvoiceDetailDto, InvoiceService, InvoiceServiceImpl};
