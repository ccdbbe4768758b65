//! # Domain Entities
//!
//! Core domain entities and their repository traits.
//!
//! - **Company**: a business identified by a short immutable code
//! - **Invoice**: an amount billed to exactly one company
//!
//! Repository traits are implemented in the infrastructure layer, following
//! the dependency inversion principle.

mod company;
mod invoice;

pub use company::{Company, CompanyChanges, CompanyRepository, CompanySummary, NewCompany};
pub use invoice::{validate_amount, Invoice, InvoiceRepository, InvoiceSummary, NewInvoice};

#[cfg(test)]
pub use company::MockCompanyRepository;
#[cfg(test)]
pub use invoice::MockInvoiceRepository;
