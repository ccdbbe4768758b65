//! Request DTOs
//!
//! Data structures for API request bodies. Payloads are first shape-checked
//! as raw JSON (see `shared::validation`) and then deserialized into these.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::{CompanyChanges, NewCompany};
use crate::shared::validation::no_nul_chars;

/// Create company request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(
        length(min = 1, max = 50, message = "Code must be 1-50 characters"),
        custom(function = "no_nul_chars")
    )]
    pub code: String,

    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "no_nul_chars")
    )]
    pub name: String,

    #[validate(custom(function = "no_nul_chars"))]
    pub description: Option<String>,
}

impl From<CreateCompanyRequest> for NewCompany {
    fn from(request: CreateCompanyRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            description: request.description,
        }
    }
}

/// Update company request. A `code` key is rejected before deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "no_nul_chars")
    )]
    pub name: String,

    #[validate(custom(function = "no_nul_chars"))]
    pub description: Option<String>,
}

impl From<UpdateCompanyRequest> for CompanyChanges {
    fn from(request: UpdateCompanyRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
        }
    }
}

/// Create invoice request
///
/// `amt` stays raw JSON so numeric strings can be accepted and errors
/// reported uniformly by `parse_amount`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(
        length(min = 1, message = "comp_code is required"),
        custom(function = "no_nul_chars")
    )]
    pub comp_code: String,

    #[serde(default)]
    pub amt: Option<Value>,
}

/// Update invoice request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    #[serde(default)]
    pub amt: Option<Value>,
}
