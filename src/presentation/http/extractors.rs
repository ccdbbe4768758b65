//! Custom Extractors
//!
//! Axum extractors that report rejections through [`AppError`], so a
//! missing or malformed body gets the same error envelope as any other
//! invalid request.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::shared::error::AppError;

/// Raw JSON request body.
///
/// Kept untyped so validation can inspect which keys were sent before the
/// payload is turned into a request DTO.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => AppError::InvalidRequest(
            "Request body is required and must be sent as application/json".into(),
        ),
        other => AppError::InvalidRequest(format!("Malformed JSON body: {}", other.body_text())),
    }
}

/// Parse an invoice id path segment.
pub fn parse_invoice_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidRequest(format!("Invalid invoice id: {}", raw)))
}

/// Check a company code path segment. NUL can never name a stored company.
pub fn parse_company_code(raw: String) -> Result<String, AppError> {
    if raw.contains('\0') {
        return Err(AppError::InvalidRequest(
            "Invalid company code: must not contain NUL characters".into(),
        ));
    }
    Ok(raw)
}
