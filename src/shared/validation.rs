//! Validation Utilities
//!
//! Payload checks that run before any repository call.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use super::error::AppError;
use crate::domain::validate_amount;

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e.message.clone().map(|m| m.to_string()).unwrap_or_default();
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();

    let message = messages
        .into_iter()
        .next()
        .unwrap_or_else(|| "Validation failed".into());

    AppError::InvalidRequest(message)
}

/// Text columns cannot hold NUL, so such strings are rejected up front.
pub fn no_nul_chars(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character")
            .with_message(Cow::Borrowed("must not contain NUL characters")));
    }
    Ok(())
}

/// Require the payload to be a JSON object.
pub fn require_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) => Ok(map),
        Value::Null => Err(AppError::InvalidRequest("Request body is required".into())),
        _ => Err(AppError::InvalidRequest(
            "Request body must be a JSON object".into(),
        )),
    }
}

/// Reject payloads that carry any of the `forbidden` keys, whatever their value.
pub fn reject_fields(body: &Map<String, Value>, forbidden: &[&str]) -> Result<(), AppError> {
    match forbidden.iter().find(|field| body.contains_key(**field)) {
        Some(field) => Err(AppError::InvalidRequest(format!(
            "Not allowed: {} cannot be changed",
            field
        ))),
        None => Ok(()),
    }
}

/// Shape-check a raw JSON payload and deserialize it into a request DTO.
pub fn parse_payload<T>(body: Value, forbidden: &[&str]) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let map = require_object(body)?;
    reject_fields(&map, forbidden)?;

    let request: T = serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::InvalidRequest(format!("Malformed request body: {}", e)))?;
    request.validate().map_err(validation_error)?;

    Ok(request)
}

/// Parse a monetary amount given as a JSON number or a numeric string.
pub fn parse_amount(value: Option<&Value>) -> Result<f64, AppError> {
    let amt = match value {
        None | Some(Value::Null) => {
            return Err(AppError::InvalidRequest("amt is required".into()));
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .ok_or_else(|| AppError::InvalidRequest("amt must be a number".into()))?;

    validate_amount(amt)?;
    Ok(amt)
}
