//! Invoice Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateInvoiceRequest, UpdateInvoiceRequest};
use crate::application::dto::response::{
    InvoiceDetailResponse, InvoiceListResponse, InvoiceResponse, StatusResponse,
};
use crate::domain::NewInvoice;
use crate::presentation::http::extractors::{parse_invoice_id, JsonPayload};
use crate::shared::error::AppError;
use crate::shared::validation::{parse_amount, parse_payload};
use crate::startup::AppState;

/// List all invoices
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<InvoiceListResponse>, AppError> {
    let invoices = state.invoices.list_invoices().await?;

    Ok(Json(InvoiceListResponse { invoices }))
}

/// Get an invoice with its company
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceDetailResponse>, AppError> {
    let id = parse_invoice_id(&id)?;

    let invoice = state.invoices.get_invoice(id).await?;

    Ok(Json(InvoiceDetailResponse { invoice }))
}

/// Create a new invoice
pub async fn create_invoice(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<(StatusCode, Json<InvoiceResponse>), AppError> {
    let request: CreateInvoiceRequest = parse_payload(body, &["id"])?;
    let amt = parse_amount(request.amt.as_ref())?;

    let invoice = state
        .invoices
        .create_invoice(NewInvoice {
            comp_code: request.comp_code,
            amt,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// Update the amount of an invoice
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(body): JsonPayload,
) -> Result<Json<InvoiceResponse>, AppError> {
    let id = parse_invoice_id(&id)?;

    // Identity and ownership are fixed at creation
    let request: UpdateInvoiceRequest = parse_payload(body, &["id", "comp_code"])?;
    let amt = parse_amount(request.amt.as_ref())?;

    let invoice = state.invoices.update_invoice(id, amt).await?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// Delete an invoice
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    let id = parse_invoice_id(&id)?;

    state.invoices.delete_invoice(id).await?;

    Ok(Json(StatusResponse::deleted()))
}
