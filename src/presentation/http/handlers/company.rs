//! Company Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::application::dto::response::{
    CompanyDetailResponse, CompanyListResponse, CompanyResponse, StatusResponse,
};
use crate::presentation::http::extractors::{parse_company_code, JsonPayload};
use crate::shared::error::AppError;
use crate::shared::validation::parse_payload;
use crate::startup::AppState;

/// List all companies
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<CompanyListResponse>, AppError> {
    let companies = state.companies.list_companies().await?;

    Ok(Json(CompanyListResponse { companies }))
}

/// Get a company with its invoice ids
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyDetailResponse>, AppError> {
    let code = parse_company_code(code)?;

    let company = state.companies.get_company(&code).await?;

    Ok(Json(CompanyDetailResponse { company }))
}

/// Create a new company
pub async fn create_company(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError> {
    let request: CreateCompanyRequest = parse_payload(body, &[])?;

    let company = state.companies.create_company(request.into()).await?;

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// Update name and description of a company
pub async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    JsonPayload(body): JsonPayload,
) -> Result<Json<CompanyResponse>, AppError> {
    let code = parse_company_code(code)?;

    // The code is the identity of the row and may never be rewritten
    let request: UpdateCompanyRequest = parse_payload(body, &["code"])?;

    let company = state
        .companies
        .update_company(&code, request.into())
        .await?;

    Ok(Json(CompanyResponse { company }))
}

/// Delete a company
pub async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    let code = parse_company_code(code)?;

    state.companies.delete_company(&code).await?;

    Ok(Json(StatusResponse::deleted()))
}
