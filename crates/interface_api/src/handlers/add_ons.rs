//! Add-on catalog handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::dto::AddOnDto;
use crate::translate::parse_dto;
use crate::{error::ApiError, AppState};

/// Lists stored add-ons
pub async fn list_add_ons(State(state): State<AppState>) -> Result<Json<Vec<AddOnDto>>, ApiError> {
    let catalog = state.catalog.lock().await;
    let add_ons = catalog.list_add_ons(&state.api)?;
    Ok(Json(add_ons.iter().map(AddOnDto::from).collect()))
}

/// Gets an add-on by ID
pub async fn get_add_on(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AddOnDto>, ApiError> {
    let catalog = state.catalog.lock().await;
    let add_on = catalog.get_add_on(&state.api, &id)?;
    Ok(Json(AddOnDto::from(&add_on)))
}

/// Validates and stores an add-on
pub async fn create_add_on(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<AddOnDto>), ApiError> {
    let dto: AddOnDto = parse_dto("add-on", &body)?;

    let catalog = state.catalog.lock().await;
    let add_on = catalog.add_add_on(&state.api, dto)?;
    Ok((StatusCode::CREATED, Json(AddOnDto::from(&add_on))))
}

/// Deletes an add-on
pub async fn delete_add_on(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let catalog = state.catalog.lock().await;
    catalog.delete_add_on(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
