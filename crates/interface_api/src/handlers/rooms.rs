//! Room catalog handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::dto::RoomDto;
use crate::translate::parse_dto;
use crate::{error::ApiError, AppState};

/// Lists stored rooms
pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<RoomDto>>, ApiError> {
    let catalog = state.catalog.lock().await;
    let rooms = catalog.list_rooms(&state.api)?;
    Ok(Json(rooms.iter().map(RoomDto::from).collect()))
}

/// Gets a room by ID
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoomDto>, ApiError> {
    let catalog = state.catalog.lock().await;
    let room = catalog.get_room(&state.api, &id)?;
    Ok(Json(RoomDto::from(&room)))
}

/// Validates and stores a room
pub async fn create_room(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<RoomDto>), ApiError> {
    let dto: RoomDto = parse_dto("room", &body)?;

    let catalog = state.catalog.lock().await;
    let room = catalog.add_room(&state.api, dto)?;
    Ok((StatusCode::CREATED, Json(RoomDto::from(&room))))
}

/// Deletes a room
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let catalog = state.catalog.lock().await;
    catalog.delete_room(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
