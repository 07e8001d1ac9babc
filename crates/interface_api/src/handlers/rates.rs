//! Rate kind handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use core_kernel::ParamSchema;

use crate::{error::ApiError, AppState};

/// Registered type names, in registration order
#[derive(Debug, Serialize)]
pub struct TypeListResponse {
    pub types: Vec<String>,
}

impl TypeListResponse {
    pub fn new(types: Vec<&str>) -> Self {
        Self {
            types: types.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Lists registered rate kinds
pub async fn list_rates(State(state): State<AppState>) -> Json<TypeListResponse> {
    Json(TypeListResponse::new(state.api.list_rates()))
}

/// Returns the parameter schema of a rate kind
pub async fn rate_schema(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<Json<ParamSchema>, ApiError> {
    let schema = state.api.rate_schema(&type_name)?;
    Ok(Json(schema.clone()))
}
