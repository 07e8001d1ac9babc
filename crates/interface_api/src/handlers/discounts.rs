//! Discount kind handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::ParamSchema;

use crate::handlers::rates::TypeListResponse;
use crate::{error::ApiError, AppState};

/// Lists registered discount kinds
pub async fn list_discounts(State(state): State<AppState>) -> Json<TypeListResponse> {
    Json(TypeListResponse::new(state.api.list_discounts()))
}

/// Returns the parameter schema of a discount kind
pub async fn discount_schema(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<Json<ParamSchema>, ApiError> {
    let schema = state.api.discount_schema(&type_name)?;
    Ok(Json(schema.clone()))
}
