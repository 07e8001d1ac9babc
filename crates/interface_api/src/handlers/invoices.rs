//! Invoice handlers

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::dto::InvoiceResponse;
use crate::{error::ApiError, AppState};

/// Prices a rental selection into an invoice
///
/// Nothing is persisted; the same request always yields the same invoice.
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let invoice = state.api.build_invoice_from_json(&body)?;

    info!(
        invoice = %invoice.invoice_number(),
        lines = invoice.invoice_lines().len(),
        discounts = invoice.discount_lines().len(),
        total = %invoice.total(),
        "Invoice built"
    );

    Ok(Json(InvoiceResponse::from(&invoice)))
}
