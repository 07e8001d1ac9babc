//! HTTP API Layer
//!
//! This crate provides the REST API for room rental pricing using Axum,
//! plus the JSON-to-domain translation the API is built on.
//!
//! # Architecture
//!
//! - **Translate**: DTOs to rates, discounts, rooms, add-ons, and invoices
//! - **Catalog**: stored rooms and add-ons, validated on the way in
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: request logging
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, RentableCatalog, RentalApi};
//!
//! let catalog = RentableCatalog::open(&config.data_dir)?;
//! let app = create_router(RentalApi::with_defaults(), catalog, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod translate;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers::{add_ons, discounts, health, invoices, rates, rooms};
use crate::middleware::request_logging;

pub use catalog::{CatalogError, RentableCatalog};
pub use error::ApiError;
pub use translate::{RentalApi, TranslateError};

/// Application state shared across handlers
///
/// The registries are read-only once the router is built. Catalog writes
/// rewrite whole documents, so catalog access is serialized.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<RentalApi>,
    pub catalog: Arc<Mutex<RentableCatalog>>,
    pub config: AppConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `api` - Translation layer with its registries populated
/// * `catalog` - Stored rooms and add-ons
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(api: RentalApi, catalog: RentableCatalog, config: AppConfig) -> Router {
    let state = AppState {
        api: Arc::new(api),
        catalog: Arc::new(Mutex::new(catalog)),
        config,
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let rate_routes = Router::new()
        .route("/", get(rates::list_rates))
        .route("/:type_name/schema", get(rates::rate_schema));

    let discount_routes = Router::new()
        .route("/", get(discounts::list_discounts))
        .route("/:type_name/schema", get(discounts::discount_schema));

    let room_routes = Router::new()
        .route("/", get(rooms::list_rooms).post(rooms::create_room))
        .route("/:id", get(rooms::get_room).delete(rooms::delete_room));

    let add_on_routes = Router::new()
        .route("/", get(add_ons::list_add_ons).post(add_ons::create_add_on))
        .route("/:id", get(add_ons::get_add_on).delete(add_ons::delete_add_on));

    let invoice_routes = Router::new().route("/", post(invoices::create_invoice));

    let api_routes = Router::new()
        .nest("/rates", rate_routes)
        .nest("/discounts", discount_routes)
        .nest("/rooms", room_routes)
        .nest("/add-ons", add_on_routes)
        .nest("/invoices", invoice_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
