use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/offers/:category", get(catalog_by_category))
        .route("/bundle-offers/:category", get(bundle_offers))
        .route("/special-offers", get(current_special_offers))
        // GET kept for existing clients; POST is the write-style form.
        .route(
            "/trigger-special-offer",
            get(trigger_special_offer).post(trigger_special_offer),
        )
}

pub async fn catalog_by_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let category = match errors::parse_category(&category) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    match services.catalog.catalog_by_category(category).await {
        Ok(catalog) => (StatusCode::OK, Json(catalog)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn bundle_offers(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let category = match errors::parse_category(&category) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    match services.catalog.bundle_offers(category).await {
        Ok(catalog) => (StatusCode::OK, Json(catalog)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn current_special_offers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.offers.current_offers().await {
        Ok(current) => (StatusCode::OK, Json(dto::special_offers_to_json(current))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn trigger_special_offer(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.offers.create_special_offer_now().await {
        Ok(_) => (StatusCode::OK, "Special offer generated.").into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
