//! CRUD handlers shared by the three entity kinds.
//!
//! Each kind plugs in through [`CrudKind`], which picks its service and the
//! status an update of a missing id answers with.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use gamestore_catalog::CatalogEntity;
use gamestore_infra::EntityService;

use crate::app::errors;
use crate::app::services::AppServices;

pub trait CrudKind: CatalogEntity {
    /// Status for `PUT` on an id that does not exist.
    const UPDATE_MISSING_STATUS: StatusCode = StatusCode::NOT_FOUND;

    fn service(services: &AppServices) -> &EntityService<Self>;
}

/// `/` and `/:id` routes for one kind.
pub fn router<E: CrudKind>() -> Router {
    Router::new()
        .route("/", get(list_all::<E>).post(create::<E>))
        .route("/:id", get(get_one::<E>).put(update::<E>).delete(delete::<E>))
}

pub async fn get_one<E: CrudKind>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id::<E::Id>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match E::service(&services).find_by_id(id).await {
        Ok(entity) => (StatusCode::OK, Json(entity)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn list_all<E: CrudKind>(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match E::service(&services).list_all().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn create<E: CrudKind>(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<E::Input>, JsonRejection>,
) -> axum::response::Response {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match E::service(&services).add(input).await {
        Ok(entity) => (StatusCode::OK, Json(entity)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn update<E: CrudKind>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<E::Input>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_id::<E::Id>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match E::service(&services).update(id, input).await {
        Ok(entity) => (StatusCode::OK, Json(entity)).into_response(),
        Err(e) if e.is_not_found() => {
            errors::json_error(E::UPDATE_MISSING_STATUS, "not_found", e.to_string())
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete<E: CrudKind>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id::<E::Id>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match E::service(&services).delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            format!("{} with id {} deleted", E::KIND.label(), id),
        )
            .into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
