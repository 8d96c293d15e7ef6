use axum::{http::StatusCode, Router};

use gamestore_catalog::Game;
use gamestore_infra::EntityService;

use crate::app::routes::crud::{self, CrudKind};
use crate::app::services::AppServices;

impl CrudKind for Game {
    // Kept for client compatibility: a missing game on update answers 409, not 404.
    const UPDATE_MISSING_STATUS: StatusCode = StatusCode::CONFLICT;

    fn service(services: &AppServices) -> &EntityService<Game> {
        services.catalog.games()
    }
}

pub fn router() -> Router {
    crud::router::<Game>()
}
