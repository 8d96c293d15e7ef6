use axum::Router;

use gamestore_catalog::Console;
use gamestore_infra::EntityService;

use crate::app::routes::crud::{self, CrudKind};
use crate::app::services::AppServices;

impl CrudKind for Console {
    fn service(services: &AppServices) -> &EntityService<Console> {
        services.catalog.consoles()
    }
}

pub fn router() -> Router {
    crud::router::<Console>()
}
