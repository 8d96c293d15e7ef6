use axum::Router;

use gamestore_catalog::Accessory;
use gamestore_infra::EntityService;

use crate::app::routes::crud::{self, CrudKind};
use crate::app::services::AppServices;

impl CrudKind for Accessory {
    fn service(services: &AppServices) -> &EntityService<Accessory> {
        services.catalog.accessories()
    }
}

pub fn router() -> Router {
    crud::router::<Accessory>()
}
