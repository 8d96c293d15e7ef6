use axum::Router;

pub mod accessories;
pub mod consoles;
pub mod crud;
pub mod games;
pub mod offers;
pub mod system;

/// Router for everything under `/catalog`.
pub fn router() -> Router {
    Router::new()
        .nest("/games", games::router())
        .nest("/consoles", consoles::router())
        .nest("/accessories", accessories::router())
        .merge(offers::router())
}
