use std::sync::Arc;

use axum::{Router, middleware};

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

pub mod crud_api_router;
pub mod extract;
pub mod lessons;
pub mod public;
pub mod students;
pub mod teachers;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(lessons::router(state.clone()))
        .merge(teachers::router(state.clone()))
        .merge(students::router(state))
}

/// [`router`] with the error-shaping layers every deployment runs with.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
