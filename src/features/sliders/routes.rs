use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sliders::handlers;
use crate::features::sliders::services::SliderService;

/// Create routes for the sliders feature
pub fn routes(service: Arc<SliderService>) -> Router {
    Router::new()
        .route(
            "/sliders",
            get(handlers::list_sliders).post(handlers::create_slider),
        )
        .route(
            "/sliders/{id}",
            get(handlers::get_slider)
                .put(handlers::update_slider)
                .delete(handlers::delete_slider),
        )
        .with_state(service)
}
