pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless engine calls
        .route(
            "/api/v1/recommendations/rank",
            post(handlers::handle_rank),
        )
        .route(
            "/api/v1/recommendations/explain",
            post(handlers::handle_explain),
        )
        // Full run for a stored profile
        .route(
            "/api/v1/users/:user_id/recommendations",
            get(handlers::handle_user_recommendations),
        )
        .with_state(state)
}
