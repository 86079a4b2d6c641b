use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, redirect_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// `/health` is reserved; every other path goes through the chain.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .fallback(redirect_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
