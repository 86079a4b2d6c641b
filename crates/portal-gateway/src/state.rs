use std::sync::Arc;

use axum::response::Response;
use portal_redirector::FallbackChain;

/// The chain every non-reserved request is resolved against.
pub type RedirectChain = FallbackChain<Response>;

#[derive(Clone)]
pub struct AppState {
    chain: Arc<RedirectChain>,
}

impl AppState {
    pub fn new(chain: RedirectChain) -> Self {
        Self {
            chain: Arc::new(chain),
        }
    }

    pub fn chain(&self) -> &RedirectChain {
        &self.chain
    }
}
