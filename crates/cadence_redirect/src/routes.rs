// --- File: crates/cadence_redirect/src/routes.rs ---

use crate::handlers::{redirect_handler, resolve_redirect_handler, RedirectState};
use axum::{routing::get, Router};
use cadence_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing the redirect routes.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let redirect_state = Arc::new(RedirectState::new(config));

    Router::new()
        .route("/redirect", get(redirect_handler))
        .route("/redirect/resolve", get(resolve_redirect_handler))
        .with_state(redirect_state)
}
