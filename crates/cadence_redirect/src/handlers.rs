// --- File: crates/cadence_redirect/src/handlers.rs ---
use crate::logic::{resolve_redirect, RedirectQuery, ResolvedRedirect};
use crate::policy::RedirectPolicy;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use cadence_common::{config_error, unavailable, CadenceError};
use cadence_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, warn};

// State for redirect handlers
#[derive(Clone)]
pub struct RedirectState {
    pub config: Arc<AppConfig>,
    pub policy: Arc<RedirectPolicy>,
}

impl RedirectState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let policy = match config.redirect.as_ref() {
            Some(redirect_config) => RedirectPolicy::from_config(redirect_config),
            None => RedirectPolicy::default(),
        };
        Self {
            config,
            policy: Arc::new(policy),
        }
    }

    fn ensure_enabled(&self) -> Result<(), CadenceError> {
        if self.config.use_redirect {
            Ok(())
        } else {
            Err(unavailable("Redirect service is disabled."))
        }
    }
}

// An unparseable query string counts as "no candidate", not as a client error.
fn candidate_from(query: Result<Query<RedirectQuery>, QueryRejection>) -> Option<String> {
    match query {
        Ok(Query(query)) => query.redirect,
        Err(rejection) => {
            debug!("Ignoring malformed redirect query: {}", rejection);
            None
        }
    }
}

// Control characters pass the policy but cannot go into a header.
// Tab and non-ASCII bytes are valid header bytes and go out unchanged.
fn see_other(location: &str) -> Option<Response> {
    let value = HeaderValue::from_str(location).ok()?;
    Some((StatusCode::SEE_OTHER, [(LOCATION, value)]).into_response())
}

/// Sends the browser to the validated target with `303 See Other`.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/redirect",
    params(RedirectQuery),
    responses(
        (status = 303, description = "Redirect to the validated target or the default path"),
        (status = 503, description = "Redirect service disabled")
    ),
    tag = "Redirect"
))]
pub async fn redirect_handler(
    State(state): State<Arc<RedirectState>>,
    query: Result<Query<RedirectQuery>, QueryRejection>,
) -> Result<Response, CadenceError> {
    state.ensure_enabled()?;
    let candidate = candidate_from(query);
    let resolved = resolve_redirect(&state.policy, candidate.as_deref());
    if let Some(response) = see_other(&resolved.target) {
        return Ok(response);
    }

    warn!(
        "Redirect target {:?} is not a valid header value; using {}",
        resolved.target,
        state.policy.default_path()
    );
    see_other(state.policy.default_path())
        .ok_or_else(|| config_error("redirect default path is not a valid Location header"))
}

/// Returns the validated target as JSON for clients that navigate themselves.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/redirect/resolve",
    params(RedirectQuery),
    responses(
        (status = 200, description = "Validated target", body = ResolvedRedirect),
        (status = 503, description = "Redirect service disabled")
    ),
    tag = "Redirect"
))]
pub async fn resolve_redirect_handler(
    State(state): State<Arc<RedirectState>>,
    query: Result<Query<RedirectQuery>, QueryRejection>,
) -> Result<Json<ResolvedRedirect>, CadenceError> {
    state.ensure_enabled()?;
    let candidate = candidate_from(query);
    Ok(Json(resolve_redirect(&state.policy, candidate.as_deref())))
}
