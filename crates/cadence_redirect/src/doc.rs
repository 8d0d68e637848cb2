// --- File: crates/cadence_redirect/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use crate::logic::{RedirectQuery, ResolvedRedirect};
use crate::policy::RejectReason;

/// OpenAPI documentation for the redirect API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::redirect_handler,
        crate::handlers::resolve_redirect_handler
    ),
    components(
        schemas(
            RedirectQuery,
            ResolvedRedirect,
            RejectReason
        )
    ),
    tags(
        (name = "Redirect", description = "Post-login and callback redirects restricted to internal routes")
    )
)]
pub struct RedirectApiDoc;
