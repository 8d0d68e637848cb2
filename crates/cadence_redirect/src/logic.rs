// --- File: crates/cadence_redirect/src/logic.rs ---
use crate::policy::{RedirectPolicy, RejectReason};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Query string of the redirect endpoints, e.g. `?redirect=/event-types/42`.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct RedirectQuery {
    /// Untrusted target supplied by the client
    #[cfg_attr(feature = "openapi", schema(example = "/event-types/42"))]
    pub redirect: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResolvedRedirect {
    /// Path the client should navigate to
    pub target: String,
    /// Whether `target` is the requested path rather than the fallback
    pub accepted: bool,
    /// Why the requested path was dropped, if it was
    pub reason: Option<RejectReason>,
}

/// Applies the policy and logs dropped candidates.
///
/// The candidate is logged with `{:?}` so control characters stay escaped.
pub fn resolve_redirect(policy: &RedirectPolicy, candidate: Option<&str>) -> ResolvedRedirect {
    match policy.check(candidate) {
        Ok(target) => {
            debug!("Redirect accepted: {:?}", target);
            ResolvedRedirect {
                target: target.to_string(),
                accepted: true,
                reason: None,
            }
        }
        Err(RejectReason::Missing) => ResolvedRedirect {
            target: policy.default_path().to_string(),
            accepted: false,
            reason: Some(RejectReason::Missing),
        },
        Err(reason) => {
            warn!(
                "Rejected redirect target {:?} ({}); using {}",
                candidate.unwrap_or_default(),
                reason,
                policy.default_path()
            );
            ResolvedRedirect {
                target: policy.default_path().to_string(),
                accepted: false,
                reason: Some(reason),
            }
        }
    }
}
