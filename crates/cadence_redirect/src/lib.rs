// --- File: crates/cadence_redirect/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod policy;
#[cfg(test)]
mod policy_proptest;
#[cfg(test)]
mod policy_test;
pub mod routes;

pub use handlers::RedirectState;
pub use policy::{
    validate_redirect, validate_redirect_or, RedirectPolicy, RejectReason,
    BUILTIN_ALLOWED_PREFIXES, DEFAULT_REDIRECT_PATH,
};
pub use routes::routes;
