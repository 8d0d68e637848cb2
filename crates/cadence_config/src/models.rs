// --- File: crates/cadence_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

/// How a candidate path is compared against an allowlisted prefix.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMatch {
    /// Raw string prefix: `/dashboardXYZ` matches `/dashboard`.
    #[default]
    Plain,
    /// The prefix must end on a path segment: the next character is
    /// end of string, `/`, `?` or `#`.
    Segment,
}

// --- Redirect Config ---
// The allowlist itself is not configurable; it lives in cadence-redirect.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RedirectConfig {
    /// Fallback target for rejected candidates. Trusted, never re-validated.
    #[serde(default = "default_redirect_path")]
    pub default_path: String,
    #[serde(default)]
    pub prefix_match: PrefixMatch,
}

pub fn default_redirect_path() -> String {
    "/dashboard".to_string()
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            default_path: default_redirect_path(),
            prefix_match: PrefixMatch::default(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_redirect: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub redirect: Option<RedirectConfig>,
}
