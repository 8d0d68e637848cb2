// --- File: crates/cadence_redirect/src/policy.rs ---
//! Safe redirect policy.
//!
//! Decides whether an untrusted "where to go next" string may be used as a
//! redirect target. The answer is always either the candidate, unmodified,
//! or the policy's default path. Rules, in order:
//!
//! 1. absent or empty: rejected
//! 2. not starting with `/`: rejected (`http://host`, `host/path`)
//! 3. starting with `//`: rejected (protocol-relative)
//! 4. containing `\` anywhere: rejected (browsers may read it as `/`)
//! 5. not starting with an allowlisted prefix: rejected
//!
//! Nothing here returns an error to the caller; [`RejectReason`] exists so
//! callers can log why a candidate was dropped.

use cadence_config::{PrefixMatch, RedirectConfig};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback used when neither the caller nor the configuration names one.
pub const DEFAULT_REDIRECT_PATH: &str = "/dashboard";

/// Internal route roots a user may be sent back to after a login or callback.
pub const BUILTIN_ALLOWED_PREFIXES: [&str; 9] = [
    "/dashboard",
    "/event-types",
    "/availability",
    "/settings",
    "/bookings",
    "/appearance",
    "/links",
    "/emails",
    "/payments",
];

static BUILTIN_POLICY: Lazy<RedirectPolicy> = Lazy::new(RedirectPolicy::default);

/// The rule a rejected candidate failed.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("no redirect target supplied")]
    Missing,
    #[error("redirect target is not a root-relative path")]
    NotRootRelative,
    #[error("redirect target is protocol-relative")]
    ProtocolRelative,
    #[error("redirect target contains a backslash")]
    Backslash,
    #[error("redirect target is outside the allowed routes")]
    NotAllowlisted,
}

#[derive(Debug, Clone)]
pub struct RedirectPolicy {
    allowed_prefixes: Vec<String>,
    default_path: String,
    prefix_match: PrefixMatch,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::new(BUILTIN_ALLOWED_PREFIXES, DEFAULT_REDIRECT_PATH)
    }
}

impl RedirectPolicy {
    /// Creates a policy with plain prefix matching.
    ///
    /// `default_path` is trusted as given.
    pub fn new<I, S>(allowed_prefixes: I, default_path: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_prefixes: allowed_prefixes.into_iter().map(Into::into).collect(),
            default_path: default_path.into(),
            prefix_match: PrefixMatch::Plain,
        }
    }

    pub fn builder() -> RedirectPolicyBuilder {
        RedirectPolicyBuilder::default()
    }

    /// Built-in allowlist combined with the configured default path and match mode.
    pub fn from_config(config: &RedirectConfig) -> Self {
        Self::builder()
            .default_path(config.default_path.clone())
            .prefix_match(config.prefix_match)
            .build()
    }

    pub fn allowed_prefixes(&self) -> &[String] {
        &self.allowed_prefixes
    }

    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    pub fn prefix_match(&self) -> PrefixMatch {
        self.prefix_match
    }

    /// Runs the rejection pipeline. `Ok` carries the candidate unchanged.
    pub fn check<'a>(&self, candidate: Option<&'a str>) -> Result<&'a str, RejectReason> {
        let candidate = match candidate {
            Some(c) if !c.is_empty() => c,
            _ => return Err(RejectReason::Missing),
        };
        if !candidate.starts_with('/') {
            return Err(RejectReason::NotRootRelative);
        }
        if candidate.starts_with("//") {
            return Err(RejectReason::ProtocolRelative);
        }
        if candidate.contains('\\') {
            return Err(RejectReason::Backslash);
        }
        if !self
            .allowed_prefixes
            .iter()
            .any(|prefix| self.matches_prefix(candidate, prefix))
        {
            return Err(RejectReason::NotAllowlisted);
        }
        Ok(candidate)
    }

    /// The candidate if it passes every rule, otherwise the policy's default path.
    pub fn validate<'a>(&'a self, candidate: Option<&'a str>) -> &'a str {
        self.check(candidate).unwrap_or(self.default_path.as_str())
    }

    /// Like [`validate`](Self::validate) with a per-call fallback.
    pub fn validate_or<'a>(&self, candidate: Option<&'a str>, default_path: &'a str) -> &'a str {
        self.check(candidate).unwrap_or(default_path)
    }

    pub fn is_allowed(&self, candidate: &str) -> bool {
        self.check(Some(candidate)).is_ok()
    }

    fn matches_prefix(&self, candidate: &str, prefix: &str) -> bool {
        let Some(rest) = candidate.strip_prefix(prefix) else {
            return false;
        };
        match self.prefix_match {
            PrefixMatch::Plain => true,
            PrefixMatch::Segment => {
                prefix.ends_with('/')
                    || matches!(rest.chars().next(), None | Some('/') | Some('?') | Some('#'))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RedirectPolicyBuilder {
    allowed_prefixes: Option<Vec<String>>,
    default_path: Option<String>,
    prefix_match: PrefixMatch,
}

impl RedirectPolicyBuilder {
    /// Adds a prefix. The first call replaces the built-in allowlist.
    pub fn allow(mut self, prefix: impl Into<String>) -> Self {
        self.allowed_prefixes
            .get_or_insert_with(Vec::new)
            .push(prefix.into());
        self
    }

    pub fn default_path(mut self, default_path: impl Into<String>) -> Self {
        self.default_path = Some(default_path.into());
        self
    }

    pub fn prefix_match(mut self, prefix_match: PrefixMatch) -> Self {
        self.prefix_match = prefix_match;
        self
    }

    pub fn build(self) -> RedirectPolicy {
        RedirectPolicy {
            allowed_prefixes: self.allowed_prefixes.unwrap_or_else(|| {
                BUILTIN_ALLOWED_PREFIXES
                    .iter()
                    .map(|p| p.to_string())
                    .collect()
            }),
            default_path: self
                .default_path
                .unwrap_or_else(|| DEFAULT_REDIRECT_PATH.to_string()),
            prefix_match: self.prefix_match,
        }
    }
}

/// Validates against the built-in allowlist, falling back to `/dashboard`.
pub fn validate_redirect(candidate: Option<&str>) -> &str {
    BUILTIN_POLICY.validate_or(candidate, DEFAULT_REDIRECT_PATH)
}

/// Validates against the built-in allowlist with a caller-supplied fallback.
pub fn validate_redirect_or<'a>(candidate: Option<&'a str>, default_path: &'a str) -> &'a str {
    BUILTIN_POLICY.validate_or(candidate, default_path)
}
