#[cfg(test)]
mod tests {
    use crate::policy::{
        validate_redirect, validate_redirect_or, RedirectPolicy, RejectReason,
        BUILTIN_ALLOWED_PREFIXES, DEFAULT_REDIRECT_PATH,
    };
    use cadence_config::{PrefixMatch, RedirectConfig};

    #[test]
    fn test_missing_candidate_uses_default() {
        assert_eq!(validate_redirect(None), "/dashboard");
        assert_eq!(validate_redirect(Some("")), "/dashboard");
        assert_eq!(validate_redirect_or(None, "/custom"), "/custom");
        assert_eq!(validate_redirect_or(Some(""), "/custom"), "/custom");
    }

    #[test]
    fn test_rejects_absolute_and_relative_urls() {
        assert_eq!(validate_redirect(Some("http://evil.com")), "/dashboard");
        assert_eq!(validate_redirect(Some("https://evil.com/dashboard")), "/dashboard");
        assert_eq!(validate_redirect(Some("evil.com/path")), "/dashboard");
        assert_eq!(validate_redirect(Some("dashboard")), "/dashboard");
        assert_eq!(validate_redirect(Some("javascript:alert(1)")), "/dashboard");
        assert_eq!(validate_redirect(Some(" /dashboard")), "/dashboard");
    }

    #[test]
    fn test_rejects_protocol_relative() {
        assert_eq!(validate_redirect(Some("//evil.com")), "/dashboard");
        assert_eq!(validate_redirect(Some("//evil.com/dashboard")), "/dashboard");
        assert_eq!(validate_redirect(Some("///evil.com")), "/dashboard");
    }

    #[test]
    fn test_rejects_backslash_anywhere() {
        assert_eq!(validate_redirect(Some("/dashboard\\@evil.com")), "/dashboard");
        assert_eq!(validate_redirect(Some("/\\evil.com")), "/dashboard");
        assert_eq!(validate_redirect(Some("/settings/profile\\")), "/dashboard");
    }

    #[test]
    fn test_allowlisted_paths_pass_unchanged() {
        assert_eq!(validate_redirect(Some("/event-types/123")), "/event-types/123");
        assert_eq!(validate_redirect(Some("/dashboard")), "/dashboard");
        assert_eq!(
            validate_redirect(Some("/bookings?status=upcoming#top")),
            "/bookings?status=upcoming#top"
        );
        assert_eq!(validate_redirect(Some("/settings/profile")), "/settings/profile");
        for prefix in BUILTIN_ALLOWED_PREFIXES {
            assert_eq!(validate_redirect_or(Some(prefix), "/fallback"), prefix);
        }
    }

    #[test]
    fn test_unknown_routes_use_default() {
        assert_eq!(validate_redirect(Some("/admin")), "/dashboard");
        assert_eq!(validate_redirect(Some("/")), "/dashboard");
        assert_eq!(validate_redirect(Some("/Dashboard")), "/dashboard");
        assert_eq!(validate_redirect_or(Some("/admin"), "/custom"), "/custom");
    }

    #[test]
    fn test_plain_prefix_is_not_boundary_aware() {
        assert_eq!(
            validate_redirect(Some("/dashboardmalicious")),
            "/dashboardmalicious"
        );
    }

    #[test]
    fn test_traversal_like_paths_are_passed_through() {
        // No normalisation happens; the browser stays on the same origin either way.
        assert_eq!(
            validate_redirect(Some("/dashboard/../admin")),
            "/dashboard/../admin"
        );
    }

    #[test]
    fn test_check_reports_first_failing_rule() {
        let policy = RedirectPolicy::default();
        assert_eq!(policy.check(None), Err(RejectReason::Missing));
        assert_eq!(policy.check(Some("")), Err(RejectReason::Missing));
        assert_eq!(policy.check(Some("http://x")), Err(RejectReason::NotRootRelative));
        assert_eq!(policy.check(Some("//x")), Err(RejectReason::ProtocolRelative));
        // `//` is checked before the backslash rule
        assert_eq!(policy.check(Some("//x\\y")), Err(RejectReason::ProtocolRelative));
        assert_eq!(policy.check(Some("/x\\y")), Err(RejectReason::Backslash));
        assert_eq!(policy.check(Some("/admin")), Err(RejectReason::NotAllowlisted));
        assert_eq!(policy.check(Some("/links/a")), Ok("/links/a"));
    }

    #[test]
    fn test_injected_allowlist_replaces_builtin() {
        let policy = RedirectPolicy::new(["/reports", "/team"], "/home");
        assert_eq!(policy.validate(Some("/reports/q3")), "/reports/q3");
        assert_eq!(policy.validate(Some("/dashboard")), "/home");
        assert_eq!(policy.validate(None), "/home");
        assert!(policy.is_allowed("/team"));
        assert!(!policy.is_allowed("/settings"));
    }

    #[test]
    fn test_empty_allowlist_rejects_everything() {
        let policy = RedirectPolicy::new(Vec::<String>::new(), "/home");
        assert_eq!(policy.validate(Some("/dashboard")), "/home");
    }

    #[test]
    fn test_builder_defaults_and_overrides() {
        let policy = RedirectPolicy::builder().build();
        assert_eq!(policy.default_path(), DEFAULT_REDIRECT_PATH);
        assert_eq!(policy.allowed_prefixes().len(), BUILTIN_ALLOWED_PREFIXES.len());
        assert_eq!(policy.prefix_match(), PrefixMatch::Plain);

        let policy = RedirectPolicy::builder()
            .allow("/reports")
            .allow("/team")
            .default_path("/reports")
            .build();
        assert_eq!(policy.allowed_prefixes(), &["/reports".to_string(), "/team".to_string()]);
        assert_eq!(policy.validate(Some("/dashboard")), "/reports");
    }

    #[test]
    fn test_segment_mode_requires_boundary() {
        let policy = RedirectPolicy::builder()
            .prefix_match(PrefixMatch::Segment)
            .build();
        assert_eq!(policy.validate(Some("/dashboardmalicious")), "/dashboard");
        assert_eq!(policy.validate(Some("/dashboard")), "/dashboard");
        assert_eq!(policy.validate(Some("/settings/profile")), "/settings/profile");
        assert_eq!(policy.validate(Some("/bookings?page=2")), "/bookings?page=2");
        assert_eq!(policy.validate(Some("/links#share")), "/links#share");
        assert_eq!(policy.check(Some("/emailsx")), Err(RejectReason::NotAllowlisted));
    }

    #[test]
    fn test_segment_mode_with_trailing_slash_prefix() {
        let policy = RedirectPolicy::builder()
            .allow("/team/")
            .prefix_match(PrefixMatch::Segment)
            .build();
        assert!(policy.is_allowed("/team/alice"));
        assert!(!policy.is_allowed("/team"));
    }

    #[test]
    fn test_from_config() {
        let config = RedirectConfig {
            default_path: "/bookings".to_string(),
            prefix_match: PrefixMatch::Segment,
        };
        let policy = RedirectPolicy::from_config(&config);
        assert_eq!(policy.default_path(), "/bookings");
        assert_eq!(policy.validate(Some("/admin")), "/bookings");
        assert_eq!(policy.validate(Some("/dashboardx")), "/bookings");
        assert_eq!(policy.validate(Some("/event-types")), "/event-types");
    }

    #[test]
    fn test_reject_reason_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RejectReason::NotAllowlisted).unwrap(),
            "\"not_allowlisted\""
        );
        assert_eq!(
            serde_json::to_string(&RejectReason::ProtocolRelative).unwrap(),
            "\"protocol_relative\""
        );
    }
}
