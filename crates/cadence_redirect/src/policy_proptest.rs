#[cfg(test)]
mod tests {
    use crate::policy::{RedirectPolicy, BUILTIN_ALLOWED_PREFIXES};
    use cadence_config::PrefixMatch;
    use proptest::prelude::*;

    // Strings biased towards the interesting shapes: slashes, backslashes,
    // schemes and allowlisted roots.
    fn candidate_strategy() -> impl Strategy<Value = String> {
        let prefix = prop_oneof![
            Just(String::new()),
            Just("/".to_string()),
            Just("//".to_string()),
            Just("\\".to_string()),
            Just("http://".to_string()),
            proptest::sample::select(BUILTIN_ALLOWED_PREFIXES.to_vec()).prop_map(String::from),
        ];
        (prefix, "[a-z/\\\\:@.?#%-]{0,24}").prop_map(|(p, rest)| format!("{}{}", p, rest))
    }

    fn policies() -> Vec<RedirectPolicy> {
        vec![
            RedirectPolicy::default(),
            RedirectPolicy::builder()
                .prefix_match(PrefixMatch::Segment)
                .build(),
        ]
    }

    proptest! {
        #[test]
        fn test_total_over_arbitrary_input(input in ".*") {
            for policy in policies() {
                let _ = policy.validate(Some(input.as_str()));
            }
        }

        #[test]
        fn test_result_is_candidate_or_default(input in candidate_strategy()) {
            for policy in policies() {
                let result = policy.validate(Some(input.as_str()));
                prop_assert!(result == input || result == policy.default_path());
            }
        }

        #[test]
        fn test_result_is_always_root_relative(input in candidate_strategy()) {
            for policy in policies() {
                let result = policy.validate(Some(input.as_str()));
                prop_assert!(result.starts_with('/'));
                prop_assert!(!result.starts_with("//"));
                prop_assert!(!result.contains('\\'));
            }
        }

        #[test]
        fn test_idempotent(input in candidate_strategy()) {
            for policy in policies() {
                let once = policy.validate(Some(input.as_str())).to_string();
                let twice = policy.validate(Some(once.as_str()));
                prop_assert_eq!(twice, once.as_str());
            }
        }

        #[test]
        fn test_segment_mode_is_stricter(input in candidate_strategy()) {
            let plain = RedirectPolicy::default();
            let segment = RedirectPolicy::builder()
                .prefix_match(PrefixMatch::Segment)
                .build();
            if segment.is_allowed(&input) {
                prop_assert!(plain.is_allowed(&input));
            }
        }

        #[test]
        fn test_allowlisted_suffixes_pass(
            prefix in proptest::sample::select(BUILTIN_ALLOWED_PREFIXES.to_vec()),
            rest in "(/[a-z0-9-]{1,8}){0,3}",
        ) {
            let candidate = format!("{}{}", prefix, rest);
            for policy in policies() {
                prop_assert_eq!(policy.validate(Some(candidate.as_str())), candidate.as_str());
            }
        }
    }
}
