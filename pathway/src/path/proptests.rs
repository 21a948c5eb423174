//! Property-based tests for path handling.
//!
//! Covers the resolution laws (idempotence, incremental resolution,
//! absolute override) and laws for join, relative and the name extractors.

use super::algebra::{basename, extension, join, normal, resolve, split};
use super::relative::relative;
use super::types::ParsedPath;
use proptest::prelude::*;

// Strategy for generating a single segment, including navigation tokens
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,12}",
        1 => "[a-z]{1,6}\\.[a-z]{1,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 0..8)).prop_map(
        |(rooted, parts)| {
            let body = parts.join("/");
            if rooted {
                format!("/{body}")
            } else {
                body
            }
        },
    )
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,12}", 0..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normal(normal(p)) == normal(p)
    #[test]
    fn normal_idempotent(path in path_strategy()) {
        let once = normal(&path);
        prop_assert_eq!(normal(&once), once);
    }

    // Resolution is incremental: resolve(a, b) == resolve(resolve(a), b)
    #[test]
    fn resolve_incremental(a in path_strategy(), b in path_strategy(), c in path_strategy()) {
        let direct = resolve([a.as_str(), b.as_str(), c.as_str()]);
        let ab = resolve([a.as_str(), b.as_str()]);
        prop_assert_eq!(&direct, &resolve([ab.as_str(), c.as_str()]));
        let a_only = resolve([a.as_str()]);
        prop_assert_eq!(&direct, &resolve([a_only.as_str(), b.as_str(), c.as_str()]));
    }

    // An absolute fragment discards everything before it
    #[test]
    fn resolve_absolute_override(a in path_strategy(), b in absolute_path_strategy()) {
        prop_assert_eq!(resolve([a.as_str(), b.as_str()]), resolve([b.as_str()]));
    }

    // Normalized paths never contain "." or empty segments
    #[test]
    fn normal_has_no_dot_or_empty_segments(path in path_strategy()) {
        let parsed = ParsedPath::parse(&path);
        for segment in parsed.segments() {
            prop_assert!(!segment.is_empty());
            prop_assert_ne!(segment.as_str(), ".");
        }
    }

    // Rooted paths never keep ".." and stay rooted
    #[test]
    fn rooted_paths_clamp_parent_refs(path in absolute_path_strategy(), ups in 0..10usize) {
        let parents = vec![".."; ups].join("/");
        let resolved = resolve([path.as_str(), parents.as_str()]);
        prop_assert!(resolved.starts_with('/'));
        prop_assert!(!split(&resolved).contains(&".."));
    }

    // Joining a single path is normalizing it
    #[test]
    fn join_single_is_normal(path in path_strategy()) {
        prop_assert_eq!(join([path.as_str()]), normal(&path));
    }

    // Walking the relative route from a to b lands on b
    #[test]
    fn relative_round_trip(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let route = relative(&a, &b);
        prop_assert_eq!(resolve([a.as_str(), route.as_str()]), normal(&b));
    }

    // A trailing separator survives normalization and disappears under the
    // next fragment
    #[test]
    fn trailing_separator_kept_until_next_fragment(
        path in absolute_path_strategy(),
        name in "[a-z0-9_-]{1,12}",
    ) {
        let dir = format!("{path}/");
        prop_assert!(normal(&dir).ends_with('/'));
        prop_assert_eq!(resolve([dir.as_str(), name.as_str()]), join([path.as_str(), name.as_str()]));
    }

    // An extension is always a suffix of the basename
    #[test]
    fn extension_is_suffix_of_basename(path in path_strategy()) {
        let ext = extension(&path);
        prop_assert!(basename(&path, None).ends_with(ext));
        prop_assert!(ext.is_empty() || ext.starts_with('.'));
    }
}
