//! Property-based tests for entry construction.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{build, container_path, normalize_remote_url, BuildOptions};
    use crate::inspector::MemoryInspector;
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    // ============================================================================
    // container_path property tests
    // ============================================================================

    proptest! {
        /// Property: every rewritten path starts with the mount point
        #[test]
        fn container_path_starts_with_mount(
            segments in prop::collection::vec("[a-zA-Z0-9_-]{1,12}", 0..6),
            mount in "/[a-z]{1,8}",
        ) {
            let root = Path::new("/srv/root");
            let location = segments.iter().fold(root.to_path_buf(), |p, s| p.join(s));

            let path = container_path(root, &location, &mount).unwrap();
            prop_assert!(path.starts_with(&mount), "{} does not start with {}", path, mount);
        }

        /// Property: the relative part survives the rewrite unchanged
        #[test]
        fn container_path_keeps_relative_segments(
            segments in prop::collection::vec("[a-zA-Z0-9_.-]{1,12}", 1..6),
        ) {
            prop_assume!(segments.iter().all(|s| s != "." && s != ".."));
            let root = Path::new("/srv/root");
            let location = segments.iter().fold(root.to_path_buf(), |p, s| p.join(s));

            let path = container_path(root, &location, "/data").unwrap();
            prop_assert_eq!(path, format!("/data/{}", segments.join("/")));
        }

        /// Property: a trailing separator on the root changes nothing
        #[test]
        fn container_path_ignores_trailing_separator(
            segments in prop::collection::vec("[a-z0-9]{1,8}", 1..4),
        ) {
            let location = segments
                .iter()
                .fold(PathBuf::from("/srv/root"), |p, s| p.join(s));

            prop_assert_eq!(
                container_path(Path::new("/srv/root"), &location, "/data"),
                container_path(Path::new("/srv/root/"), &location, "/data")
            );
        }
    }

    // ============================================================================
    // normalize_remote_url property tests
    // ============================================================================

    proptest! {
        /// Property: normalized URLs carry no surrounding whitespace
        #[test]
        fn normalize_remote_url_is_trimmed(raw in "[ \t]*[a-z:/@.]{0,30}[ \t\n]*") {
            if let Some(url) = normalize_remote_url(&raw) {
                prop_assert_eq!(url.trim(), url.as_str());
                prop_assert!(!url.is_empty());
            }
        }

        /// Property: only a single `.git` suffix is ever removed
        #[test]
        fn normalize_remote_url_removes_at_most_git_suffix(base in "[a-z]{1,10}(/[a-z]{1,10}){0,3}") {
            let with_suffix = format!("https://host/{}.git\n", base);
            let without_suffix = format!("https://host/{}", base);

            prop_assert_eq!(normalize_remote_url(&with_suffix), Some(without_suffix.clone()));
            prop_assert_eq!(normalize_remote_url(&without_suffix), Some(without_suffix));
        }
    }

    // ============================================================================
    // build property tests
    // ============================================================================

    proptest! {
        /// Property: entries never outnumber locations, every entry indexes HEAD only
        #[test]
        fn build_entries_bounded_by_locations(
            repos in prop::collection::btree_map("[a-z]{1,8}", any::<bool>(), 0..10),
        ) {
            let root = Path::new("/srv");
            let mut inspector = MemoryInspector::new();
            let mut locations = Vec::new();
            for (name, has_remote) in &repos {
                let location = root.join(name);
                inspector = if *has_remote {
                    inspector.with_remote(location.clone(), format!("https://h/{}.git", name))
                } else {
                    inspector.with_bare(location.clone())
                };
                locations.push(location);
            }

            let outcome = build(root, &locations, &inspector, &BuildOptions::default());

            let with_remote = repos.values().filter(|v| **v).count();
            prop_assert_eq!(outcome.config.repositories.len(), with_remote);
            prop_assert_eq!(outcome.skipped.len(), repos.len() - with_remote);
            for entry in &outcome.config.repositories {
                prop_assert!(entry.path.starts_with("/data/"));
                prop_assert_eq!(&entry.revisions, &vec!["HEAD".to_string()]);
                prop_assert_eq!(&entry.metadata["github"], &format!("https://h/{}", entry.name));
            }
        }
    }
}
