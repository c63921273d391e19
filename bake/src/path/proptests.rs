//! Property-based tests for path handling.
//!
//! The normalize and collapse modules carry small inline property tests.
//! This suite runs many more cases over combination, relative resolution,
//! and collections.

use super::collapse::collapse;
use super::normalize::normalize;
use super::{DirectoryPath, FilePath, FilePathCollection, PathComparer};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_directory_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| format!("/{}", parts.join("/")))
}

/// Absolute directories that all sit under `/work`, so any two share their
/// first segment.
fn work_directory_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..5).prop_map(|parts| {
        if parts.is_empty() {
            "/work".to_string()
        } else {
            format!("/work/{}", parts.join("/"))
        }
    })
}

fn relative_directory_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..5).prop_map(|parts| parts.join("/"))
}

fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            segment_strategy(),
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
        ],
        1..8,
    )
    .prop_map(|parts| format!("/{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(raw in messy_path_strategy()) {
        let once = normalize(&raw).unwrap();
        let twice = normalize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Collapsed rooted paths keep their root and contain no dot segments.
    #[test]
    fn collapsed_paths_have_no_dot_segments(raw in messy_path_strategy()) {
        let path = DirectoryPath::new(&raw).unwrap();
        let collapsed = collapse(&path);
        prop_assert!(collapsed.starts_with('/'));
        prop_assert!(!collapsed.split('/').any(|s| s == "." || s == ".."));
    }

    // Combining never loses either side.
    #[test]
    fn combine_concatenates(
        base in absolute_directory_strategy(),
        child in relative_directory_strategy(),
    ) {
        let combined = DirectoryPath::new(&base)
            .unwrap()
            .combine(&DirectoryPath::new(&child).unwrap())
            .unwrap();
        prop_assert_eq!(combined.full_path(), format!("{base}/{child}"));
    }

    // Combining with an absolute path always fails.
    #[test]
    fn combine_rejects_absolute(
        base in relative_directory_strategy(),
        other in absolute_directory_strategy(),
    ) {
        let result = DirectoryPath::new(&base)
            .unwrap()
            .combine(&DirectoryPath::new(&other).unwrap());
        prop_assert!(result.unwrap_err().is_invalid_operation());
    }

    // from.combine(relative(from, to)).collapse() == to
    #[test]
    fn relative_path_round_trips(
        from in work_directory_strategy(),
        to in work_directory_strategy(),
    ) {
        let from = DirectoryPath::new(&from).unwrap();
        let to = DirectoryPath::new(&to).unwrap();
        let relative = from.relative_path_to_directory(&to).unwrap();
        let resolved = if relative.full_path() == "." {
            from.clone()
        } else {
            from.combine(&relative).unwrap().collapse()
        };
        prop_assert_eq!(resolved.full_path(), to.full_path());
    }

    // Every relative path resolved between absolute paths is itself relative.
    #[test]
    fn relative_path_is_relative(
        from in work_directory_strategy(),
        to in work_directory_strategy(),
    ) {
        let from = DirectoryPath::new(&from).unwrap();
        let to = DirectoryPath::new(&to).unwrap();
        prop_assert!(from.relative_path_to_directory(&to).unwrap().is_relative());
    }

    // Directories under different top-level segments have no relative path.
    #[test]
    fn relative_path_requires_shared_first_segment(
        left in segment_strategy(),
        right in segment_strategy(),
        tail in relative_directory_strategy(),
    ) {
        prop_assume!(left != right);
        let from = DirectoryPath::new(&format!("/{left}/{tail}")).unwrap();
        let to = DirectoryPath::new(&format!("/{right}/{tail}")).unwrap();
        prop_assert!(from.relative_path_to_directory(&to).unwrap_err().is_invalid_operation());
    }

    // A collection never holds two paths its comparer considers equal.
    #[test]
    fn collection_holds_no_duplicates(
        raws in prop::collection::vec("/[a-cA-C]{1,2}", 0..30),
        case_sensitive in any::<bool>(),
    ) {
        let comparer = PathComparer::new(case_sensitive);
        let set = FilePathCollection::from_paths(
            raws.iter().map(|raw| FilePath::new(raw).unwrap()),
            comparer,
        );
        let items: Vec<_> = set.iter().collect();
        for (i, x) in items.iter().enumerate() {
            for y in &items[i + 1..] {
                prop_assert!(!comparer.equals(Some(*x), Some(*y)));
            }
        }
        for raw in &raws {
            prop_assert!(set.contains(&FilePath::new(raw).unwrap()));
        }
    }

    // union is a superset of both sides, difference is disjoint from the right side.
    #[test]
    fn union_and_difference_laws(
        left in prop::collection::vec("/[a-e]", 0..10),
        right in prop::collection::vec("/[a-e]", 0..10),
    ) {
        let comparer = PathComparer::new(true);
        let make = |raws: &[String]| {
            FilePathCollection::from_paths(raws.iter().map(|r| FilePath::new(r).unwrap()), comparer)
        };
        let (left, right) = (make(&left), make(&right));

        let union = left.union(&right);
        prop_assert!(left.iter().chain(right.iter()).all(|p| union.contains(p)));

        let difference = left.difference(&right);
        prop_assert!(difference.iter().all(|p| !right.contains(p)));
        prop_assert!(difference.iter().all(|p| left.contains(p)));
    }
}
