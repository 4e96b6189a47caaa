//! Property tests for the slice-search engine: agreement with a naive
//! reference, agreement between the two scan paths, and the forward /
//! backward mirror relation.

mod common;

use common::{naive_index_of_slice, naive_last_index_of_slice};
use proptest::prelude::*;
use seqsearch::search::{Direction, UNBOUNDED, find_slice};
use seqsearch::sequence::OnePass;

fn eq_u8(a: &u8, b: &u8) -> bool {
    a == b
}

/// Small alphabet so needles actually occur (and overlap) in haystacks.
fn element() -> impl Strategy<Value = u8> {
    0u8..4
}

fn haystack() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(element(), 0..60)
}

fn needle() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(element(), 0..8)
}

proptest! {
    /// Forward search returns the smallest valid offset.
    #[test]
    fn prop_forward_matches_naive(haystack in haystack(), needle in needle()) {
        let expected = naive_index_of_slice(&haystack, &needle, 0);
        let actual = find_slice(
            &haystack[..], 0..UNBOUNDED, &needle[..], 0..needle.len(), Direction::Forward, eq_u8,
        );
        prop_assert_eq!(actual, expected);
    }

    /// Backward search returns the largest valid offset.
    #[test]
    fn prop_backward_matches_naive(haystack in haystack(), needle in needle()) {
        let expected = naive_last_index_of_slice(&haystack, &needle);
        let actual = find_slice(
            &haystack[..], 0..UNBOUNDED, &needle[..], 0..needle.len(), Direction::Backward, eq_u8,
        );
        prop_assert_eq!(actual, expected);
    }

    /// The forward `from` bound only excludes earlier occurrences.
    #[test]
    fn prop_from_bound_matches_naive(haystack in haystack(), needle in needle(), from in 0usize..70) {
        let expected = naive_index_of_slice(&haystack, &needle, from);
        let actual = find_slice(
            &haystack[..], from..UNBOUNDED, &needle[..], 0..needle.len(), Direction::Forward, eq_u8,
        );
        prop_assert_eq!(actual, expected);
    }

    /// The random-access and single-pass code paths agree, both directions.
    #[test]
    fn prop_code_paths_agree(haystack in haystack(), needle in needle()) {
        for direction in [Direction::Forward, Direction::Backward] {
            let indexed = find_slice(
                &haystack[..], 0..UNBOUNDED, &needle[..], 0..needle.len(), direction, eq_u8,
            );
            let one_pass = find_slice(
                OnePass::new(haystack.iter().copied()),
                0..UNBOUNDED,
                &needle[..],
                0..needle.len(),
                direction,
                eq_u8,
            );
            prop_assert_eq!(indexed, one_pass);
        }
    }

    /// A needle cut from the haystack is always found, at or before its cut
    /// point going forward and at or after it going backward.
    #[test]
    fn prop_planted_needle_is_found(haystack in haystack(), start in 0usize..60, len in 1usize..8) {
        prop_assume!(start < haystack.len());
        let end = (start + len).min(haystack.len());
        let planted = haystack[start..end].to_vec();

        let forward = find_slice(
            &haystack[..], 0..UNBOUNDED, &planted[..], 0..planted.len(), Direction::Forward, eq_u8,
        );
        prop_assert!(forward.is_some_and(|k| k <= start));

        let backward = find_slice(
            &haystack[..], 0..UNBOUNDED, &planted[..], 0..planted.len(), Direction::Backward, eq_u8,
        );
        prop_assert!(backward.is_some_and(|k| k >= start));
    }

    /// Forward search on the haystack mirrors backward search on the
    /// reversed haystack with the reversed needle.
    #[test]
    fn prop_mirror_round_trip(haystack in haystack(), needle in needle()) {
        prop_assume!(!needle.is_empty());
        let reversed_haystack: Vec<u8> = haystack.iter().rev().copied().collect();
        let reversed_needle: Vec<u8> = needle.iter().rev().copied().collect();

        let forward = find_slice(
            &haystack[..], 0..UNBOUNDED, &needle[..], 0..needle.len(), Direction::Forward, eq_u8,
        );
        let mirrored = find_slice(
            &reversed_haystack[..],
            0..UNBOUNDED,
            &reversed_needle[..],
            0..reversed_needle.len(),
            Direction::Backward,
            eq_u8,
        )
        .map(|k| haystack.len() - needle.len() - k);
        prop_assert_eq!(forward, mirrored);
    }

    /// Running the same search twice on a resettable haystack yields
    /// identical results.
    #[test]
    fn prop_idempotent(haystack in haystack(), needle in needle()) {
        let first = find_slice(
            &haystack[..], 0..UNBOUNDED, &needle[..], 0..needle.len(), Direction::Forward, eq_u8,
        );
        let second = find_slice(
            &haystack[..], 0..UNBOUNDED, &needle[..], 0..needle.len(), Direction::Forward, eq_u8,
        );
        prop_assert_eq!(first, second);
    }
}
