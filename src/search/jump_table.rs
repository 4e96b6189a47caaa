//! KMP failure function (jump table) construction.

use smallvec::{SmallVec, smallvec};

use super::needle::NeedleView;
use crate::sequence::Indexed;

/// Per-position failure links for a needle view.
///
/// `links[i]` records the length of the longest proper prefix of the needle
/// that is also a suffix of the needle up to position `i`, with the
/// conventional sentinel `links[0] == -1` (so a mismatch at position 0
/// still shifts the alignment by one). Invariant: `links[i] < i`.
///
/// The table is a pure function of the needle view and comparer, built
/// once per search before any haystack scanning begins and immutable
/// thereafter. It is cheap to rebuild, so no cross-call caching exists.
pub(crate) struct JumpTable {
    links: SmallVec<[isize; 16]>,
}

impl JumpTable {
    /// Builds the failure function for a needle of length >= 2 in O(len).
    pub(crate) fn build<IX, E>(needle: &NeedleView<IX>, eq: &mut E) -> Self
    where
        IX: Indexed,
        E: FnMut(&IX::Item, &IX::Item) -> bool,
    {
        let len = needle.len();
        debug_assert!(len >= 2, "degenerate needles bypass the jump table");

        let mut links: SmallVec<[isize; 16]> = smallvec![0; len];
        links[0] = -1;
        links[1] = 0;

        let mut pos = 2;
        let mut candidate = 0usize;
        while pos < len {
            if eq(needle.get(pos - 1), needle.get(candidate)) {
                links[pos] = candidate as isize + 1;
                pos += 1;
                candidate += 1;
            } else if candidate > 0 {
                candidate = links[candidate] as usize;
            } else {
                links[pos] = 0;
                pos += 1;
            }
        }

        Self { links }
    }

    /// Alignment advance after a mismatch (or recorded match) at `position`.
    ///
    /// Always at least 1, so every scan makes progress.
    pub(crate) fn shift(&self, position: usize) -> usize {
        (position as isize - self.links[position]) as usize
    }

    /// Needle position to resume matching from after a mismatch at
    /// `position`: `links[position]` when positive, else 0.
    pub(crate) fn fallback(&self, position: usize) -> usize {
        self.links[position].max(0) as usize
    }
}
