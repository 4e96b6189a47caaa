//! Orientation-adapted needle views.
//!
//! A needle participates in a search as a logical `[n0, n1)` window over an
//! underlying sequence, scanned either left-to-right (forward) or
//! right-to-left (backward). Four strategies realize that contract, chosen
//! by capability and orientation so that copying only happens when the
//! underlying needle cannot be indexed:
//!
//! 1. [`NeedleView::Whole`] - the needle is already a random-access view
//!    over its whole extent and the scan is forward; zero copy.
//! 2. [`NeedleView::Offset`] - a fixed `[n0, n1)` window into a
//!    random-access source, forward-indexed; zero copy.
//! 3. [`NeedleView::Reversed`] - the same window indexed in reverse for
//!    backward scans; zero copy, no materialized reversal.
//! 4. [`NeedleView::Buffered`] - one materializing pass for sources
//!    without random access; O(needle length) space, built once per search.
//!
//! Whichever variant is chosen, `get(0..len)` yields the elements in match
//! order for the requested orientation.

use std::ops::Range;

use smallvec::SmallVec;

use super::Direction;
use crate::sequence::{Indexed, Sequence};

/// How many needle elements the materialized buffer holds inline before
/// spilling to the heap.
const INLINE_NEEDLE: usize = 8;

/// An indexable view of a needle, adapted to the scan orientation.
pub(crate) enum NeedleView<IX: Indexed> {
    /// Forward view over the whole extent of an indexed needle.
    Whole(IX),
    /// Forward view over a `[start, start + len)` window of an indexed needle.
    Offset {
        /// Underlying indexed needle.
        seq: IX,
        /// First element of the window.
        start: usize,
        /// Window length.
        len: usize,
    },
    /// Backward view over a window ending just before `end`.
    Reversed {
        /// Underlying indexed needle.
        seq: IX,
        /// One past the last element of the window.
        end: usize,
        /// Window length.
        len: usize,
    },
    /// Materialized copy, already laid out in match order.
    Buffered {
        /// Elements in match order.
        buf: SmallVec<[IX::Item; INLINE_NEEDLE]>,
        /// Whether match order is the reverse of source order.
        reversed: bool,
    },
}

impl<IX: Indexed> NeedleView<IX> {
    /// Builds the cheapest view honoring `range` and `orientation`.
    ///
    /// The range end may be [`crate::search::UNBOUNDED`]; it is clamped to
    /// the needle's length for indexed needles and resolved by exhausting
    /// the cursor for one-pass needles.
    pub(crate) fn new<N>(needle: N, range: Range<usize>, orientation: Direction) -> Self
    where
        N: Sequence<Item = IX::Item, IndexedView = IX>,
    {
        let Range { start: n0, end: n1 } = range;
        match needle.try_into_indexed() {
            Ok(seq) => {
                let n1 = n1.min(seq.len());
                let n0 = n0.min(n1);
                match orientation {
                    Direction::Forward if n0 == 0 && n1 == seq.len() => Self::Whole(seq),
                    Direction::Forward => Self::Offset {
                        seq,
                        start: n0,
                        len: n1 - n0,
                    },
                    Direction::Backward => Self::Reversed {
                        seq,
                        end: n1,
                        len: n1 - n0,
                    },
                }
            }
            Err(one_pass) => {
                let mut cursor = one_pass.into_cursor();
                if n0 > 0 {
                    let _ = cursor.nth(n0 - 1);
                }
                let mut buf: SmallVec<[IX::Item; INLINE_NEEDLE]> =
                    cursor.take(n1.saturating_sub(n0)).collect();
                let reversed = orientation == Direction::Backward;
                if reversed {
                    buf.reverse();
                }
                Self::Buffered { buf, reversed }
            }
        }
    }

    /// Number of elements in the view.
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Whole(seq) => seq.len(),
            Self::Offset { len, .. } | Self::Reversed { len, .. } => *len,
            Self::Buffered { buf, .. } => buf.len(),
        }
    }

    /// Element at `index` in match order for the view's orientation.
    pub(crate) fn get(&self, index: usize) -> &IX::Item {
        match self {
            Self::Whole(seq) => seq.get(index),
            Self::Offset { seq, start, .. } => seq.get(start + index),
            Self::Reversed { seq, end, .. } => seq.get(end - 1 - index),
            Self::Buffered { buf, .. } => &buf[index],
        }
    }

    /// Element at `index` in left-to-right source order, regardless of the
    /// view's orientation. Used by the exact-fit comparison, which always
    /// walks the haystack range left to right.
    pub(crate) fn fwd(&self, index: usize) -> &IX::Item {
        match self {
            Self::Reversed { len, .. } => self.get(len - 1 - index),
            Self::Buffered { buf, reversed } if *reversed => &buf[buf.len() - 1 - index],
            _ => self.get(index),
        }
    }
}

/// Forward-built views double as indexed needles themselves, so a wrapper
/// that had to materialize a one-pass needle to learn its length can hand
/// the view straight back to the engine without a second copy.
impl<IX: Indexed> Indexed for NeedleView<IX> {
    type Item = IX::Item;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> &Self::Item {
        Self::get(self, index)
    }
}

impl<'a, IX: Indexed> Sequence for &'a NeedleView<IX>
where
    IX::Item: Clone,
{
    type Item = IX::Item;
    type Cursor = NeedleCursor<'a, IX>;
    type IndexedView = &'a NeedleView<IX>;

    fn into_cursor(self) -> Self::Cursor {
        NeedleCursor {
            view: self,
            front: 0,
        }
    }

    fn try_into_indexed(self) -> Result<Self::IndexedView, Self> {
        Ok(self)
    }
}

/// One-pass cursor over a needle view, in the view's match order.
pub(crate) struct NeedleCursor<'a, IX: Indexed> {
    view: &'a NeedleView<IX>,
    front: usize,
}

impl<IX: Indexed> Iterator for NeedleCursor<'_, IX>
where
    IX::Item: Clone,
{
    type Item = IX::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.view.len() {
            let item = self.view.get(self.front).clone();
            self.front += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len() - self.front;
        (remaining, Some(remaining))
    }
}
