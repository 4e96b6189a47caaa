//! Convenience wrappers over the slice-search engine.

use std::collections::VecDeque;

use crate::search::{Direction, UNBOUNDED, find_slice, needle::NeedleView};
use crate::sequence::{Indexed, Sequence};

/// Slice-level search operators on any [`Sequence`].
///
/// These wrappers resolve default bounds (`from = 0`, `end` = the end of
/// the haystack) and the default comparer (`PartialEq`) before delegating
/// to [`find_slice`]; the `*_by` variants thread an explicit comparer
/// instead. Out-of-range bounds are clamped, never rejected.
///
/// All methods consume `self`; for `Copy` sequences such as `&[T]` this is
/// free, while a one-pass sequence is spent by the call.
///
/// # Examples
///
/// ```rust
/// use seqsearch::prelude::*;
///
/// let haystack = [1, 2, 3, 4, 5, 1, 2, 3, 4, 5];
/// assert_eq!(haystack.as_slice().index_of_slice(&[3, 4, 5][..]), Some(2));
/// assert_eq!(haystack.as_slice().last_index_of_slice(&[3, 4, 5][..]), Some(7));
/// assert!(haystack.as_slice().contains_slice(&[5, 1][..]));
/// assert!(haystack.as_slice().starts_with_seq(&[1, 2][..]));
/// assert!(haystack.as_slice().ends_with_seq(&[4, 5][..]));
/// ```
pub trait SliceSearch: Sequence {
    /// First offset at which `needle` occurs as a contiguous subsequence.
    fn index_of_slice<N>(self, needle: N) -> Option<usize>
    where
        N: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.index_of_slice_by(needle, 0, |a, b| a == b)
    }

    /// First offset `>= from` at which `needle` occurs.
    fn index_of_slice_from<N>(self, needle: N, from: usize) -> Option<usize>
    where
        N: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.index_of_slice_by(needle, from, |a, b| a == b)
    }

    /// First offset `>= from` at which `needle` occurs under `eq`.
    fn index_of_slice_by<N, E>(self, needle: N, from: usize, eq: E) -> Option<usize>
    where
        N: Sequence<Item = Self::Item>,
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        find_slice(
            self,
            from..UNBOUNDED,
            needle,
            0..UNBOUNDED,
            Direction::Forward,
            eq,
        )
    }

    /// Last offset at which `needle` occurs as a contiguous subsequence.
    fn last_index_of_slice<N>(self, needle: N) -> Option<usize>
    where
        N: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        find_slice(
            self,
            0..UNBOUNDED,
            needle,
            0..UNBOUNDED,
            Direction::Backward,
            |a, b| a == b,
        )
    }

    /// Last offset `<= end` at which `needle` occurs.
    fn last_index_of_slice_end<N>(self, needle: N, end: usize) -> Option<usize>
    where
        N: Sequence<Item = Self::Item>,
        Self::Item: PartialEq + Clone,
    {
        self.last_index_of_slice_end_by(needle, end, |a, b| a == b)
    }

    /// Last offset `<= end` at which `needle` occurs under `eq`.
    ///
    /// The engine bounds a backward search by the position one past the
    /// last element a match may touch, so `end` (the last allowed starting
    /// offset) is resolved to `end + needle_len` here - which requires the
    /// needle's length up front. A one-pass needle is materialized once for
    /// that and handed to the engine as an indexed view, not re-enumerated.
    fn last_index_of_slice_end_by<N, E>(self, needle: N, end: usize, eq: E) -> Option<usize>
    where
        N: Sequence<Item = Self::Item>,
        Self::Item: Clone,
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let view = NeedleView::new(needle, 0..UNBOUNDED, Direction::Forward);
        let needle_len = view.len();
        let m1 = end.saturating_add(needle_len);
        find_slice(self, 0..m1, &view, 0..needle_len, Direction::Backward, eq)
    }

    /// Tests whether this sequence contains `needle` as a slice.
    fn contains_slice<N>(self, needle: N) -> bool
    where
        N: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.index_of_slice(needle).is_some()
    }

    /// Tests whether this sequence contains `needle` as a slice under `eq`.
    fn contains_slice_by<N, E>(self, needle: N, eq: E) -> bool
    where
        N: Sequence<Item = Self::Item>,
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.index_of_slice_by(needle, 0, eq).is_some()
    }

    /// Tests whether this sequence starts with `needle`.
    fn starts_with_seq<N>(self, needle: N) -> bool
    where
        N: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.starts_with_seq_by(needle, |a, b| a == b)
    }

    /// Tests whether this sequence starts with `needle` under `eq`.
    ///
    /// A streaming lockstep comparison; no engine call, and no more
    /// elements are pulled than the needle's length.
    fn starts_with_seq_by<N, E>(self, needle: N, mut eq: E) -> bool
    where
        N: Sequence<Item = Self::Item>,
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut source = self.into_cursor();
        let mut that = needle.into_cursor();
        loop {
            let Some(wanted) = that.next() else {
                return true;
            };
            let Some(item) = source.next() else {
                return false;
            };
            if !eq(&item, &wanted) {
                return false;
            }
        }
    }

    /// Tests whether this sequence ends with `needle`.
    fn ends_with_seq<N>(self, needle: N) -> bool
    where
        N: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.ends_with_seq_by(needle, |a, b| a == b)
    }

    /// Tests whether this sequence ends with `needle` under `eq`.
    ///
    /// Indexed haystacks compare their tail directly; a one-pass haystack
    /// keeps a ring of the last `needle_len` elements and compares once the
    /// source is exhausted.
    fn ends_with_seq_by<N, E>(self, needle: N, mut eq: E) -> bool
    where
        N: Sequence<Item = Self::Item>,
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let view = NeedleView::new(needle, 0..UNBOUNDED, Direction::Forward);
        let needle_len = view.len();
        if needle_len == 0 {
            return true;
        }
        match self.try_into_indexed() {
            Ok(indexed) => {
                let len = indexed.len();
                needle_len <= len
                    && (0..needle_len).all(|i| eq(indexed.get(len - needle_len + i), view.get(i)))
            }
            Err(one_pass) => {
                let mut tail: VecDeque<Self::Item> = VecDeque::with_capacity(needle_len);
                for item in one_pass.into_cursor() {
                    if tail.len() == needle_len {
                        tail.pop_front();
                    }
                    tail.push_back(item);
                }
                tail.len() == needle_len
                    && tail.iter().enumerate().all(|(i, item)| eq(item, view.get(i)))
            }
        }
    }
}

impl<S: Sequence> SliceSearch for S {}
