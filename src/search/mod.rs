//! Generalized slice search - the core engine.
//!
//! [`find_slice`] locates a finite needle inside a possibly infinite, lazy,
//! possibly single-pass haystack, forward or backward, under a pluggable
//! equality comparer. Dispatch happens once at entry:
//!
//! 1. a degenerate needle of length 1 takes a plain linear scan (a
//!    one-element pattern cannot benefit from failure-function jumps);
//! 2. a needle exactly filling the haystack range takes a direct
//!    element-wise comparison - an exact-fit check, not a search;
//! 3. random-access haystacks take the in-place KMP scan;
//! 4. everything else takes the windowed single-pass KMP scan.
//!
//! Every search builds its needle view and jump table fresh and discards
//! them on return; nothing outlives a single call. "Not found" is a normal
//! `None` result, never an error. A panicking comparer unwinds through the
//! engine with the haystack cursor released by drop on the way out.

use std::ops::Range;

use crate::sequence::{Indexed, Sequence};

pub(crate) mod needle;

mod indexed;
mod jump_table;
mod windowed;

use jump_table::JumpTable;
use needle::NeedleView;

/// Range end meaning "to the end of the sequence".
///
/// Useful when the haystack's length is unknown, in particular for forward
/// searches over one-pass sources, where the windowed scan terminates on
/// source exhaustion instead of a bound. Indexed haystacks clamp it to
/// their actual length on entry.
pub const UNBOUNDED: usize = usize::MAX;

/// Scan orientation for a slice search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Report the first (smallest) matching offset.
    Forward,
    /// Report the last (largest) matching offset.
    Backward,
}

/// Finds the needle's `needle_range` window as a contiguous subsequence of
/// the haystack's `haystack_range` window.
///
/// Returns the smallest ([`Direction::Forward`]) or largest
/// ([`Direction::Backward`]) offset at which the needle occurs, or `None`.
/// A returned offset `k` always satisfies
/// `haystack_range.start <= k <= haystack_range.end - needle_len`.
///
/// An empty needle matches at the range boundary: the range start forward,
/// the range end backward (resolved to the source's length when the end is
/// [`UNBOUNDED`]).
///
/// Out-of-range bounds are clamped rather than rejected; `eq` is assumed to
/// be a pure equivalence relation and is threaded through every element
/// comparison, including jump-table construction.
///
/// # Examples
///
/// ```rust
/// use seqsearch::search::{Direction, UNBOUNDED, find_slice};
///
/// let haystack = [1, 2, 3, 4, 5, 1, 2, 3, 4, 5];
/// let offset = find_slice(
///     &haystack[..],
///     0..UNBOUNDED,
///     &[3, 4, 5][..],
///     0..3,
///     Direction::Backward,
///     |a, b| a == b,
/// );
/// assert_eq!(offset, Some(7));
/// ```
pub fn find_slice<H, N, E>(
    haystack: H,
    haystack_range: Range<usize>,
    needle: N,
    needle_range: Range<usize>,
    direction: Direction,
    mut eq: E,
) -> Option<usize>
where
    H: Sequence,
    N: Sequence<Item = H::Item>,
    E: FnMut(&H::Item, &H::Item) -> bool,
{
    let Range { start: m0, end: m1 } = haystack_range;
    debug_assert!(m0 <= m1, "inverted haystack range");

    let probed = haystack.try_into_indexed();
    let m1 = match &probed {
        Ok(view) => m1.min(view.len()),
        Err(_) => m1,
    };

    // Backward scans over an indexed haystack run the needle in reverse;
    // the single-pass path always runs it forward and keeps the last hit.
    let orientation = match (&probed, direction) {
        (Ok(_), Direction::Backward) => Direction::Backward,
        _ => Direction::Forward,
    };
    let view = NeedleView::new(needle, needle_range, orientation);
    let needle_len = view.len();

    if needle_len == 0 {
        return match direction {
            Direction::Forward => Some(m0),
            Direction::Backward => match probed {
                Ok(_) => Some(m1),
                // Counting stops at m1; the source may be unbounded.
                Err(one_pass) => Some(one_pass.into_cursor().take(m1).count()),
            },
        };
    }
    if m1.saturating_sub(m0) < needle_len {
        return None;
    }
    if needle_len == 1 {
        let element = view.get(0);
        return match probed {
            Ok(indexed) => single_indexed(&indexed, m0, m1, element, direction, &mut eq),
            Err(one_pass) => {
                single_cursor(one_pass.into_cursor(), m0, m1, element, direction, &mut eq)
            }
        };
    }
    if m1 != UNBOUNDED && m1 - m0 == needle_len {
        return match probed {
            Ok(indexed) => exact_fit_indexed(&indexed, m0, &view, &mut eq),
            Err(one_pass) => exact_fit_cursor(one_pass.into_cursor(), m0, &view, &mut eq),
        };
    }

    let table = JumpTable::build(&view, &mut eq);
    match probed {
        Ok(indexed) => indexed::scan(&indexed, m0, m1, &view, &table, direction, &mut eq),
        Err(one_pass) => windowed::scan(
            one_pass.into_cursor(),
            m0,
            m1,
            &view,
            &table,
            direction,
            &mut eq,
        ),
    }
}

/// Linear scan for a single-element needle over an indexed haystack.
fn single_indexed<H, E>(
    haystack: &H,
    m0: usize,
    m1: usize,
    element: &H::Item,
    direction: Direction,
    eq: &mut E,
) -> Option<usize>
where
    H: Indexed + ?Sized,
    E: FnMut(&H::Item, &H::Item) -> bool,
{
    match direction {
        Direction::Forward => (m0..m1).find(|&position| eq(haystack.get(position), element)),
        Direction::Backward => (m0..m1)
            .rev()
            .find(|&position| eq(haystack.get(position), element)),
    }
}

/// Linear scan for a single-element needle over a one-pass cursor.
///
/// Backward searches cannot walk the source in reverse, so the whole range
/// is enumerated and the last hit reported.
fn single_cursor<I, E>(
    mut source: I,
    m0: usize,
    m1: usize,
    element: &I::Item,
    direction: Direction,
    eq: &mut E,
) -> Option<usize>
where
    I: Iterator,
    E: FnMut(&I::Item, &I::Item) -> bool,
{
    if m0 > 0 && source.nth(m0 - 1).is_none() {
        return None;
    }
    let mut last = None;
    for (offset, item) in source.enumerate() {
        let position = m0 + offset;
        if position >= m1 {
            break;
        }
        if eq(&item, element) {
            if direction == Direction::Forward {
                return Some(position);
            }
            last = Some(position);
        }
    }
    last
}

/// Element-wise comparison when the needle exactly fills the range.
fn exact_fit_indexed<H, IX, E>(
    haystack: &H,
    m0: usize,
    needle: &NeedleView<IX>,
    eq: &mut E,
) -> Option<usize>
where
    H: Indexed + ?Sized,
    IX: Indexed<Item = H::Item>,
    E: FnMut(&H::Item, &H::Item) -> bool,
{
    (0..needle.len())
        .all(|i| eq(haystack.get(m0 + i), needle.fwd(i)))
        .then_some(m0)
}

fn exact_fit_cursor<I, IX, E>(
    mut source: I,
    m0: usize,
    needle: &NeedleView<IX>,
    eq: &mut E,
) -> Option<usize>
where
    I: Iterator<Item = IX::Item>,
    IX: Indexed,
    E: FnMut(&IX::Item, &IX::Item) -> bool,
{
    if m0 > 0 && source.nth(m0 - 1).is_none() {
        return None;
    }
    for i in 0..needle.len() {
        let item = source.next()?;
        if !eq(&item, needle.fwd(i)) {
            return None;
        }
    }
    Some(m0)
}
