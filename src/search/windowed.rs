//! Windowed KMP scan over single-pass haystacks.
//!
//! The haystack here is a cursor that can be advanced exactly once, so the
//! scan caches the most recently pulled elements in a circular window of
//! exactly needle-length slots. Elements are pulled strictly in increasing
//! order and never re-requested; at any point the window holds exactly the
//! elements the in-flight comparison can touch.
//!
//! Backward searches cannot reverse the source, so this path runs the
//! needle forward and refuses to stop at the first hit: every full match
//! overwrites the running answer (resuming from the jump-table fallback
//! state rather than restarting from scratch), and the last hit is reported
//! once the range or the source is exhausted. That full forward pass is the
//! deliberate price of backward search over a one-pass source.

use super::Direction;
use super::jump_table::JumpTable;
use super::needle::NeedleView;
use crate::sequence::Indexed;

/// Circular cache of the last `len` pulled haystack elements, indexed by
/// absolute range-relative position modulo `len`.
struct Window<T> {
    slots: Box<[Option<T>]>,
    /// High-water mark: number of elements pulled so far.
    high: usize,
}

impl<T> Window<T> {
    fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| None).collect(),
            high: 0,
        }
    }

    /// Returns the element at `position`, pulling from `source` as needed.
    ///
    /// `None` means the source ran out before reaching `position`. Callers
    /// only ever ask for positions within the current alignment window, so
    /// a slot is never read after being overwritten.
    fn fetch<I>(&mut self, position: usize, source: &mut I) -> Option<&T>
    where
        I: Iterator<Item = T>,
    {
        while self.high <= position {
            let item = source.next()?;
            self.slots[self.high % self.slots.len()] = Some(item);
            self.high += 1;
        }
        self.slots[position % self.slots.len()].as_ref()
    }
}

/// Scans a one-pass cursor for the needle view.
///
/// The cursor must still be positioned at the start of the underlying
/// sequence; this function advances past the first `m0` elements itself.
/// The needle view is always forward-oriented on this path; `direction`
/// only selects between first-match (forward) and last-match (backward)
/// reporting.
pub(crate) fn scan<I, IX, E>(
    mut source: I,
    m0: usize,
    m1: usize,
    needle: &NeedleView<IX>,
    table: &JumpTable,
    direction: Direction,
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

    let len = needle.len();
    // Last alignment at which a full match still fits inside [m0, m1).
    let last_alignment = m1 - m0 - len;
    let mut window = Window::new(len);

    let mut i = 0;
    let mut m = 0;
    let mut answer = None;
    while m <= last_alignment {
        let Some(element) = window.fetch(i + m, &mut source) else {
            break;
        };
        if eq(element, needle.get(i)) {
            i += 1;
            if i == len {
                match direction {
                    Direction::Forward => return Some(m0 + m),
                    Direction::Backward => {
                        answer = Some(m0 + m);
                        // Resume from the fully-matched state via the last
                        // position's failure link; later overlapping matches
                        // stay reachable without re-pulling anything.
                        let last = len - 1;
                        m += table.shift(last);
                        i = table.fallback(last);
                    }
                }
            }
        } else {
            m += table.shift(i);
            i = table.fallback(i);
        }
    }
    answer
}
