//! In-place KMP scan over random-access haystacks.

use super::Direction;
use super::jump_table::JumpTable;
use super::needle::NeedleView;
use crate::sequence::Indexed;

/// Scans `haystack[m0..m1]` for the needle view, in either direction.
///
/// Two monotonically advancing cursors: `i` is the position within the
/// needle (0-based in the view's match order), `m` the alignment offset
/// within the haystack range. The haystack element compared against
/// `needle[i]` sits at the orientation-adjusted position
/// `zero + delta * (i + m)` where `(zero, delta)` is `(m0, +1)` forward and
/// `(m1 - 1, -1)` backward. `m` never decreases and no matched position is
/// re-examined beyond what the jump table accounts for, so the scan is
/// O(m1 - m0) with O(needle len) space.
pub(crate) fn scan<H, IX, E>(
    haystack: &H,
    m0: usize,
    m1: usize,
    needle: &NeedleView<IX>,
    table: &JumpTable,
    direction: Direction,
    eq: &mut E,
) -> Option<usize>
where
    H: Indexed + ?Sized,
    IX: Indexed<Item = H::Item>,
    E: FnMut(&H::Item, &H::Item) -> bool,
{
    let len = needle.len();
    let span = m1 - m0;

    let mut i = 0;
    let mut m = 0;
    while i + m < span {
        let position = match direction {
            Direction::Forward => m0 + i + m,
            Direction::Backward => m1 - 1 - (i + m),
        };
        if eq(haystack.get(position), needle.get(i)) {
            i += 1;
            if i == len {
                return Some(match direction {
                    Direction::Forward => m0 + m,
                    Direction::Backward => m1 - m - len,
                });
            }
        } else {
            m += table.shift(i);
            i = table.fallback(i);
        }
    }
    None
}
