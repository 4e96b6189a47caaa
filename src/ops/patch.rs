//! Lazy slice replacement adapter.

use std::mem;

/// Iterator produced by [`crate::ops::IterOps::patch`].
///
/// Yields up to `from` original elements, then the whole patch, then the
/// originals that survive after `replaced` are dropped. If the source runs
/// out while dropping, the sequence ends there.
#[derive(Debug)]
pub struct Patch<I, P> {
    source: I,
    patch: P,
    remaining_head: usize,
    to_drop: usize,
    state: State,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Head,
    Splice,
    Tail,
}

impl<I, P> Patch<I, P> {
    pub(crate) fn new(source: I, from: usize, patch: P, replaced: usize) -> Self {
        Self {
            source,
            patch,
            remaining_head: from,
            to_drop: replaced,
            state: State::Head,
        }
    }
}

impl<I, P> Iterator for Patch<I, P>
where
    I: Iterator,
    P: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Head => {
                    if self.remaining_head == 0 {
                        self.state = State::Splice;
                        continue;
                    }
                    match self.source.next() {
                        Some(item) => {
                            self.remaining_head -= 1;
                            return Some(item);
                        }
                        None => {
                            self.remaining_head = 0;
                            self.state = State::Splice;
                        }
                    }
                }
                State::Splice => {
                    if let Some(item) = self.patch.next() {
                        return Some(item);
                    }
                    let drops = mem::take(&mut self.to_drop);
                    self.state = State::Tail;
                    for _ in 0..drops {
                        if self.source.next().is_none() {
                            return None;
                        }
                    }
                }
                State::Tail => return self.source.next(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::IterOps;

    #[test]
    fn replaces_a_middle_slice() {
        let patched: Vec<i32> = [1, 2, 3, 4, 5].into_iter().patch(1, [8, 9], 2).collect();
        assert_eq!(patched, vec![1, 8, 9, 4, 5]);
    }

    #[test]
    fn from_beyond_the_end_appends() {
        let patched: Vec<i32> = [1, 2].into_iter().patch(10, [8, 9], 0).collect();
        assert_eq!(patched, vec![1, 2, 8, 9]);
    }

    #[test]
    fn replaced_running_past_the_end_truncates() {
        let patched: Vec<i32> = [1, 2, 3].into_iter().patch(1, [8], 10).collect();
        assert_eq!(patched, vec![1, 8]);
    }

    #[test]
    fn zero_replaced_inserts() {
        let patched: Vec<i32> = [1, 2, 3].into_iter().patch(1, [8, 9], 0).collect();
        assert_eq!(patched, vec![1, 8, 9, 2, 3]);
    }

    #[test]
    fn empty_patch_deletes() {
        let patched: Vec<i32> = [1, 2, 3, 4].into_iter().patch(1, [], 2).collect();
        assert_eq!(patched, vec![1, 4]);
    }

    #[test]
    fn is_lazy_until_iterated() {
        let mut pulled = 0;
        let source = (0..5).inspect(|_| pulled += 1);
        let adapter = source.patch(2, [9], 1);
        // Constructing the adapter pulls nothing.
        let collected: Vec<i32> = adapter.collect();
        assert_eq!(collected, vec![0, 1, 9, 3, 4]);
        assert_eq!(pulled, 5);
    }
}
