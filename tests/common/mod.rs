//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Counts how many elements an iterator hands out, for asserting that the
/// single-pass search paths never re-enumerate their source.
pub struct SpyCursor<I> {
    inner: I,
    pulls: Rc<Cell<usize>>,
}

impl<I: Iterator> SpyCursor<I> {
    pub fn new<S>(source: S) -> (Self, Rc<Cell<usize>>)
    where
        S: IntoIterator<IntoIter = I>,
    {
        let pulls = Rc::new(Cell::new(0));
        (
            Self {
                inner: source.into_iter(),
                pulls: Rc::clone(&pulls),
            },
            pulls,
        )
    }
}

impl<I: Iterator> Iterator for SpyCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.pulls.set(self.pulls.get() + 1);
        }
        item
    }
}

/// Reference implementation: first occurrence at or after `from`.
pub fn naive_index_of_slice<T: PartialEq>(haystack: &[T], needle: &[T], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from);
    }
    if haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&k| haystack[k..k + needle.len()] == *needle)
}

/// Reference implementation: last occurrence, full range.
pub fn naive_last_index_of_slice<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    if haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&k| haystack[k..k + needle.len()] == *needle)
}
