//! Sequence adapter layer - capability-tagged lazy sequences.
//!
//! This module provides the [`Sequence`] trait, the abstraction the slice
//! search engine consumes. A sequence always supports a single forward pass
//! (a *cursor*); it may additionally support O(1) indexed access with a
//! known length, exposed through the [`Indexed`] trait.
//!
//! The capability is probed exactly once, at the entry of a search, via
//! [`Sequence::try_into_indexed`] - a tagged split, not runtime type
//! inspection sprinkled through the algorithm bodies.
//!
//! # Examples
//!
//! ```rust
//! use seqsearch::sequence::{OnePass, Sequence};
//!
//! // Slices are random-access sequences.
//! let slice: &[i32] = &[1, 2, 3];
//! assert!(slice.try_into_indexed().is_ok());
//!
//! // Any iterator can be forced down the single-pass path.
//! let one_pass = OnePass::new(vec![1, 2, 3]);
//! assert!(one_pass.try_into_indexed().is_err());
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;

/// A source supporting O(1) indexed element lookup and a known length.
pub trait Indexed {
    /// The element type.
    type Item;

    /// The number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index >= self.len()`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Returns `true` if the source holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Indexed for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Indexed for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<I: Indexed + ?Sized> Indexed for &I {
    type Item = I::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> &Self::Item {
        (**self).get(index)
    }
}

/// A lazily produced, possibly single-pass sequence of elements.
///
/// Every sequence can be turned into a one-pass cursor exactly once.
/// Sequences over random-access containers additionally expose an
/// [`Indexed`] view through [`Sequence::try_into_indexed`]; strictly
/// one-pass sources hand themselves back unchanged.
///
/// The trait consumes `self` in both operations because a single-pass
/// source is spent by enumeration. Borrowed sequences such as `&[T]` are
/// `Copy`, so consuming them is free and repeatable.
pub trait Sequence: Sized {
    /// The element type.
    type Item;

    /// The one-pass cursor over the elements.
    type Cursor: Iterator<Item = Self::Item>;

    /// The random-access view, when the source supports one.
    ///
    /// Sources without random access use [`NeverIndexed`], which is
    /// uninhabited and therefore can never actually be produced.
    type IndexedView: Indexed<Item = Self::Item>;

    /// Consumes the sequence, producing its one-pass cursor.
    fn into_cursor(self) -> Self::Cursor;

    /// Probes the random-access capability.
    ///
    /// Returns `Ok` with an indexed view for random-access sources, or
    /// `Err` with the sequence handed back intact for one-pass sources.
    ///
    /// # Errors
    ///
    /// `Err(self)` is not a failure; it reports the absence of the
    /// random-access capability while preserving the source.
    fn try_into_indexed(self) -> Result<Self::IndexedView, Self>;
}

impl<'a, T: Clone> Sequence for &'a [T] {
    type Item = T;
    type Cursor = std::iter::Cloned<std::slice::Iter<'a, T>>;
    type IndexedView = &'a [T];

    fn into_cursor(self) -> Self::Cursor {
        self.iter().cloned()
    }

    fn try_into_indexed(self) -> Result<Self::IndexedView, Self> {
        Ok(self)
    }
}

impl<'a, T: Clone> Sequence for &'a Vec<T> {
    type Item = T;
    type Cursor = std::iter::Cloned<std::slice::Iter<'a, T>>;
    type IndexedView = &'a [T];

    fn into_cursor(self) -> Self::Cursor {
        self.iter().cloned()
    }

    fn try_into_indexed(self) -> Result<Self::IndexedView, Self> {
        Ok(self.as_slice())
    }
}

impl<'a, T: Clone, const N: usize> Sequence for &'a [T; N] {
    type Item = T;
    type Cursor = std::iter::Cloned<std::slice::Iter<'a, T>>;
    type IndexedView = &'a [T];

    fn into_cursor(self) -> Self::Cursor {
        self.iter().cloned()
    }

    fn try_into_indexed(self) -> Result<Self::IndexedView, Self> {
        Ok(self.as_slice())
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Cursor = std::vec::IntoIter<T>;
    type IndexedView = Self;

    fn into_cursor(self) -> Self::Cursor {
        self.into_iter()
    }

    fn try_into_indexed(self) -> Result<Self::IndexedView, Self> {
        Ok(self)
    }
}

/// Wrapper forcing any iterator down the single-pass code path.
///
/// `OnePass` never reports the random-access capability, even when the
/// underlying iterator was produced from a random-access container. This is
/// both the adapter for genuinely one-pass sources and the test seam for
/// checking that the windowed scan agrees with the in-place scan.
///
/// # Examples
///
/// ```rust
/// use seqsearch::prelude::*;
///
/// let source = OnePass::new(vec![1, 2, 3, 4, 5]);
/// assert_eq!(source.index_of_slice(&[3, 4][..]), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct OnePass<I> {
    iter: I,
}

impl<I: Iterator> OnePass<I> {
    /// Wraps anything iterable as a strictly one-pass sequence.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
        }
    }
}

impl<I: Iterator> Sequence for OnePass<I> {
    type Item = I::Item;
    type Cursor = I;
    type IndexedView = NeverIndexed<I::Item>;

    fn into_cursor(self) -> Self::Cursor {
        self.iter
    }

    fn try_into_indexed(self) -> Result<Self::IndexedView, Self> {
        Err(self)
    }
}

/// Placeholder indexed view for sources that can never produce one.
///
/// This type is uninhabited; it exists only to satisfy the associated-type
/// requirement of [`Sequence`] for single-pass sources.
#[derive(Debug)]
pub struct NeverIndexed<T> {
    never: Infallible,
    marker: PhantomData<T>,
}

impl<T> Indexed for NeverIndexed<T> {
    type Item = T;

    fn len(&self) -> usize {
        match self.never {}
    }

    fn get(&self, _index: usize) -> &T {
        match self.never {}
    }
}

impl<T> Sequence for NeverIndexed<T> {
    type Item = T;
    type Cursor = std::iter::Empty<T>;
    type IndexedView = Self;

    fn into_cursor(self) -> Self::Cursor {
        match self.never {}
    }

    fn try_into_indexed(self) -> Result<Self::IndexedView, Self> {
        match self.never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_reports_indexed_capability() {
        let slice: &[i32] = &[10, 20, 30];
        let view = slice.try_into_indexed().ok().unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(*Indexed::get(view, 1), 20);
    }

    #[test]
    fn one_pass_hides_indexed_capability() {
        let source = OnePass::new(vec![1, 2, 3]);
        let back = source.try_into_indexed().err().unwrap();
        assert_eq!(back.into_cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn vec_by_value_is_indexed() {
        let view = vec![1, 2].try_into_indexed().ok().unwrap();
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn cursor_yields_elements_in_order() {
        let slice: &[i32] = &[5, 6, 7];
        assert_eq!(slice.into_cursor().collect::<Vec<_>>(), vec![5, 6, 7]);
    }
}
