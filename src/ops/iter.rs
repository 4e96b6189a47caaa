//! Scala-flavored combinators on any iterator.

use std::fmt::Display;

use super::patch::Patch;

/// Extension trait adding Scala `Seq`-style operators to every iterator.
///
/// All methods consume the iterator; right-to-left folds buffer the
/// elements first, since a one-pass source cannot be walked backwards.
///
/// # Examples
///
/// ```rust
/// use seqsearch::ops::IterOps;
///
/// let sum = [1, 2, 3].into_iter().fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 6);
///
/// let joined = [1, 2, 3].into_iter().mk_string_full("[", ", ", "]");
/// assert_eq!(joined, "[1, 2, 3]");
/// ```
pub trait IterOps: Iterator {
    /// Applies a binary operator to a start value and all elements, going
    /// left to right. Identical to [`Iterator::fold`] under its Scala name.
    fn fold_left<B, F>(self, init: B, op: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.fold(init, op)
    }

    /// Applies a binary operator to all elements and a start value, going
    /// right to left. Buffers the elements.
    fn fold_right<B, F>(self, init: B, mut op: F) -> B
    where
        Self: Sized,
        F: FnMut(Self::Item, B) -> B,
    {
        let items: Vec<Self::Item> = self.collect();
        items
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| op(element, accumulator))
    }

    /// Reduces the elements left to right, or `None` when the source is
    /// empty. Emptiness is a normal result here, not an error.
    fn reduce_left<F>(self, op: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.reduce(op)
    }

    /// Reduces the elements right to left, or `None` when the source is
    /// empty. Buffers the elements.
    fn reduce_right<F>(self, mut op: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let items: Vec<Self::Item> = self.collect();
        items
            .into_iter()
            .rev()
            .reduce(|accumulator, element| op(element, accumulator))
    }

    /// Applies `f` to every element together with its index.
    fn for_each_with_index<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item, usize),
    {
        for (index, item) in self.enumerate() {
            f(item, index);
        }
    }

    /// The range of all indices of this sequence, produced lazily.
    fn indices(self) -> impl Iterator<Item = usize>
    where
        Self: Sized,
    {
        self.enumerate().map(|(index, _)| index)
    }

    /// Selects the interval of elements `[from, until)`.
    fn slice_range(self, from: usize, until: usize) -> std::iter::Take<std::iter::Skip<Self>>
    where
        Self: Sized,
    {
        self.skip(from).take(until.saturating_sub(from))
    }

    /// Produces a new sequence where `replaced` elements starting at `from`
    /// are replaced by the elements of `patch`.
    ///
    /// Lazy: nothing is pulled until the result is iterated. A `from`
    /// beyond the end appends the patch; a `replaced` count that runs past
    /// the end simply truncates there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqsearch::ops::IterOps;
    ///
    /// let patched: Vec<i32> = [1, 2, 3, 4, 5].into_iter().patch(1, [8, 9], 2).collect();
    /// assert_eq!(patched, vec![1, 8, 9, 4, 5]);
    /// ```
    fn patch<P>(self, from: usize, patch: P, replaced: usize) -> Patch<Self, P::IntoIter>
    where
        Self: Sized,
        P: IntoIterator<Item = Self::Item>,
    {
        Patch::new(self, from, patch.into_iter(), replaced)
    }

    /// Splits this sequence at position `n`: the first `n` elements
    /// materialized, and the rest still lazy.
    fn split_at_seq(mut self, n: usize) -> (Vec<Self::Item>, Self)
    where
        Self: Sized,
    {
        let head: Vec<Self::Item> = self.by_ref().take(n).collect();
        (head, self)
    }

    /// Tests whether this sequence has no elements, pulling at most one.
    fn is_empty_seq(mut self) -> bool
    where
        Self: Sized,
    {
        self.next().is_none()
    }

    /// Tests whether this sequence contains `element`.
    fn contains_elem(self, element: &Self::Item) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.contains_elem_by(element, |a, b| a == b)
    }

    /// Tests whether this sequence contains `element` under `eq`.
    fn contains_elem_by<E>(self, element: &Self::Item, mut eq: E) -> bool
    where
        Self: Sized,
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        for item in self {
            if eq(&item, element) {
                return true;
            }
        }
        false
    }

    /// Index of the first element satisfying `predicate`.
    fn index_where<P>(self, predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.index_where_from(predicate, 0)
    }

    /// Index (>= `from`) of the first element satisfying `predicate`.
    fn index_where_from<P>(self, mut predicate: P, from: usize) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.enumerate()
            .skip(from)
            .find(|(_, item)| predicate(item))
            .map(|(index, _)| index)
    }

    /// Index of the last element satisfying `predicate`.
    fn last_index_where<P>(self, predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.last_index_where_end(predicate, usize::MAX)
    }

    /// Index (<= `end`) of the last element satisfying `predicate`.
    fn last_index_where_end<P>(self, mut predicate: P, end: usize) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut last = None;
        for (index, item) in self.enumerate() {
            if index > end {
                break;
            }
            if predicate(&item) {
                last = Some(index);
            }
        }
        last
    }

    /// Index of the first occurrence of `element`.
    fn index_of_elem(self, element: &Self::Item) -> Option<usize>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.index_of_elem_by(element, 0, |a, b| a == b)
    }

    /// Index (>= `from`) of the first occurrence of `element`.
    fn index_of_elem_from(self, element: &Self::Item, from: usize) -> Option<usize>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.index_of_elem_by(element, from, |a, b| a == b)
    }

    /// Index (>= `from`) of the first occurrence of `element` under `eq`.
    fn index_of_elem_by<E>(self, element: &Self::Item, from: usize, mut eq: E) -> Option<usize>
    where
        Self: Sized,
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.index_where_from(|item| eq(item, element), from)
    }

    /// Index of the last occurrence of `element`.
    fn last_index_of_elem(self, element: &Self::Item) -> Option<usize>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.last_index_of_elem_by(element, usize::MAX, |a, b| a == b)
    }

    /// Index (<= `end`) of the last occurrence of `element`.
    fn last_index_of_elem_end(self, element: &Self::Item, end: usize) -> Option<usize>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.last_index_of_elem_by(element, end, |a, b| a == b)
    }

    /// Index (<= `end`) of the last occurrence of `element` under `eq`.
    fn last_index_of_elem_by<E>(self, element: &Self::Item, end: usize, mut eq: E) -> Option<usize>
    where
        Self: Sized,
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.last_index_where_end(|item| eq(item, element), end)
    }

    /// Displays all elements in a string with no separator.
    fn mk_string(self) -> String
    where
        Self: Sized,
        Self::Item: Display,
    {
        self.mk_string_full("", "", "")
    }

    /// Displays all elements in a string separated by `sep`.
    fn mk_string_sep(self, sep: &str) -> String
    where
        Self: Sized,
        Self::Item: Display,
    {
        self.mk_string_full("", sep, "")
    }

    /// Displays all elements in a string bracketed by `start` and `end`
    /// and separated by `sep`.
    fn mk_string_full(self, start: &str, sep: &str, end: &str) -> String
    where
        Self: Sized,
        Self::Item: Display,
    {
        let mut out = String::from(start);
        for (index, item) in self.enumerate() {
            if index > 0 {
                out.push_str(sep);
            }
            out.push_str(&item.to_string());
        }
        out.push_str(end);
        out
    }
}

impl<I: Iterator> IterOps for I {}
