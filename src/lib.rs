//! # seqsearch
//!
//! Scala-inspired sequence operators over lazy, possibly single-pass
//! sequences, built around a generalized slice-search engine.
//!
//! ## Overview
//!
//! The library has two layers, the second built strictly on the first:
//!
//! - **Sequence adapter layer** ([`sequence`]): the [`sequence::Sequence`]
//!   trait abstracts over sources that support at least a single forward
//!   pass, and optionally O(1) indexed access with a known length. The
//!   capability split is resolved once at entry, not re-probed inside the
//!   algorithms.
//! - **Slice search engine** ([`search`]): given a haystack range, a needle
//!   range, a direction, and an equality comparer, [`search::find_slice`]
//!   returns the first (forward) or last (backward) offset at which the
//!   needle occurs as a contiguous subsequence. Random-access haystacks get
//!   a linear-time in-place Knuth-Morris-Pratt scan; single-pass haystacks
//!   get a windowed KMP scan that pulls each element at most once.
//!
//! On top of these, [`ops`] provides the ordinary operator plumbing:
//! Scala-flavored iterator combinators ([`ops::IterOps`]) and the
//! convenience search wrappers ([`ops::SliceSearch`]) that resolve default
//! bounds and default comparers before delegating to the engine.
//!
//! ## Example
//!
//! ```rust
//! use seqsearch::prelude::*;
//!
//! let haystack = [1, 1, 2, 1, 1, 1, 2, 3, 4, 5];
//!
//! // The overlapping-prefix case the KMP failure function exists for.
//! assert_eq!(haystack.as_slice().index_of_slice(&[1, 1, 1, 2][..]), Some(3));
//!
//! // The same search over a strictly one-pass source.
//! let one_pass = OnePass::new(vec![1, 1, 2, 1, 1, 1, 2, 3, 4, 5]);
//! assert_eq!(one_pass.index_of_slice(&[1, 1, 1, 2][..]), Some(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqsearch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ops::*;
    pub use crate::search::{Direction, UNBOUNDED, find_slice};
    pub use crate::sequence::*;
}

pub mod ops;
pub mod search;
pub mod sequence;
