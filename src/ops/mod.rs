//! Sequence transformation operators.
//!
//! Ordinary iterator plumbing in the Scala `Seq` vocabulary, plus the
//! convenience search wrappers that resolve default bounds and comparers
//! before delegating to the slice-search engine:
//!
//! - [`IterOps`]: fold/reduce variants, indexing and element search,
//!   slicing, patching, string joining - on any [`Iterator`].
//! - [`SliceSearch`]: `index_of_slice`, `last_index_of_slice`,
//!   `contains_slice`, `starts_with_seq`, `ends_with_seq` - on any
//!   [`crate::sequence::Sequence`].
//!
//! Combinators Rust already spells the same way (`map`, `flat_map`,
//! `for_each`, `filter`) have no duplicate wrappers here.

mod iter;
mod patch;
mod search;

pub use iter::IterOps;
pub use patch::Patch;
pub use search::SliceSearch;
