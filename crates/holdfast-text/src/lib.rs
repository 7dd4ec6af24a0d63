//! Delimiter-set token splitting.
//!
//! Subdivides a string into the maximal substrings that contain no character
//! from a delimiter set. Every character of the set is a possible delimiter,
//! consecutive delimiters collapse, and no empty tokens are produced:
//!
//! ```
//! let words = holdfast_text::split_to_vec("apple orange\tbanana", "\t ");
//! assert_eq!(words, ["apple", "orange", "banana"]);
//! ```
//!
//! The core is the borrowing iterator [`Tokens`]; [`split_to_vec`] and
//! [`split_to_set`] are collecting conveniences. The set variant keeps the
//! first occurrence of each token in insertion order, so iteration over the
//! result is deterministic.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod split;

pub use split::{split_to_set, split_to_vec, tokens, Tokens};
