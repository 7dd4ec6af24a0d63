//! Holdfast: exclusive-ownership pointer primitives and base string
//! utilities.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the holdfast sub-crates. For most users, adding `holdfast` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use holdfast::prelude::*;
//!
//! // A move-only owner of one heap value. Replacing the value frees the
//! // previous allocation exactly once; releasing hands it back raw.
//! let mut slot = OwnedPtr::new(42u32);
//! assert_eq!(*slot, 42);
//! slot.set(7);
//! assert_eq!(*slot, 7);
//!
//! // The buffer owner does the same for a whole heap buffer.
//! let mut samples = OwnedBuf::from_vec(vec![0.0f32; 4]);
//! samples[2] = 0.5;
//! assert_eq!(samples.iter().sum::<f32>(), 0.5);
//!
//! // Delimiter-set splitting, no empty tokens.
//! let fields = split_to_vec("name\tage\tcity", "\t");
//! assert_eq!(fields, ["name", "age", "city"]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`ptr`] | `holdfast-ptr` | [`OwnedPtr`](ptr::OwnedPtr), [`OwnedBuf`](ptr::OwnedBuf) |
//! | [`text`] | `holdfast-text` | [`Tokens`](text::Tokens) and the splitting entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Exclusive owners for heap scalars and buffers (`holdfast-ptr`).
///
/// [`ptr::OwnedPtr`] and [`ptr::OwnedBuf`] are also available in the
/// [`prelude`].
pub use holdfast_ptr as ptr;

/// Delimiter-set token splitting (`holdfast-text`).
///
/// The collecting entry points [`text::split_to_vec`] and
/// [`text::split_to_set`] are also available in the [`prelude`].
pub use holdfast_text as text;

/// Common imports for typical holdfast usage.
///
/// ```rust
/// use holdfast::prelude::*;
/// ```
pub mod prelude {
    // Owners
    pub use holdfast_ptr::{OwnedBuf, OwnedPtr};

    // Splitting
    pub use holdfast_text::{split_to_set, split_to_vec, tokens, Tokens};
}
