//! Move-only exclusive owners for heap scalars and buffers.
//!
//! [`OwnedPtr`] owns at most one heap-allocated value and frees it exactly
//! once; [`OwnedBuf`] does the same for a heap-allocated buffer. Both are
//! move-only: ownership can be transferred (moved, [`release`]d or
//! [`swap`]ped) but never duplicated, so the "at most one owner per
//! allocation" invariant is enforced by the type system rather than by
//! convention. This crate is the only one in the holdfast workspace that may
//! contain `unsafe` code; every unsafe operation is bounded to this crate and
//! carries a `// SAFETY:` comment.
//!
//! # Ownership states
//!
//! An owner is either *empty* (holds the null handle, frees nothing on drop)
//! or *owning* (holds a live allocation, frees it exactly once on drop):
//!
//! ```text
//! empty ──set / reset(p) / from_raw(p)──▶ owning(p)
//!   ▲                                        │
//!   ├────────────── release() ◀──────────────┤   no deallocation
//!   └────────────── clear() / drop ◀─────────┘   deallocates exactly once
//! ```
//!
//! # Allocation strategies
//!
//! The two owners pair mutually exclusive (allocate, deallocate) strategies:
//! [`OwnedPtr`] frees through the single-object strategy (`Box<T>`),
//! [`OwnedBuf`] through the buffer strategy (`Box<[T]>`). A raw pointer
//! handed to [`OwnedPtr::from_raw`] or [`OwnedBuf::from_raw`] must come from
//! the matching strategy and must not be owned elsewhere; that contract is
//! not detectable at runtime and is documented on every unsafe entry point.
//!
//! # Precondition checks
//!
//! Dereferencing or indexing an empty owner is a programmer bug, not a
//! runtime condition to recover from. Those accessors `assert!` with a
//! message naming the violated precondition; the panic is always on,
//! in release builds too, because handing out a reference to absent memory
//! from a safe method is not an option in Rust.
//!
//! [`release`]: OwnedPtr::release
//! [`swap`]: OwnedPtr::swap

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod buf;
pub mod owned;

pub use buf::OwnedBuf;
pub use owned::OwnedPtr;
