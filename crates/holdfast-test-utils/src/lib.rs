//! Test fixtures for holdfast development.
//!
//! Provides the drop-tracking pair [`DropLedger`]/[`DropProbe`] used by the
//! owner crates' tests and benches to audit that every owned allocation is
//! destroyed exactly once.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{DropLedger, DropProbe};
