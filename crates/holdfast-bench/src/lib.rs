//! Benchmark inputs for the holdfast primitives.
//!
//! Provides deterministic corpus builders shared by the bench targets:
//!
//! - [`sample_line`]: one tab-and-space separated record line
//! - [`sample_document`]: `n` such lines joined by newlines

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// A representative record line: mixed tab and space delimiters, short
/// tokens, some repetition for the set-collecting benches.
pub fn sample_line() -> String {
    String::from("alpha\tbeta gamma\tdelta epsilon alpha\tzeta beta eta")
}

/// Build an `n`-line document of [`sample_line`] records.
pub fn sample_document(n: usize) -> String {
    let line = sample_line();
    let mut doc = String::with_capacity((line.len() + 1) * n);
    for i in 0..n {
        if i > 0 {
            doc.push('\n');
        }
        doc.push_str(&line);
    }
    doc
}
