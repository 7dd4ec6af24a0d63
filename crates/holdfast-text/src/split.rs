//! The token iterator and its collecting entry points.

use std::iter::FusedIterator;

use indexmap::IndexSet;

/// A delimiter set, specialised for the overwhelmingly common case of a
/// single delimiter character.
#[derive(Clone, Copy)]
enum DelimSet<'a> {
    /// One `char` comparison per position instead of a set scan.
    Single(char),
    /// Each character of the string is a possible delimiter.
    Multi(&'a str),
}

impl<'a> DelimSet<'a> {
    fn new(delims: &'a str) -> Self {
        let mut chars = delims.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => DelimSet::Single(c),
            _ => DelimSet::Multi(delims),
        }
    }

    fn matches(self, c: char) -> bool {
        match self {
            DelimSet::Single(d) => c == d,
            DelimSet::Multi(s) => s.contains(c),
        }
    }
}

/// Borrowing iterator over the tokens of `text` separated by any character
/// of a delimiter set.
///
/// Created by [`tokens`]. Yields maximal non-empty substrings containing no
/// delimiter character; consecutive, leading, and trailing delimiters
/// produce no empty tokens. With an empty delimiter set the whole non-empty
/// input is one token.
///
/// ```
/// let mut iter = holdfast_text::tokens("one,,two,", ",");
/// assert_eq!(iter.next(), Some("one"));
/// assert_eq!(iter.next(), Some("two"));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    delims: DelimSet<'a>,
    /// Byte position of the unscanned remainder of `text`. Always on a
    /// character boundary.
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let text: &'a str = self.text;
        let rest = &text[self.pos..];

        // Skip to the first non-delimiter character.
        let start = match rest.find(|c: char| !self.delims.matches(c)) {
            Some(i) => i,
            None => {
                self.pos = text.len();
                return None;
            }
        };

        // The token runs to the next delimiter, or to the end of input.
        let body = &rest[start..];
        let end = body
            .find(|c: char| self.delims.matches(c))
            .unwrap_or(body.len());
        self.pos += start + end;
        Some(&body[..end])
    }
}

impl FusedIterator for Tokens<'_> {}

/// Iterate over the tokens of `text` separated by any character of
/// `delims`.
pub fn tokens<'a>(text: &'a str, delims: &'a str) -> Tokens<'a> {
    Tokens {
        text,
        delims: DelimSet::new(delims),
        pos: 0,
    }
}

/// Split `text` on any character of `delims`, collecting the tokens in
/// order.
///
/// ```
/// let words = holdfast_text::split_to_vec("apple orange\tbanana", "\t ");
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[0], "apple");
/// assert_eq!(words[1], "orange");
/// assert_eq!(words[2], "banana");
/// ```
pub fn split_to_vec(text: &str, delims: &str) -> Vec<String> {
    tokens(text, delims).map(str::to_owned).collect()
}

/// Split `text` on any character of `delims`, collecting distinct tokens.
///
/// Keeps the first occurrence of each token, in insertion order, so
/// iterating the result is deterministic.
///
/// ```
/// let set = holdfast_text::split_to_set("b a b c a", " ");
/// assert!(set.contains("a"));
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().collect::<Vec<_>>(), ["b", "a", "c"]);
/// ```
pub fn split_to_set(text: &str, delims: &str) -> IndexSet<String> {
    tokens(text, delims).map(str::to_owned).collect()
}
