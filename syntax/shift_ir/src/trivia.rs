//! Trivia blobs attached to token edges.
//!
//! Trivia is non-semantic text (whitespace, comments) carried verbatim on a
//! token's leading or trailing edge. It is opaque: never normalized, split,
//! or regenerated. The only trivia this crate ever synthesizes are the
//! newline and space runs a rewrite needs when it inserts a declaration.

use std::fmt;

/// An opaque run of whitespace and/or comments.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Trivia {
    text: String,
}

impl Trivia {
    /// Create trivia from verbatim source text.
    pub fn new(text: impl Into<String>) -> Self {
        Trivia { text: text.into() }
    }

    /// Empty trivia.
    pub fn empty() -> Self {
        Trivia::default()
    }

    /// A single space.
    pub fn space() -> Self {
        Trivia::new(" ")
    }

    /// `n` newline characters.
    pub fn newlines(n: usize) -> Self {
        Trivia::new("\n".repeat(n))
    }

    /// The verbatim trivia text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the blob contains no comment text, only whitespace.
    /// Empty trivia counts as whitespace-only.
    pub fn is_whitespace_only(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// True when the blob contains a line break.
    pub fn contains_newline(&self) -> bool {
        self.text.contains('\n') || self.text.contains('\r')
    }

    /// Byte length of the pure-whitespace prefix (up to the first comment
    /// character, or the whole blob when there is none).
    pub fn whitespace_prefix_len(&self) -> usize {
        self.text.len() - self.text.trim_start().len()
    }

    /// Byte length of the pure-whitespace suffix.
    pub fn whitespace_suffix_len(&self) -> usize {
        self.text.len() - self.text.trim_end().len()
    }

    /// Append verbatim text. Used by the lexer while accumulating a run.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// A copy guaranteed to end in whitespace: appends a single space unless
    /// the blob already ends with a whitespace character.
    pub fn merging_space(&self) -> Trivia {
        if self.text.ends_with(char::is_whitespace) {
            self.clone()
        } else {
            let mut text = self.text.clone();
            text.push(' ');
            Trivia { text }
        }
    }
}

impl fmt::Debug for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trivia({:?})", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merging_space_never_doubles() {
        assert_eq!(Trivia::new(" ").merging_space().text(), " ");
        assert_eq!(Trivia::new("").merging_space().text(), " ");
        assert_eq!(Trivia::new("\t").merging_space().text(), "\t");
        assert_eq!(Trivia::new("// c").merging_space().text(), "// c ");
    }

    #[test]
    fn whitespace_classification() {
        assert!(Trivia::empty().is_whitespace_only());
        assert!(Trivia::new("  \n\t").is_whitespace_only());
        assert!(!Trivia::new("  // hi\n").is_whitespace_only());
        assert_eq!(Trivia::new("\n  // c\n  ").whitespace_prefix_len(), 3);
        assert_eq!(Trivia::new(" // x  ").whitespace_suffix_len(), 2);
    }
}
