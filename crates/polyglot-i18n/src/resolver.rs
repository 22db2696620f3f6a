//! Key resolution against a single message tree
//!
//! Keys come in two shapes. A key made of several whitespace separated words
//! is a *phrase key*: it is compared verbatim with the top-level entries and
//! doubles as its own default text. A single-token key is a *path key*: it is
//! split on `.` and walked through the nested catalog.

use crate::message::MessageTree;

/// How a lookup key is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Multi-word literal key, looked up at the top level only
    Phrase,
    /// Single-token dotted key, walked segment by segment
    Path,
}

impl KeyKind {
    /// Classify a key by its number of whitespace separated tokens
    pub fn of(key: &str) -> Self {
        if key.split_whitespace().nth(1).is_some() {
            Self::Phrase
        } else {
            Self::Path
        }
    }
}

/// Outcome of resolving a key against a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The catalog holds a string for the key
    Found(&'a str),
    /// Phrase key without an entry; the key is its own text
    KeyAsText,
    /// Path key that does not end on a string
    NotFound,
}

impl<'a> Resolution<'a> {
    /// Resolved text, or `key` when the catalog had none
    pub fn text_or<'b>(self, key: &'b str) -> &'b str
    where
        'a: 'b,
    {
        match self {
            Self::Found(text) => text,
            Self::KeyAsText | Self::NotFound => key,
        }
    }

    /// Whether the catalog supplied the text
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Resolve `key` against `catalog`
pub fn resolve<'a>(key: &str, catalog: &'a MessageTree) -> Resolution<'a> {
    match KeyKind::of(key) {
        KeyKind::Phrase => catalog
            .child(key)
            .and_then(MessageTree::as_text)
            .map_or(Resolution::KeyAsText, Resolution::Found),
        KeyKind::Path => catalog
            .lookup(key.split('.'))
            .map_or(Resolution::NotFound, Resolution::Found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MessageTree {
        MessageTree::node()
            .with_entry("Save changes", "Save your changes")
            .with_entry("Nested phrase", MessageTree::node().with_entry("x", "y"))
            .with_entry("user", MessageTree::node().with_entry("name", "Name"))
            .with_entry("user.name", "flat entry")
            .with_entry("title", "Title")
    }

    #[test]
    fn test_key_kind() {
        assert_eq!(KeyKind::of("user.name"), KeyKind::Path);
        assert_eq!(KeyKind::of("  padded  "), KeyKind::Path);
        assert_eq!(KeyKind::of("two  words"), KeyKind::Phrase);
        assert_eq!(KeyKind::of("tab\tseparated"), KeyKind::Phrase);
        assert_eq!(KeyKind::of(""), KeyKind::Path);
    }

    #[test]
    fn test_path_key_walks_nesting() {
        let catalog = catalog();
        assert_eq!(resolve("user.name", &catalog), Resolution::Found("Name"));
        assert_eq!(resolve("title", &catalog), Resolution::Found("Title"));
    }

    #[test]
    fn test_path_key_misses() {
        let catalog = catalog();
        assert_eq!(resolve("user", &catalog), Resolution::NotFound);
        assert_eq!(resolve("user.email", &catalog), Resolution::NotFound);
        assert_eq!(resolve("title.sub", &catalog), Resolution::NotFound);
    }

    #[test]
    fn test_phrase_key_is_verbatim() {
        let catalog = catalog();
        assert_eq!(resolve("Save changes", &catalog), Resolution::Found("Save your changes"));
        assert_eq!(resolve("Discard changes", &catalog), Resolution::KeyAsText);
        assert_eq!(resolve("Nested phrase", &catalog), Resolution::KeyAsText);
    }

    #[test]
    fn test_any_whitespace_makes_a_phrase_key() {
        let catalog = MessageTree::node()
            .with_entry("menu", MessageTree::node().with_entry("file", "File"))
            .with_entry("menu.file\tmain", "Main file menu");
        assert_eq!(KeyKind::of("menu.file\tmain"), KeyKind::Phrase);
        assert_eq!(resolve("menu.file\tmain", &catalog), Resolution::Found("Main file menu"));
        assert_eq!(resolve("menu.file\nmain", &catalog), Resolution::KeyAsText);
        assert_eq!(resolve("menu.file", &catalog), Resolution::Found("File"));
    }

    #[test]
    fn test_text_or_falls_back_to_key() {
        let catalog = catalog();
        assert_eq!(resolve("missing.key", &catalog).text_or("missing.key"), "missing.key");
        assert_eq!(resolve("Hello there", &catalog).text_or("Hello there"), "Hello there");
        assert!(!resolve("missing", &catalog).is_found());
    }
}
