//! Recursive message trees
//!
//! A catalog is a JSON object whose values are either strings or nested
//! objects. Dotted path keys such as `errors.not_found` walk the nesting.

use crate::error::I18nResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A message catalog node: a translated string or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageTree {
    /// Leaf translation
    Text(String),
    /// Nested mapping, keyed by path segment
    Node(IndexMap<String, MessageTree>),
}

impl Default for MessageTree {
    fn default() -> Self {
        Self::Node(IndexMap::new())
    }
}

impl MessageTree {
    /// Create an empty mapping node
    pub fn node() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON document
    pub fn from_json_str(json: &str) -> I18nResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a child entry, turning a leaf into a node if needed
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Self>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a child entry, returning the previous value under that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Self>) -> Option<Self> {
        if let Self::Text(_) = self {
            *self = Self::node();
        }
        match self {
            Self::Node(children) => children.insert(key.into(), value.into()),
            Self::Text(_) => None,
        }
    }

    /// Direct child of a node; `None` for leaves
    pub fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Node(children) => children.get(key),
            Self::Text(_) => None,
        }
    }

    /// Leaf text; `None` for nodes
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    /// Walk the tree along `segments`, returning the text at the end.
    ///
    /// Fails when a segment is missing, when a leaf is reached before the
    /// last segment, or when the walk ends on a node.
    pub fn lookup<'a, I>(&self, segments: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments
            .into_iter()
            .try_fold(self, |node, segment| node.child(segment))
            .and_then(Self::as_text)
    }

    /// Number of leaf strings in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Node(children) => children.values().map(Self::leaf_count).sum(),
        }
    }
}

impl From<&str> for MessageTree {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MessageTree {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<K: Into<String>> FromIterator<(K, MessageTree)> for MessageTree {
    fn from_iter<T: IntoIterator<Item = (K, MessageTree)>>(iter: T) -> Self {
        Self::Node(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MessageTree {
        MessageTree::node()
            .with_entry("title", "Title")
            .with_entry(
                "user",
                MessageTree::node()
                    .with_entry("name", "Name")
                    .with_entry("profile", MessageTree::node().with_entry("bio", "About")),
            )
    }

    #[test]
    fn test_lookup_nested_path() {
        let tree = sample();
        assert_eq!(tree.lookup("user.profile.bio".split('.')), Some("About"));
        assert_eq!(tree.lookup(["title"]), Some("Title"));
    }

    #[test]
    fn test_lookup_stops_on_node() {
        let tree = sample();
        assert_eq!(tree.lookup(["user"]), None);
        assert_eq!(tree.lookup("user.profile".split('.')), None);
    }

    #[test]
    fn test_lookup_through_leaf_fails() {
        let tree = sample();
        assert_eq!(tree.lookup("title.more".split('.')), None);
        assert_eq!(tree.lookup("missing.path".split('.')), None);
    }

    #[test]
    fn test_from_json() {
        let tree = MessageTree::from_json_str(r#"{"a": {"b": "c"}, "d": "e"}"#).unwrap();
        assert_eq!(tree.lookup(["a", "b"]), Some("c"));
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn test_from_json_rejects_numbers() {
        assert!(MessageTree::from_json_str(r#"{"a": 1}"#).is_err());
        assert!(MessageTree::from_json_str(r#"{"a": ["x"]}"#).is_err());
    }

    #[test]
    fn test_insert_replaces_leaf_root() {
        let mut tree = MessageTree::from("plain");
        tree.insert("k", "v");
        assert_eq!(tree.lookup(["k"]), Some("v"));
    }
}
