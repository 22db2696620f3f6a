//! Placeholder arguments for translations

use indexmap::IndexMap;
use std::fmt::Display;

/// Named placeholder values, kept in insertion order.
///
/// Order matters only when one substituted value itself contains another
/// placeholder marker: values are applied first to last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationArgs {
    params: IndexMap<String, String>,
}

impl TranslationArgs {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create arguments carrying a `count` placeholder
    pub fn with_count(count: i64) -> Self {
        Self::new().add_param("count", count)
    }

    /// Add a parameter, rendered through its `Display` impl
    #[must_use]
    pub fn add_param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Display,
    {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a parameter in place.
    ///
    /// Overwriting keeps the parameter's original position.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Display,
    {
        self.params.insert(key.into(), value.to_string())
    }

    /// Value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameter is set
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for TranslationArgs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut args = Self::new();
        args.extend(iter);
        args
    }
}

impl<K: Into<String>, V: Display> Extend<(K, V)> for TranslationArgs {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Macro to create TranslationArgs more easily
#[macro_export]
macro_rules! translation_args {
    () => {
        $crate::TranslationArgs::new()
    };
    (count: $count:expr) => {
        $crate::TranslationArgs::with_count($count)
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::TranslationArgs::new();
        $(
            args.insert($key, $value);
        )+
        args
    }};
}
