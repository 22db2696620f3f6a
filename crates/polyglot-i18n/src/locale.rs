//! Active-locale persistence seam

use parking_lot::RwLock;

/// Locale used when nothing has been persisted yet
pub const DEFAULT_LOCALE: &str = "en";

/// External mirror of the active locale, such as a document `lang`
/// attribute or a user preference store.
pub trait LocaleAttribute: Send + Sync {
    /// Persisted locale code, if any
    fn get(&self) -> Option<String>;

    /// Persist a new locale code
    fn set(&self, locale: &str);

    /// Persisted locale code, defaulting to [`DEFAULT_LOCALE`]
    fn current(&self) -> String {
        self.get().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }
}

/// In-process locale attribute
#[derive(Debug, Default)]
pub struct MemoryLocaleAttribute {
    value: RwLock<Option<String>>,
}

impl MemoryLocaleAttribute {
    /// Create an attribute with nothing persisted
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an attribute already holding `locale`
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(Some(locale.into())),
        }
    }
}

impl LocaleAttribute for MemoryLocaleAttribute {
    fn get(&self) -> Option<String> {
        self.value.read().clone()
    }

    fn set(&self, locale: &str) {
        *self.value.write() = Some(locale.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_en() {
        let attribute = MemoryLocaleAttribute::new();
        assert_eq!(attribute.get(), None);
        assert_eq!(attribute.current(), "en");
    }

    #[test]
    fn test_set_and_get() {
        let attribute = MemoryLocaleAttribute::with_locale("fr");
        assert_eq!(attribute.current(), "fr");
        attribute.set("de");
        assert_eq!(attribute.get().as_deref(), Some("de"));
    }
}
