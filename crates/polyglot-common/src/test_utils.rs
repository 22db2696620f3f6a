//! Test utilities and shared test helpers for Polyglot.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Message catalog fixtures as raw JSON documents.
pub mod catalog_fixtures {
    /// English catalog with nested paths, phrase keys and choice strings.
    pub fn english_catalog_json() -> &'static str {
        r#"{
  "greeting": "Hello, {name}!",
  "user": {
    "name": "Name",
    "profile": {
      "title": "Profile of {name}"
    }
  },
  "errors": {
    "not_found": "Not found"
  },
  "Save changes": "Save your changes",
  "apples": "{0} no apples|{1} one apple|[2,*] {count} apples",
  "fruit": "apple|apples",
  "tiers": "[1,3] few|[4,*] many",
  "shadowed": "[1,*] many|{1} one"
}"#
    }

    /// French catalog covering a subset of the English keys.
    pub fn french_catalog_json() -> &'static str {
        r#"{
  "greeting": "Bonjour, {name} !",
  "user": {
    "name": "Nom"
  },
  "fruit": "pomme|pommes"
}"#
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Create a minimal valid test configuration as YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
locale:
  default_locale: "en"
  fallback_locale: "en"
"#
    }

    /// Create a full test configuration as TOML string.
    pub fn full_config_toml() -> &'static str {
        concat!(
            "[locale]\n",
            "default_locale = \"fr\"\n",
            "fallback_locale = \"en\"\n",
            "\n",
            "[remote]\n",
            "translation_url = \"https://example.com/api/translations?format=json\"\n",
            "lang_query_param = \"language\"\n",
            "timeout_secs = 5\n",
            "\n",
            "[logging]\n",
            "level = \"debug\"\n",
            "json_format = true\n",
            "\n",
            "[messages.en]\n",
            "greeting = \"Hello, {name}!\"\n",
            "\n",
            "[messages.en.user]\n",
            "name = \"Name\"\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for a single catalog path segment.
    pub fn segment_strategy() -> impl Strategy<Value = String> {
        r"[a-z][a-z0-9_]{0,11}".prop_map(|s| s)
    }

    /// Strategy for dotted path keys such as `user.profile.title`.
    pub fn path_key_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(segment_strategy(), 1..4).prop_map(|parts| parts.join("."))
    }

    /// Strategy for multi-word phrase keys.
    pub fn phrase_key_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(r"[A-Za-z]{1,8}", 2..6).prop_map(|words| words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_catalog_fixtures_are_json() {
        let en: serde_json::Value =
            serde_json::from_str(catalog_fixtures::english_catalog_json()).unwrap();
        let fr: serde_json::Value =
            serde_json::from_str(catalog_fixtures::french_catalog_json()).unwrap();
        assert!(en.get("user").is_some());
        assert!(fr.get("fruit").is_some());
    }

    #[cfg(feature = "proptest")]
    mod property_tests {
        use super::super::property_testing;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_property_path_key_is_single_token(
                key in property_testing::path_key_strategy()
            ) {
                prop_assert_eq!(key.split_whitespace().count(), 1);
            }

            #[test]
            fn test_property_phrase_key_has_words(key in property_testing::phrase_key_strategy()) {
                prop_assert!(key.split_whitespace().count() > 1);
            }
        }
    }
}
