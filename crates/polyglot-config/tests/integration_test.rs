//! Integration tests for polyglot-config crate.

use polyglot_common::test_utils::{config_fixtures, create_temp_dir};
use polyglot_config::{Config, ConfigLoader};
use polyglot_i18n::TranslationArgs;
use std::fs;

#[tokio::test]
async fn test_load_full_toml() {
    let dir = create_temp_dir();
    let path = dir.path().join("polyglot.toml");
    fs::write(&path, config_fixtures::full_config_toml()).unwrap();

    let config = ConfigLoader::new(&path).load().await.unwrap();

    assert_eq!(config.locale.default_locale, "fr");
    assert_eq!(config.remote.lang_query_param, "language");
    assert_eq!(config.remote.timeout_secs, 5);
    assert!(config.logging.json_format);
    assert_eq!(config.messages["en"].lookup(["user", "name"]), Some("Name"));
}

#[tokio::test]
async fn test_load_minimal_yaml_uses_defaults() {
    let dir = create_temp_dir();
    let path = dir.path().join("polyglot.yaml");
    fs::write(&path, config_fixtures::minimal_config_yaml()).unwrap();

    let config = ConfigLoader::new(&path).load().await.unwrap();

    assert_eq!(config.remote, Config::default().remote);
    assert!(config.messages.is_empty());
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = create_temp_dir();
    let loader = ConfigLoader::new(dir.path().join("absent.json"));
    assert!(loader.load().await.is_err());
}

#[tokio::test]
async fn test_load_rejects_invalid_values() {
    let dir = create_temp_dir();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"remote": {"lang_query_param": ""}}"#).unwrap();

    let err = ConfigLoader::new(&path).load().await.unwrap_err();
    assert_eq!(err.field(), Some("remote.lang_query_param"));
}

#[test]
fn test_translator_builder_from_config() {
    let mut config = Config::default();
    config.locale.default_locale = "de".to_string();
    config.messages.insert(
        "en".to_string(),
        polyglot_i18n::MessageTree::node().with_entry("hello", "Hello"),
    );

    let translator = config.translator_builder().build().unwrap();

    assert_eq!(translator.locale(), "de");
    assert_eq!(translator.fallback_locale(), "en");
    // "de" has no catalog, so lookups go through the fallback
    assert_eq!(translator.translate("hello", &TranslationArgs::new()), "Hello");
}
