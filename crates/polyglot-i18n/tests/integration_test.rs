//! Integration tests for polyglot-i18n crate.
//!
//! These tests drive the translator through its public surface using the
//! shared catalog fixtures.

use polyglot_common::test_utils::{catalog_fixtures, init_test_logging};
use polyglot_i18n::{translation_args, I18nError, MessageTree, TranslationArgs, Translator};

fn translator() -> Translator {
    init_test_logging();
    let en = MessageTree::from_json_str(catalog_fixtures::english_catalog_json()).unwrap();
    let fr = MessageTree::from_json_str(catalog_fixtures::french_catalog_json()).unwrap();
    Translator::builder()
        .catalog("en", en)
        .catalog("fr", fr)
        .build()
        .unwrap()
}

#[test]
fn test_path_lookup_with_placeholders() {
    let t = translator();
    let args = translation_args!["name" => "Grace"];
    assert_eq!(t.translate("greeting", &args), "Hello, Grace!");
    assert_eq!(t.translate("user.profile.title", &args), "Profile of Grace");
    assert_eq!(t.translate("errors.not_found", &TranslationArgs::new()), "Not found");
}

#[test]
fn test_phrase_keys() {
    let t = translator();
    let none = TranslationArgs::new();
    assert_eq!(t.translate("Save changes", &none), "Save your changes");
    assert_eq!(t.translate("Nothing to see here", &none), "Nothing to see here");
}

#[test]
fn test_missing_single_token_key() {
    let t = translator();
    assert_eq!(t.translate("errors.timeout", &TranslationArgs::new()), "errors.timeout");
    assert_eq!(t.translate("user", &TranslationArgs::new()), "user");
}

#[test]
fn test_translate_is_idempotent() {
    let t = translator();
    let none = TranslationArgs::new();
    assert_eq!(t.translate("greeting", &none), t.translate("greeting", &none));
    assert_eq!(t.translate("greeting", &none), "Hello, {name}!");
}

#[test]
fn test_exact_and_open_rules() {
    let t = translator();
    let args = TranslationArgs::with_count(5);
    assert_eq!(t.translate_countable("apples", 0, &args), "no apples");
    assert_eq!(t.translate_countable("apples", 1, &args), "one apple");
    assert_eq!(t.translate_countable("apples", 5, &args), "5 apples");
}

#[test]
fn test_implicit_rules() {
    let t = translator();
    let none = TranslationArgs::new();
    assert_eq!(t.translate_countable("fruit", 1, &none), "apple");
    assert_eq!(t.translate_countable("fruit", 0, &none), "apples");
    assert_eq!(t.translate_countable("fruit", 99, &none), "apples");
}

#[test]
fn test_interval_rules() {
    let t = translator();
    let none = TranslationArgs::new();
    assert_eq!(t.translate_countable("tiers", 3, &none), "few");
    assert_eq!(t.translate_countable("tiers", 4, &none), "many");
    assert_eq!(t.translate_countable("tiers", 1_000_000, &none), "many");
    assert_eq!(t.translate_countable("tiers", 0, &none), "[1,3] few|[4,*] many");
}

#[test]
fn test_first_match_order() {
    let t = translator();
    assert_eq!(t.translate_countable("shadowed", 1, &TranslationArgs::new()), "many");
}

#[test]
fn test_locale_switch_and_rejection() {
    let mut t = translator();
    t.set_active_locale("fr").unwrap();
    assert_eq!(t.translate_countable("fruit", 2, &TranslationArgs::new()), "pommes");

    let err = t.set_active_locale("ja").unwrap_err();
    assert!(matches!(err, I18nError::LocaleNotLoaded { .. }));
    assert_eq!(t.locale(), "fr");
}

#[test]
fn test_fallback_locale_catalog() {
    let mut t = translator();
    t.set_fallback_locale("fr");
    // The active locale "en" is loaded, so the fallback is never consulted
    assert_eq!(t.translate("user.name", &TranslationArgs::new()), "Name");
    assert_eq!(t.fallback_locale(), "fr");
}
