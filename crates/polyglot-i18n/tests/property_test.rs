//! Property tests for key resolution and variant selection.

use polyglot_common::test_utils::property_testing::{path_key_strategy, phrase_key_strategy};
use polyglot_i18n::{choose, parse_rules, MessageTree, TranslationArgs, Translator, UpperBound};
use proptest::prelude::*;

fn translator_with(locale: &str, key: &str, value: &str) -> Translator {
    let mut segments: Vec<&str> = key.split('.').collect();
    let last = segments.pop().unwrap_or_default();
    let tree = segments.into_iter().rev().fold(
        MessageTree::node().with_entry(last, value),
        |child, segment| MessageTree::node().with_entry(segment, child),
    );
    Translator::builder().catalog(locale, tree).build().unwrap()
}

proptest! {
    #[test]
    fn test_present_path_key_resolves(key in path_key_strategy(), value in "[A-Za-z ]{1,20}") {
        let t = translator_with("en", &key, &value);
        prop_assert_eq!(t.translate(&key, &TranslationArgs::new()), value);
    }

    #[test]
    fn test_absent_phrase_key_is_identity(key in phrase_key_strategy()) {
        let t = translator_with("en", "some.key", "value");
        prop_assert_eq!(t.translate(&key, &TranslationArgs::new()), key);
    }

    #[test]
    fn test_absent_path_key_is_identity(key in path_key_strategy()) {
        let t = Translator::builder().build().unwrap();
        prop_assert_eq!(t.translate(&key, &TranslationArgs::new()), key);
    }

    #[test]
    fn test_last_implicit_rule_is_open(
        words in prop::collection::vec("[a-z]{1,6}", 1..6),
        count in 1_i64..10_000,
    ) {
        let text = words.join("|");
        let rules = parse_rules(&text);
        prop_assert_eq!(rules.last().map(|r| r.high()), Some(UpperBound::Unbounded));
        let expected_index = usize::try_from(count).unwrap().min(words.len()) - 1;
        prop_assert_eq!(choose(&text, count), words[expected_index].clone());
    }

    #[test]
    fn test_zero_picks_last_of_several_implicit_rules(
        words in prop::collection::vec("[a-z]{1,6}", 2..6),
    ) {
        let text = words.join("|");
        prop_assert_eq!(choose(&text, 0), words[words.len() - 1].clone());
        prop_assert_eq!(choose(&text, -1), text);
    }

    #[test]
    fn test_exact_marker_selects_its_count(n in 0_i64..1_000, word in "[a-z]{1,8}") {
        let text = format!("{{{n}}} {word}|[0,*] other");
        prop_assert_eq!(choose(&text, n), word);
    }
}
