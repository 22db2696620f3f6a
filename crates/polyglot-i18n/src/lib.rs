//! # Polyglot I18n
//!
//! Key-based message translation for Polyglot.
//!
//! This crate resolves lookup keys against per-locale message catalogs and
//! renders them in one of two ways:
//!
//! - plain interpolation of `{name}` placeholders
//! - countable pluralization, where the stored string lists `|` separated
//!   variants guarded by `{N}`, `[low, high]` and `[low, *]` markers
//!
//! Catalogs are nested JSON objects addressed by dotted path keys, while
//! multi-word keys act as their own default text.
//!
//! # Example
//!
//! ```rust
//! use polyglot_i18n::{translation_args, MessageTree, Translator};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let en = MessageTree::from_json_str(
//!     r#"{"cart": {"items": "{0} empty|{1} one item|[2,*] {count} items"}}"#,
//! )?;
//! let translator = Translator::builder().catalog("en", en).build()?;
//!
//! let text = translator.translate_countable("cart.items", 3, &translation_args!["count" => 3]);
//! assert_eq!(text, "3 items");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod choice;
pub mod error;
pub mod fetch;
pub mod interpolation;
pub mod locale;
pub mod message;
pub mod resolver;
pub mod store;
pub mod translator;

pub use args::TranslationArgs;
pub use choice::{choose, parse_rules, select, ChoiceRule, RuleMarker, UpperBound};
pub use error::{I18nError, I18nResult};
pub use fetch::{
    CatalogFetcher, CatalogRequest, HttpCatalogFetcher, DEFAULT_LANG_QUERY_PARAM, DEFAULT_TIMEOUT,
};
pub use interpolation::substitute;
pub use locale::{LocaleAttribute, MemoryLocaleAttribute, DEFAULT_LOCALE};
pub use message::MessageTree;
pub use resolver::{resolve, KeyKind, Resolution};
pub use store::CatalogStore;
pub use translator::{Translator, TranslatorBuilder};
