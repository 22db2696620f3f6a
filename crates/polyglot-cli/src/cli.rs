//! Command line definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Translate catalog keys and preview choice rules.
#[derive(Debug, Parser)]
#[command(name = "polyglot", version, about)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Preload a JSON catalog for a locale.
    #[arg(long = "catalog", value_name = "LOCALE=FILE", value_parser = parse_catalog_spec)]
    pub catalogs: Vec<CatalogSpec>,

    /// Switch to this locale before translating.
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Override the fallback locale.
    #[arg(long)]
    pub fallback: Option<String>,

    /// Log filter directive, overriding the configuration.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Translate a key, substituting `{name}` placeholders.
    Translate {
        /// Path key (`user.name`) or phrase key (`"Save changes"`).
        key: String,
        /// Placeholder value as NAME=VALUE; repeatable, applied in order.
        #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_placeholder)]
        args: Vec<(String, String)>,
    },
    /// Translate a key and pick the phrase variant for a count.
    Choice {
        /// Path key or phrase key.
        key: String,
        /// Count selecting the variant.
        #[arg(allow_negative_numbers = true)]
        count: i64,
        /// Placeholder value as NAME=VALUE; repeatable, applied in order.
        #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_placeholder)]
        args: Vec<(String, String)>,
    },
    /// Show how a choice string is parsed into rules.
    Rules {
        /// Raw choice string such as `{0} none|{1} one|[2,*] many`.
        text: String,
    },
}

/// A `LOCALE=FILE` catalog argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSpec {
    /// Locale code
    pub locale: String,
    /// JSON catalog file
    pub path: PathBuf,
}

fn split_pair(raw: &str) -> Result<(&str, &str), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

fn parse_placeholder(raw: &str) -> Result<(String, String), String> {
    split_pair(raw).map(|(name, value)| (name.to_string(), value.to_string()))
}

fn parse_catalog_spec(raw: &str) -> Result<CatalogSpec, String> {
    let (locale, path) = split_pair(raw)?;
    if path.is_empty() {
        return Err(format!("missing catalog file in '{raw}'"));
    }
    Ok(CatalogSpec {
        locale: locale.to_string(),
        path: PathBuf::from(path),
    })
}
