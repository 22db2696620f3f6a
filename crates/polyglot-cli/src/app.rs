//! Translator setup and command execution.

use crate::cli::{CatalogSpec, Cli, Command};
use crate::error::{CliError, CliResult};
use polyglot_config::Config;
use polyglot_i18n::{parse_rules, MessageTree, TranslationArgs, Translator};
use tracing::{debug, info};

/// Command line application state.
#[derive(Debug)]
pub struct App {
    translator: Translator,
}

impl App {
    /// Wrap an already configured translator.
    pub const fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Build the translator from configuration and command line overrides.
    ///
    /// Catalogs given on the command line replace configured ones for the
    /// same locale. The initial locale is fetched when a remote source is
    /// configured, then `--locale` is applied.
    pub async fn from_cli(cli: &Cli, config: &Config) -> CliResult<Self> {
        let mut builder = config.translator_builder();

        for spec in &cli.catalogs {
            builder = builder.catalog(spec.locale.clone(), read_catalog(spec).await?);
        }
        if let Some(fallback) = &cli.fallback {
            builder = builder.fallback_locale(fallback.clone());
        }

        let mut translator = builder.install().await?;
        if let Some(locale) = &cli.locale {
            translator.set_locale(locale).await?;
        }

        info!(
            "Translator ready: locale {}, fallback {}, loaded {:?}",
            translator.locale(),
            translator.fallback_locale(),
            translator.loaded_locales()
        );
        Ok(Self::new(translator))
    }

    /// The underlying translator.
    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Run a command, returning what should be printed.
    pub fn execute(&self, command: &Command) -> String {
        match command {
            Command::Translate { key, args } => {
                self.translator.translate(key, &collect_args(args))
            }
            Command::Choice { key, count, args } => {
                self.translator
                    .translate_countable(key, *count, &collect_args(args))
            }
            Command::Rules { text } => parse_rules(text)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn collect_args(args: &[(String, String)]) -> TranslationArgs {
    args.iter().map(|(name, value)| (name.as_str(), value)).collect()
}

async fn read_catalog(spec: &CatalogSpec) -> CliResult<MessageTree> {
    debug!("Reading catalog for {} from {}", spec.locale, spec.path.display());
    let contents = tokio::fs::read_to_string(&spec.path)
        .await
        .map_err(|source| CliError::CatalogFile {
            path: spec.path.display().to_string(),
            source,
        })?;
    Ok(MessageTree::from_json_str(&contents)?)
}
