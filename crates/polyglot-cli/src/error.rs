//! Application-wide error types using thiserror.

use polyglot_common::PolyglotError;
use polyglot_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration or logging setup error.
    #[error(transparent)]
    Config(#[from] PolyglotError),

    /// Catalog loading or locale switching error.
    #[error("Localization error: {0}")]
    I18n(#[from] I18nError),

    /// A catalog file given on the command line could not be read.
    #[error("Cannot read catalog {path}: {source}")]
    CatalogFile {
        /// File path as given
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
