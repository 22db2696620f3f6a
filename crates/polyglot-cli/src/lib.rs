//! # Polyglot CLI
//!
//! Command line front end for the Polyglot translator.
//!
//! Loads configuration and catalogs, then translates keys, resolves counted
//! variants, or shows how a choice string is parsed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
