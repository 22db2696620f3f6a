//! # Polyglot Config
//!
//! Typed configuration for Polyglot.
//!
//! This crate provides the configuration schema, its defaults, a loader for
//! TOML, YAML and JSON files, and validation of locale codes and URLs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
