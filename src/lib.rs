//! prop-tool - translation checker for Java `.properties` files
//!
//! prop-tool parses a reference (base) properties file and its per-language
//! translations, compares their keys, runs a configurable suite of checks
//! on the values and can rewrite translations using the reference as
//! template.
//!
//! ## Module Structure
//!
//! - `checks`: check framework and the individual checks
//! - `cli`: command-line interface layer (argument parsing, output)
//! - `config`: configuration file loading and parsing
//! - `document`: document model, parser, key diff and sync
//! - `error`: library error type
//! - `report`: diagnostics produced by checks

pub mod checks;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod report;

pub use error::{Error, Result};
