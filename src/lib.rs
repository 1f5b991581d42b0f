//! Spec-driven command-line argument tokenizer.
//!
//! Classifies each element of an argument vector as an option with a
//! value, a boolean flag, or a positional value, according to caller
//! supplied specs. Every malformed or unrecognized element is collected
//! as a [`ParserError`] instead of stopping at the first problem.
//!
//! # Quick start
//!
//! ```
//! use argv_tokenizer::{FlagSpec, OptionSpec, PositionalSpec, Token, tokenize};
//!
//! let options = [OptionSpec::new(Some("f"), Some("file")).unwrap()];
//! let flags = [FlagSpec::short('v')];
//! let positionals = [PositionalSpec::new(0)];
//!
//! let result = tokenize(&["-vf", "in.txt", "out"], &options, &positionals, &flags);
//! assert!(result.is_ok());
//! assert_eq!(result.tokens[0], Token::Flag { name: "v".to_string() });
//! assert_eq!(
//!     result.tokens[1],
//!     Token::Option { name: "f".to_string(), value: "in.txt".to_string() }
//! );
//! ```
//!
//! ## Declarative spec table
//!
//! ```
//! let table = r#"
//! [[flag]]
//! short = "q"
//! long = "quiet"
//! "#;
//!
//! let tokens = argv_tokenizer::tokenize_with_table(table, &["--quiet"]).unwrap();
//! assert_eq!(tokens.len(), 1);
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod builder;
pub mod render;
pub mod spec;
pub mod table;
pub mod token;
pub mod tokenizer;

pub use builder::SpecSet;
pub use spec::{FlagSpec, OptionSpec, PositionalSpec, SpecError};
pub use table::TableError;
pub use token::Token;
pub use tokenizer::{ArgumentErrors, ParserError, Tokenized, tokenize};

/// Unified error type covering spec configuration and argument errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A misconfigured spec.
    #[error("{0}")]
    Spec(#[from] SpecError),
    /// A spec table that failed to load.
    #[error("{0}")]
    Table(#[from] TableError),
    /// One or more argument errors.
    #[error("{0}")]
    Arguments(#[from] ArgumentErrors),
}

/// Load a TOML spec table and tokenize `args` against it, rejecting the
/// invocation if any argument error was found.
pub fn tokenize_with_table<S: AsRef<str>>(table: &str, args: &[S]) -> Result<Vec<Token>, Error> {
    let specs = SpecSet::from_toml_str(table)?;
    Ok(specs.tokenize(args).into_result()?)
}
