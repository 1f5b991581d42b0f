use std::fmt;

use tracing::{debug, trace};

use crate::spec::{FlagSpec, OptionSpec, PositionalSpec};
use crate::token::Token;

/// Error found while scanning the argument vector.
///
/// `Display` yields the bare message, e.g. `Unknown flag '-x'.`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    /// Unknown name, short option inside a cluster, or a positional
    /// beyond the declared count.
    #[error("{0}")]
    UnexpectedArgument(String),
    /// A recognized option with no value after it.
    #[error("{0}")]
    MissingRequiredArgument(String),
    /// Produced by value-conversion layers, never by the tokenizer.
    #[error("{0}")]
    InvalidArgumentValue(String),
}

impl ParserError {
    /// Build an `InvalidArgumentValue` error.
    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidArgumentValue(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::UnexpectedArgument(m)
            | Self::MissingRequiredArgument(m)
            | Self::InvalidArgumentValue(m) => m,
        }
    }

    fn unknown_long(name: &str) -> Self {
        Self::UnexpectedArgument(format!("Unknown argument '--{name}'."))
    }

    fn unknown_short(c: char) -> Self {
        Self::UnexpectedArgument(format!("Unknown flag '-{c}'."))
    }

    fn misplaced_short(c: char) -> Self {
        Self::UnexpectedArgument(format!("Unexpected flag '-{c}'."))
    }

    fn extra_positional(value: &str) -> Self {
        Self::UnexpectedArgument(format!("Unexpected positional argument '{value}'."))
    }

    fn missing_value(prefix: &str, name: &str) -> Self {
        Self::MissingRequiredArgument(format!("Option '{prefix}{name}' requires a value."))
    }
}

/// Every error from one tokenize call, displayed one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentErrors(pub Vec<ParserError>);

impl fmt::Display for ArgumentErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ArgumentErrors {}

/// Tokens and errors from one tokenize call, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub errors: Vec<ParserError>,
}

impl Tokenized {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<ParserError>) {
        (self.tokens, self.errors)
    }

    /// Reject the whole invocation if any error was collected.
    pub fn into_result(self) -> Result<Vec<Token>, ArgumentErrors> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(ArgumentErrors(self.errors))
        }
    }
}

/// Tokenize an argument vector against option, positional and flag specs.
///
/// Never fails: every malformed or unrecognized element is recorded in
/// [`Tokenized::errors`] and the scan continues to the end of `args`.
///
/// When several specs share a name the first one in declaration order
/// wins. Use [`SpecSet`](crate::SpecSet) to reject duplicates up front.
/// `required` metadata is not checked here.
#[must_use]
pub fn tokenize<S: AsRef<str>>(
    args: &[S],
    options: &[OptionSpec],
    positionals: &[PositionalSpec],
    flags: &[FlagSpec],
) -> Tokenized {
    Tokenizer::new(args, options, positionals, flags).tokenize()
}

struct Tokenizer<'a, S> {
    args: &'a [S],
    options: &'a [OptionSpec],
    positionals: &'a [PositionalSpec],
    flags: &'a [FlagSpec],
    positional_count: usize,
    tokens: Vec<Token>,
    errors: Vec<ParserError>,
}

impl<'a, S: AsRef<str>> Tokenizer<'a, S> {
    const fn new(
        args: &'a [S],
        options: &'a [OptionSpec],
        positionals: &'a [PositionalSpec],
        flags: &'a [FlagSpec],
    ) -> Self {
        Self {
            args,
            options,
            positionals,
            flags,
            positional_count: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Tokenized {
        let args = self.args;
        let mut cursor = 0;

        while cursor < args.len() {
            let arg = args[cursor].as_ref();

            let consumed = if let Some(name) = arg.strip_prefix("--") {
                self.scan_long(cursor, name)
            } else if let Some(cluster) = arg.strip_prefix('-') {
                self.scan_short(cursor, cluster)
            } else {
                self.scan_positional(arg)
            };

            trace!(cursor, arg, consumed, "scanned argument");
            cursor += consumed;
        }

        debug!(
            args = args.len(),
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "tokenized argument vector"
        );

        Tokenized {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Element following `cursor`, consumed as an option value.
    fn value_after(&self, cursor: usize) -> Option<&'a str> {
        let args: &'a [S] = self.args;
        args.get(cursor + 1).map(AsRef::as_ref)
    }

    /// `--name`. Returns how many elements were consumed (1 or 2).
    fn scan_long(&mut self, cursor: usize, name: &str) -> usize {
        if self.options.iter().any(|o| o.matches_long(name)) {
            if let Some(value) = self.value_after(cursor) {
                self.tokens.push(Token::Option {
                    name: name.to_string(),
                    value: value.to_string(),
                });
                return 2;
            }
            self.errors.push(ParserError::missing_value("--", name));
            return 1;
        }

        if self.flags.iter().any(|f| f.matches_long(name)) {
            self.tokens.push(Token::Flag {
                name: name.to_string(),
            });
        } else {
            self.errors.push(ParserError::unknown_long(name));
        }
        1
    }

    /// `-abc`. Only the final character of a cluster may be an option,
    /// since only it can take the following element as its value.
    fn scan_short(&mut self, cursor: usize, cluster: &str) -> usize {
        let mut consumed = 1;
        let mut chars = cluster.chars().peekable();

        while let Some(c) = chars.next() {
            let is_last = chars.peek().is_none();

            if self.flags.iter().any(|f| f.matches_short(c)) {
                self.tokens.push(Token::Flag {
                    name: c.to_string(),
                });
            } else if !is_last {
                self.errors.push(ParserError::misplaced_short(c));
            } else if self.options.iter().any(|o| o.matches_short(c)) {
                if let Some(value) = self.value_after(cursor) {
                    self.tokens.push(Token::Option {
                        name: c.to_string(),
                        value: value.to_string(),
                    });
                    consumed = 2;
                } else {
                    self.errors
                        .push(ParserError::missing_value("-", &c.to_string()));
                }
            } else {
                self.errors.push(ParserError::unknown_short(c));
            }
        }

        consumed
    }

    fn scan_positional(&mut self, arg: &str) -> usize {
        if self.positional_count < self.positionals.len() {
            self.tokens.push(Token::Positional {
                position: self.positional_count,
                value: arg.to_string(),
            });
            self.positional_count += 1;
        } else {
            self.errors.push(ParserError::extra_positional(arg));
        }
        1
    }
}
