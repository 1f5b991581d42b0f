use std::fmt;

/// Error raised when a spec (or a set of specs) is misconfigured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    /// Neither a short nor a long name was given.
    #[error("either a short name or a long name must be provided")]
    MissingName,
    /// Short name is not exactly one character.
    #[error("short name must be a single character, got '{0}'")]
    InvalidShortName(String),
    /// Two options/flags share a short name.
    #[error("short name '-{0}' is declared more than once")]
    DuplicateShortName(char),
    /// Two options/flags share a long name.
    #[error("long name '--{0}' is declared more than once")]
    DuplicateLongName(String),
    /// Two positionals share a position index.
    #[error("positional index {0} is declared more than once")]
    DuplicatePosition(usize),
}

/// Validated short/long name pair shared by options and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Names {
    short: Option<char>,
    long: Option<String>,
}

impl Names {
    fn new(short: Option<&str>, long: Option<&str>) -> Result<Self, SpecError> {
        let long = long.filter(|l| !l.is_empty()).map(str::to_string);

        let short = match short {
            None => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err(SpecError::InvalidShortName(s.to_string())),
                }
            }
        };

        if short.is_none() && long.is_none() {
            return Err(SpecError::MissingName);
        }

        Ok(Self { short, long })
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short, &self.long) {
            (Some(s), Some(l)) => write!(f, "-{s}, --{l}"),
            (Some(s), None) => write!(f, "-{s}"),
            (None, Some(l)) => write!(f, "--{l}"),
            (None, None) => Ok(()),
        }
    }
}

/// A value-bearing option: `-f <value>` or `--file <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    names: Names,
    description: String,
    required: bool,
}

impl OptionSpec {
    /// Create an option from optional short and long names.
    ///
    /// An empty long name counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::MissingName` when both names are absent and
    /// `SpecError::InvalidShortName` when the short name is not exactly
    /// one character.
    pub fn new(short: Option<&str>, long: Option<&str>) -> Result<Self, SpecError> {
        Ok(Self {
            names: Names::new(short, long)?,
            description: String::new(),
            required: false,
        })
    }

    /// Create an option with only a short name.
    #[must_use]
    pub const fn short(name: char) -> Self {
        Self {
            names: Names {
                short: Some(name),
                long: None,
            },
            description: String::new(),
            required: false,
        }
    }

    /// Create an option with only a long name.
    pub fn long(name: &str) -> Result<Self, SpecError> {
        Self::new(None, Some(name))
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Mark the option as required. Informational only: the tokenizer
    /// never checks it.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub const fn short_name(&self) -> Option<char> {
        self.names.short
    }

    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.names.long.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Exact match against the short name.
    #[must_use]
    pub fn matches_short(&self, c: char) -> bool {
        self.names.short == Some(c)
    }

    /// Exact, case-sensitive match against the long name.
    #[must_use]
    pub fn matches_long(&self, name: &str) -> bool {
        self.names.long.as_deref() == Some(name)
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <value>", self.names)
    }
}

/// A boolean flag: `-v` or `--verbose`. Never consumes a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    names: Names,
    description: String,
}

impl FlagSpec {
    /// Create a flag from optional short and long names.
    ///
    /// # Errors
    ///
    /// Same rules as [`OptionSpec::new`].
    pub fn new(short: Option<&str>, long: Option<&str>) -> Result<Self, SpecError> {
        Ok(Self {
            names: Names::new(short, long)?,
            description: String::new(),
        })
    }

    #[must_use]
    pub const fn short(name: char) -> Self {
        Self {
            names: Names {
                short: Some(name),
                long: None,
            },
            description: String::new(),
        }
    }

    pub fn long(name: &str) -> Result<Self, SpecError> {
        Self::new(None, Some(name))
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    #[must_use]
    pub const fn short_name(&self) -> Option<char> {
        self.names.short
    }

    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.names.long.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn matches_short(&self, c: char) -> bool {
        self.names.short == Some(c)
    }

    #[must_use]
    pub fn matches_long(&self, name: &str) -> bool {
        self.names.long.as_deref() == Some(name)
    }
}

impl fmt::Display for FlagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.names, f)
    }
}

/// A positional slot. Positions are expected to be dense from 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalSpec {
    position: usize,
    description: String,
    required: bool,
}

impl PositionalSpec {
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self {
            position,
            description: String::new(),
            required: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Informational only, see [`OptionSpec::required`].
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }
}
