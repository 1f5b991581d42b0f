use std::fmt;

/// One classified unit of the argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Option with its consumed value (`-f value`, `--file value`).
    Option { name: String, value: String },
    /// Boolean flag (`-v`, `--verbose`).
    Flag { name: String },
    /// Positional value. `position` counts positionals seen so far.
    Positional { position: usize, value: String },
    /// Reserved for extension; never produced by the tokenizer.
    Unknown {
        name: String,
        position: usize,
        value: String,
    },
}

impl Token {
    /// Name of an option, flag, or unknown token.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Option { name, .. } | Self::Flag { name } | Self::Unknown { name, .. } => {
                Some(name)
            }
            Self::Positional { .. } => None,
        }
    }

    /// Value carried by the token, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Option { value, .. }
            | Self::Positional { value, .. }
            | Self::Unknown { value, .. } => Some(value),
            Self::Flag { .. } => None,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Positional { position, .. } | Self::Unknown { position, .. } => Some(*position),
            Self::Option { .. } | Self::Flag { .. } => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option { name, value } => write!(f, "option {name}={value}"),
            Self::Flag { name } => write!(f, "flag {name}"),
            Self::Positional { position, value } => write!(f, "positional #{position}={value}"),
            Self::Unknown {
                name,
                position,
                value,
            } => write!(f, "unknown {name} #{position}={value}"),
        }
    }
}
