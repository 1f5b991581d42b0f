use std::collections::HashSet;

use crate::spec::{FlagSpec, OptionSpec, PositionalSpec, SpecError};
use crate::tokenizer::{self, Tokenized};

/// Ordered option, flag and positional specs for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecSet {
    pub(crate) options: Vec<OptionSpec>,
    pub(crate) flags: Vec<FlagSpec>,
    pub(crate) positionals: Vec<PositionalSpec>,
}

impl SpecSet {
    /// Create an empty spec set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
            flags: Vec::new(),
            positionals: Vec::new(),
        }
    }

    /// Add an option.
    #[must_use]
    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    /// Add a flag.
    #[must_use]
    pub fn flag(mut self, spec: FlagSpec) -> Self {
        self.flags.push(spec);
        self
    }

    /// Add a positional slot.
    #[must_use]
    pub fn positional(mut self, spec: PositionalSpec) -> Self {
        self.positionals.push(spec);
        self
    }

    /// Append `count` positional slots after the highest position
    /// declared so far.
    #[must_use]
    pub fn positional_slots(mut self, count: usize) -> Self {
        let start = self
            .positionals
            .iter()
            .map(|p| p.position() + 1)
            .max()
            .unwrap_or(0);
        self.positionals
            .extend((start..start + count).map(PositionalSpec::new));
        self
    }

    /// Check that short and long names are unique across options and
    /// flags, and that positional indices are unique.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate found, in declaration order.
    pub fn build(self) -> Result<Self, SpecError> {
        self.validate()?;
        Ok(self)
    }

    pub(crate) fn validate(&self) -> Result<(), SpecError> {
        let mut shorts = HashSet::new();
        let mut longs = HashSet::new();

        let names = self
            .options
            .iter()
            .map(|o| (o.short_name(), o.long_name()))
            .chain(self.flags.iter().map(|f| (f.short_name(), f.long_name())));

        for (short, long) in names {
            if let Some(c) = short {
                if !shorts.insert(c) {
                    return Err(SpecError::DuplicateShortName(c));
                }
            }
            if let Some(l) = long {
                if !longs.insert(l) {
                    return Err(SpecError::DuplicateLongName(l.to_string()));
                }
            }
        }

        let mut positions = HashSet::new();
        for p in &self.positionals {
            if !positions.insert(p.position()) {
                return Err(SpecError::DuplicatePosition(p.position()));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    #[must_use]
    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    #[must_use]
    pub fn positional_specs(&self) -> &[PositionalSpec] {
        &self.positionals
    }

    /// Tokenize `args` against this set.
    #[must_use]
    pub fn tokenize<S: AsRef<str>>(&self, args: &[S]) -> Tokenized {
        tokenizer::tokenize(args, &self.options, &self.positionals, &self.flags)
    }
}
