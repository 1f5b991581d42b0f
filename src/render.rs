//! Renders tokens back into a canonical argument vector.
//!
//! A name renders as `-n` when a spec of the token's own kind declares
//! it as a short name, and as `--name` otherwise. Option values follow
//! their option as a separate element.

use crate::builder::SpecSet;
use crate::token::Token;

impl SpecSet {
    /// Render `tokens` as argv elements.
    ///
    /// Re-tokenizing the output against the same set yields `tokens`
    /// again, provided they came from this set and no positional value
    /// starts with `-`.
    #[must_use]
    pub fn render(&self, tokens: &[Token]) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len());

        for token in tokens {
            match token {
                Token::Option { name, value } => {
                    let is_short = short_char(name)
                        .is_some_and(|c| self.options.iter().any(|o| o.matches_short(c)));
                    out.push(dashed(name, is_short));
                    out.push(value.clone());
                }
                Token::Flag { name } => {
                    let is_short = short_char(name)
                        .is_some_and(|c| self.flags.iter().any(|f| f.matches_short(c)));
                    out.push(dashed(name, is_short));
                }
                Token::Positional { value, .. } | Token::Unknown { value, .. } => {
                    out.push(value.clone());
                }
            }
        }

        out
    }
}

fn short_char(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn dashed(name: &str, is_short: bool) -> String {
    if is_short {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}
