#![allow(dead_code)]

use argv_tokenizer::{FlagSpec, OptionSpec, SpecSet, Token};

/// Flags `-v/--verbose`, `-q`, `--Optimize`; options `-f/--file`,
/// `--output`; three positional slots.
pub fn sample_set() -> SpecSet {
    SpecSet::new()
        .flag(FlagSpec::new(Some("v"), Some("verbose")).expect("valid flag"))
        .flag(FlagSpec::short('q'))
        .flag(FlagSpec::long("Optimize").expect("valid flag"))
        .option(OptionSpec::new(Some("f"), Some("file")).expect("valid option"))
        .option(OptionSpec::long("output").expect("valid option"))
        .positional_slots(3)
        .build()
        .expect("no duplicate names")
}

pub fn flag(name: &str) -> Token {
    Token::Flag {
        name: name.to_string(),
    }
}

pub fn opt(name: &str, value: &str) -> Token {
    Token::Option {
        name: name.to_string(),
        value: value.to_string(),
    }
}

pub fn pos(position: usize, value: &str) -> Token {
    Token::Positional {
        position,
        value: value.to_string(),
    }
}

/// Render, re-tokenize, and assert the tokens survive unchanged.
pub fn assert_render_roundtrip(set: &SpecSet, tokens: &[Token]) {
    let argv = set.render(tokens);
    let result = set.tokenize(&argv);
    assert!(
        result.errors.is_empty(),
        "render produced errors: {:?}\n--- argv ---\n{argv:?}",
        result.errors
    );
    assert_eq!(result.tokens, tokens, "round-trip mismatch for {argv:?}");
}
