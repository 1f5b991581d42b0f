//! Rendering tokens back to argv.

mod common;

use argv_tokenizer::{FlagSpec, OptionSpec, SpecSet, Token};
use common::{assert_render_roundtrip, flag, opt, pos, sample_set};

#[test]
fn render_prefers_declared_long_names() {
    let set = sample_set();
    let argv = set.render(&[flag("verbose"), flag("v"), opt("file", "a"), opt("f", "b")]);
    assert_eq!(argv, vec!["--verbose", "-v", "--file", "a", "-f", "b"]);
}

#[test]
fn render_positionals_and_unknown() {
    let set = sample_set();
    let argv = set.render(&[
        pos(0, "src"),
        Token::Unknown {
            name: "extra".to_string(),
            position: 3,
            value: "raw".to_string(),
        },
    ]);
    assert_eq!(argv, vec!["src", "raw"]);
}

#[test]
fn roundtrip_mixed() {
    assert_render_roundtrip(
        &sample_set(),
        &[
            flag("Optimize"),
            pos(0, "in"),
            opt("output", "--not-a-flag"),
            flag("q"),
            pos(1, "out"),
            opt("f", "x y z"),
        ],
    );
}

#[test]
fn roundtrip_from_tokenized_cluster() {
    let set = sample_set();
    let tokens = set.tokenize(&["-vqf", "file.txt", "a"]).tokens;
    let argv = set.render(&tokens);
    assert_eq!(argv, vec!["-v", "-q", "-f", "file.txt", "a"]);
    assert_render_roundtrip(&set, &tokens);
}

#[test]
fn short_flag_and_long_option_sharing_a_name() {
    let set = SpecSet::new()
        .flag(FlagSpec::short('o'))
        .option(OptionSpec::long("o").unwrap())
        .positional_slots(1)
        .build()
        .expect("-o and --o are distinct names");

    let tokens = set.tokenize(&["-o", "in"]).tokens;
    assert_eq!(tokens, vec![flag("o"), pos(0, "in")]);
    assert_eq!(set.render(&tokens), vec!["-o", "in"]);
    assert_render_roundtrip(&set, &tokens);

    let tokens = set.tokenize(&["--o", "val"]).tokens;
    assert_eq!(tokens, vec![opt("o", "val")]);
    assert_eq!(set.render(&tokens), vec!["--o", "val"]);
}

#[test]
fn short_option_and_long_flag_sharing_a_name() {
    let set = SpecSet::new()
        .option(OptionSpec::short('o'))
        .flag(FlagSpec::long("o").unwrap())
        .build()
        .expect("-o and --o are distinct names");

    let tokens = vec![flag("o"), opt("o", "x")];
    assert_eq!(set.render(&tokens), vec!["--o", "-o", "x"]);
    assert_render_roundtrip(&set, &tokens);
}
