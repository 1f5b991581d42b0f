//! Loading spec sets from TOML tables.

mod common;

use std::io::Write as _;

use argv_tokenizer::{Error, SpecError, SpecSet, TableError, tokenize_with_table};
use common::{flag, opt, pos};

const TABLE: &str = r#"
[[option]]
short = "f"
long = "file"
description = "Input file"
required = true

[[option]]
long = "output"

[[flag]]
short = "v"
long = "verbose"

[[positional]]
position = 0
description = "Source"

[[positional]]
position = 1
"#;

#[test]
fn load_table() {
    let set = SpecSet::from_toml_str(TABLE).expect("valid table");
    assert_eq!(set.options().len(), 2);
    assert_eq!(set.flags().len(), 1);
    assert_eq!(set.positional_specs().len(), 2);

    let file = &set.options()[0];
    assert_eq!(file.short_name(), Some('f'));
    assert_eq!(file.long_name(), Some("file"));
    assert_eq!(file.description(), "Input file");
    assert!(file.is_required());
    assert!(!set.options()[1].is_required());
}

#[test]
fn tokenize_against_table() {
    let set = SpecSet::from_toml_str(TABLE).expect("valid table");
    let result = set.tokenize(&["-vf", "a.txt", "src", "--output", "out"]);
    assert!(result.is_ok());
    assert_eq!(
        result.tokens,
        vec![
            flag("v"),
            opt("f", "a.txt"),
            pos(0, "src"),
            opt("output", "out")
        ]
    );
}

#[test]
fn invalid_short_name_in_table() {
    let err = SpecSet::from_toml_str("[[flag]]\nshort = \"vv\"\n").unwrap_err();
    assert!(matches!(
        err,
        TableError::Spec(SpecError::InvalidShortName(ref s)) if s == "vv"
    ));
}

#[test]
fn nameless_option_in_table() {
    let err = SpecSet::from_toml_str("[[option]]\ndescription = \"?\"\n").unwrap_err();
    assert!(matches!(err, TableError::Spec(SpecError::MissingName)));
}

#[test]
fn duplicate_names_in_table() {
    let err =
        SpecSet::from_toml_str("[[flag]]\nshort = \"v\"\n\n[[option]]\nshort = \"v\"\n")
            .unwrap_err();
    assert!(matches!(
        err,
        TableError::Spec(SpecError::DuplicateShortName('v'))
    ));
}

#[test]
fn unknown_key_in_table() {
    let err = SpecSet::from_toml_str("[[flag]]\nshort = \"v\"\nalias = \"x\"\n").unwrap_err();
    assert!(matches!(err, TableError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse spec table"));
}

#[test]
fn load_from_path() {
    let path = std::env::temp_dir().join(format!("argv-tokenizer-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("create temp file");
    file.write_all(TABLE.as_bytes()).expect("write temp file");
    drop(file);

    let set = SpecSet::from_path(&path);
    std::fs::remove_file(&path).expect("remove temp file");
    assert_eq!(set.expect("valid table").flags().len(), 1);
}

#[test]
fn missing_file() {
    let err = SpecSet::from_path("/nonexistent/argv-tokenizer/specs.toml").unwrap_err();
    assert!(matches!(err, TableError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/argv-tokenizer/specs.toml"));
}

#[test]
fn convenience_ok() {
    let tokens = tokenize_with_table(TABLE, &["--file", "x", "y"]).expect("tokenize");
    assert_eq!(tokens, vec![opt("file", "x"), pos(0, "y")]);
}

#[test]
fn convenience_argument_errors() {
    let err = tokenize_with_table(TABLE, &["-x", "a", "b", "c"]).unwrap_err();
    let Error::Arguments(errors) = err else {
        panic!("expected argument errors, got {err:?}");
    };
    assert_eq!(errors.0.len(), 2);
    assert_eq!(
        errors.to_string(),
        "Unknown flag '-x'.\nUnexpected positional argument 'c'."
    );
}

#[test]
fn convenience_table_error() {
    let err = tokenize_with_table("[[flag]]\n", &["-v"]).unwrap_err();
    assert!(matches!(
        err,
        Error::Table(TableError::Spec(SpecError::MissingName))
    ));
}
