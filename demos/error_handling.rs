//! Show that every bad argument is reported in one pass.

use argv_tokenizer::{FlagSpec, OptionSpec, ParserError, SpecSet};

fn main() -> Result<(), argv_tokenizer::SpecError> {
    let specs = SpecSet::new()
        .flag(FlagSpec::short('v'))
        .option(OptionSpec::short('f'))
        .build()?;

    let result = specs.tokenize(&["-x", "--unknown", "stray", "-fv", "-f"]);

    println!("{} token(s), {} error(s)", result.tokens.len(), result.errors.len());
    for err in &result.errors {
        let kind = match err {
            ParserError::UnexpectedArgument(_) => "unexpected",
            ParserError::MissingRequiredArgument(_) => "missing value",
            ParserError::InvalidArgumentValue(_) => "invalid value",
        };
        println!("  [{kind}] {err}");
    }

    // A binding layer would treat any error as fatal.
    if let Err(errors) = result.into_result() {
        println!("\nrejected:\n{errors}");
    }

    Ok(())
}
