//! Tokenize this program's own arguments against a fixed spec set.
//!
//! ```text
//! RUST_LOG=argv_tokenizer=trace cargo run --example tokenize_argv -- -vf in.txt out
//! ```

use argv_tokenizer::{FlagSpec, OptionSpec, PositionalSpec, SpecSet};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), argv_tokenizer::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let specs = SpecSet::new()
        .flag(FlagSpec::new(Some("v"), Some("verbose"))?.with_description("Print more"))
        .option(OptionSpec::new(Some("f"), Some("file"))?.with_description("Input file"))
        .positional(PositionalSpec::new(0).with_description("Destination"))
        .build()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = specs.tokenize(&args);

    for token in &result.tokens {
        println!("{token}");
    }
    for err in &result.errors {
        eprintln!("error: {err}");
    }

    Ok(())
}
