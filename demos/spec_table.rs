//! Load specs from a TOML table and tokenize a sample command line.

use tracing_subscriber::EnvFilter;

const TABLE: &str = r#"
[[option]]
short = "o"
long = "output"
description = "Where to write"
required = true

[[flag]]
short = "q"
long = "quiet"

[[positional]]
description = "Input"
"#;

fn main() -> Result<(), argv_tokenizer::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let specs = argv_tokenizer::SpecSet::from_toml_str(TABLE)?;
    for option in specs.options() {
        println!("option {option}: {}", option.description());
    }

    let tokens = specs
        .tokenize(&["-q", "input.txt", "--output", "out.txt"])
        .into_result()?;
    for token in &tokens {
        println!("{token}");
    }

    let argv = specs.render(&tokens);
    println!("canonical: {}", argv.join(" "));

    Ok(())
}
