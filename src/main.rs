use anyhow::Result;
use clap::Parser;

use tagnorm::normalizer;

/// tagnorm - normalize a free-form tag list into a JSON array
#[derive(Parser)]
#[command(name = "tagnorm")]
#[command(about = "Normalizes a free-form tag list into a deduplicated JSON array of strings")]
#[command(version)]
struct Cli {
    /// Raw tag list to normalize; read from the TAGS environment
    /// variable when omitted
    #[arg(value_name = "RAW")]
    raw: Option<String>,
}

fn main() {
    // A .env file alongside the pipeline step may supply TAGS
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error normalizing tags: {e}");
        std::process::exit(1);
    }
}

/// Normalizes the input and prints the JSON array literal on stdout.
fn run(cli: &Cli) -> Result<()> {
    let json = match cli.raw.as_deref() {
        Some(raw) => normalizer::normalize_to_json(Some(raw))?,
        None => normalizer::normalize_env()?,
    };

    println!("{json}");
    Ok(())
}
