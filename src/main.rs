use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use piglatin::cli::output::{self, OutputFormat};
use piglatin::{Config, Conversion};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "piglatin")]
#[command(version, about = "Convert free-form text into Pig Latin", long_about = None)]
struct Cli {
    /// Text to convert
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the text to convert from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "piglatin", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.format.map(|f| f.to_string()), cli.no_color)?;

    // Resolve the input text
    let input = match (cli.text, cli.file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        (None, None) => {
            output::print_usage(config.colored);
            return Ok(());
        }
    };

    let format: OutputFormat = config.format.parse()?;

    let conversion = Conversion::new(&input);
    output::print_conversion(&conversion, &format);

    Ok(())
}
