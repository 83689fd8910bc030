//! layjson CLI - export page-layout document models to JSON

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use layjson::{export_file, ExportOptions, JsonFormat, MemDocument};

#[derive(Parser)]
#[command(name = "layjson")]
#[command(version)]
#[command(about = "Export a page-layout document model to JSON", long_about = None)]
struct Cli {
    /// Input document-model file (JSON)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (default: input with .json extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Normalize repeated keys into arrays (standard JSON objects)
    #[arg(long)]
    strict: bool,

    /// Skip page annotations
    #[arg(long)]
    no_annotations: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{} {}", "Saved to".green(), output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> layjson::Result<PathBuf> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input));

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let options = ExportOptions::new()
        .with_format(format)
        .with_strict(cli.strict)
        .with_annotations(!cli.no_annotations);

    let mut doc = MemDocument::from_json_file(&cli.input)?;
    if doc.name.is_none() {
        doc.name = cli
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
    }

    export_file(&doc, &output, &options)?;
    Ok(output)
}

/// Swap the input extension for `.json`.
fn default_output(input: &Path) -> PathBuf {
    input.with_extension("json")
}
