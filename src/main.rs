//! neon37-presets - Writes the Neon-37 factory preset bank to disk.
//!
//! Generates presets 049-128 as XML files, one folder per category.
//!
//! # Usage
//!
//! ```bash
//! cargo run                        # Write into ./presets
//! cargo run -- --output /tmp/bank  # Write into a custom directory
//! cargo run -- --json              # Print a JSON report instead of lines
//! ```

use anyhow::{Context, Result};
use neon37_presets::{generate_with, GenerationReport, DEFAULT_BASE_PATH};
use std::path::PathBuf;

/// Command-line options for the generator.
struct CliOptions {
    /// Root directory for the category folders.
    output: PathBuf,
    /// Print the run report as JSON.
    json: bool,
}

impl CliOptions {
    /// Parses command-line arguments.
    ///
    /// Supports:
    /// - `--output <dir>` or `-o <dir>`: Write presets under a custom directory
    /// - `--json`: Print a JSON report on stdout
    /// - `--help` or `-h`: Print help and exit
    fn parse() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut output = PathBuf::from(DEFAULT_BASE_PATH);
        let mut json = false;
        let mut i = 1;

        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    if i >= args.len() {
                        eprintln!("Error: --output requires a path argument");
                        std::process::exit(1);
                    }
                    output = PathBuf::from(&args[i]);
                }
                "--json" => json = true,
                "--help" | "-h" => {
                    eprintln!("neon37-presets - Neon-37 factory preset generator");
                    eprintln!();
                    eprintln!(
                        "Usage: {} [OPTIONS]",
                        args.first()
                            .map(String::as_str)
                            .unwrap_or("neon37-presets")
                    );
                    eprintln!();
                    eprintln!("Options:");
                    eprintln!(
                        "  -o, --output DIR  Write presets under DIR (default: {})",
                        DEFAULT_BASE_PATH
                    );
                    eprintln!("      --json        Print a JSON report instead of progress lines");
                    eprintln!("  -h, --help        Print this help message");
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown option: {}", other);
                    eprintln!("Use --help for usage information");
                    std::process::exit(1);
                }
            }
            i += 1;
        }

        Ok(Self { output, json })
    }
}

/// Prints the closing totals in human-readable form.
fn print_summary(report: &GenerationReport) {
    println!();
    println!("Total presets created: {}", report.total_created);
    println!("Total presets in collection: {}", report.collection_total);
}

/// Main entry point.
fn main() -> Result<()> {
    let cli = CliOptions::parse()?;

    // Logs go to stderr so stdout stays clean for the report
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Writing preset bank to {:?}", cli.output);

    let quiet = cli.json;
    let report = generate_with(&cli.output, |path| {
        if !quiet {
            println!("Created: {}", path.display());
        }
    })
    .with_context(|| format!("Failed to generate presets in {}", cli.output.display()))?;

    if cli.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize run report")?;
        println!("{}", json);
    } else {
        print_summary(&report);
    }

    Ok(())
}
