//! promptfile - concatenate the text files of a directory into one prompt.
//!
//! Usage:
//!   promptfile [DIRECTORY]             Write every collected file to prompt.txt
//!   promptfile [DIRECTORY] --stdout    Print the collected files instead
//!   promptfile --help                  Show help

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use promptfile_collect::{CollectConfig, Collector};
use promptfile_core::{DEFAULT_OUTPUT_FILE, OutputTarget};

#[derive(Parser, Debug)]
#[command(
    name = "promptfile",
    version,
    about = "List and print non-ignored files in a directory",
    long_about = "promptfile walks a directory, skips tests, build output, caches, \
                  lockfiles and hidden entries, and writes every remaining text file \
                  under a `File: <path>` header.\n\n\
                  Set RUST_LOG=debug to see which names were skipped."
)]
struct Cli {
    /// Path to the directory (relative or absolute)
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Write output to prompt.txt in the current directory (default)
    #[arg(short = 'F', long, conflicts_with = "stdout")]
    file: bool,

    /// Print output to the console instead of writing prompt.txt
    #[arg(short = 'S', long)]
    stdout: bool,
}

impl Cli {
    fn output(&self) -> OutputTarget {
        if self.stdout && !self.file {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE))
        }
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    setup_tracing()?;

    let cli = Cli::parse();
    let config = CollectConfig::new(&cli.directory).with_output(cli.output());
    let collector = Collector::new(config).context("Invalid ignore patterns")?;

    match collector.run() {
        Ok(summary) => {
            if summary.has_warnings() {
                eprintln!(
                    "{} director{} could not be read and were skipped",
                    summary.warnings.len(),
                    if summary.warnings.len() == 1 { "y" } else { "ies" }
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_invalid_root() => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("Collection failed"),
    }
}

/// Log to stderr so stdout stays reserved for collected output.
fn setup_tracing() -> Result<()> {
    use tracing_subscriber::fmt;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .try_init()?;

    Ok(())
}
