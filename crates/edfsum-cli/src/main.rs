//! edfsum: batch EDF duration summarizer and single-file inspector

mod inspect;
mod load;
mod plot;

use clap::{Parser, Subcommand};
use edfsum_core::{scan_directory, EdfSource, ScanConfig, ScanError};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "edfsum", about = "Summarize EDF recording durations and inspect single files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a directory tree and total the duration of every EDF recording
    Scan {
        /// Root directory to search
        root: PathBuf,

        /// File name suffix to match (case-sensitive)
        #[arg(long, default_value = ".edf")]
        extension: String,

        /// Print the report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Load one recording eagerly, print its metadata and save diagnostic plots
    Inspect {
        /// Recording to inspect
        file: PathBuf,

        /// Directory receiving the generated image files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; verbosity is controlled through RUST_LOG
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan {
            root,
            extension,
            json,
        } => run_scan(&root, extension, json),
        Command::Inspect { file, out_dir } => {
            let config = inspect::InspectConfig {
                out_dir,
                ..Default::default()
            };
            inspect::inspect(&file, &config)?;
            Ok(())
        }
    }
}

fn run_scan(root: &Path, extension: String, json: bool) -> anyhow::Result<()> {
    let config = ScanConfig {
        extension,
        ..Default::default()
    };

    let result = if json {
        // JSON mode: suppress the running text output
        scan_directory(root, &config, &EdfSource, &mut io::sink())
    } else {
        scan_directory(root, &config, &EdfSource, &mut io::stdout().lock())
    };

    match result {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(())
        }
        // An empty tree is a reportable condition, not a failure
        Err(err @ ScanError::NoFilesFound { .. }) => {
            println!("{}", err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
