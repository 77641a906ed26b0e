use std::path::PathBuf;

use chatrelater::analysis::{print_report, AnalyzeOptions};
use chatrelater::{orchestrator, serialization};
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;

/// Extract relations between chat users from log files
#[derive(Parser, Debug)]
#[command(name = "chatrelater", author, version, about, long_about = None)]
struct Args {
    /// Preserve directed relations instead of unifying them
    #[arg(short, long)]
    directed: bool,

    /// Exclude unrelated nicknames to avoid unconnected nodes to be drawn
    #[arg(short = 'n', long)]
    no_unrelated_nicknames: bool,

    /// Save the output to this file (default: write to STDOUT)
    #[arg(short, long)]
    output_filename: Option<PathBuf>,

    /// Display the resulting relations
    #[arg(short, long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Chat log files, read in the given order
    #[arg(value_name = "FILENAME", required = true)]
    filenames: Vec<PathBuf>,
}

impl Args {
    fn options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            directed: self.directed,
            prune_unrelated: self.no_unrelated_nicknames,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Logs go to stderr so that data written to stdout stays clean
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    info!("Analyzing {} log file(s)", args.filenames.len());
    let result = orchestrator::analyze(&args.filenames, &args.options())?;

    if args.verbose {
        print_report(&result);
    }

    serialization::save_data(&result, args.output_filename.as_deref())
        .wrap_err("Failed to save analysis data")?;

    Ok(())
}
