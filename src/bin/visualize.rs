//! Visualize relations between chat partners.
//!
//! Reads analysis data written by `chatrelater` and creates a GraphViz
//! graph from it. Formats other than `dot` require GraphViz to be installed.

use std::path::PathBuf;

use chatrelater::{serialization, visualize};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};

#[derive(Parser)]
#[command(name = "chatrelater-visualize")]
#[command(about = "Visualize relations between chat partners")]
#[command(version)]
struct Cli {
    /// Analysis data file (JSON or YAML)
    #[arg(value_name = "FILENAME")]
    filename: PathBuf,

    /// Output format, passed to the layout program as -T<FORMAT>
    #[arg(
        short,
        long,
        default_value = visualize::DEFAULT_FORMAT,
        value_parser = PossibleValuesParser::new(visualize::FORMATS)
    )]
    format: String,

    /// GraphViz layout program
    #[arg(
        short,
        long,
        default_value = visualize::DEFAULT_PROGRAM,
        value_parser = PossibleValuesParser::new(visualize::ENGINES)
    )]
    program: String,

    /// Graph name, also used as output file name (default: data file stem)
    #[arg(long)]
    name: Option<String>,

    /// Directory to write output to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn graph_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }
        self.filename
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .ok_or_else(|| eyre!("Cannot derive a graph name from {}", self.filename.display()))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let data = serialization::load_data(&cli.filename)
        .wrap_err_with(|| format!("Failed to load analysis data from {}", cli.filename.display()))?;
    log::info!(
        "Loaded {} nicknames and {} relations",
        data.nicknames.len(),
        data.relations.len()
    );

    let name = cli.graph_name()?;
    let dot = visualize::generate_dot(&data, &name);
    let rendered = visualize::write_file(
        &dot,
        &name,
        &cli.format,
        &cli.program,
        &cli.output_dir,
    )?;

    println!(
        "Wrote {} output to '{}' using {}.",
        cli.format,
        rendered.display(),
        cli.program
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["chatrelater-visualize", "data/relations.json"]);

        assert_eq!(cli.format, "dot");
        assert_eq!(cli.program, "dot");
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.graph_name().unwrap(), "relations");
    }

    #[test]
    fn test_cli_explicit_name() {
        let cli = Cli::parse_from([
            "chatrelater-visualize",
            "-f", "png",
            "-p", "neato",
            "--name", "channel",
            "relations.yaml",
        ]);

        assert_eq!(cli.format, "png");
        assert_eq!(cli.program, "neato");
        assert_eq!(cli.graph_name().unwrap(), "channel");
    }

    #[test]
    fn test_cli_rejects_unknown_format_and_program() {
        let bad_program =
            Cli::try_parse_from(["chatrelater-visualize", "-p", "neatoo", "relations.json"]);
        assert!(bad_program.is_err());

        let bad_format = Cli::try_parse_from(["chatrelater-visualize", "-f", "pgn", "relations.json"]);
        assert!(bad_format.is_err());

        let sfdp = Cli::try_parse_from(["chatrelater-visualize", "-p", "sfdp", "relations.json"]);
        assert_eq!(sfdp.unwrap().program, "sfdp");
    }
}
