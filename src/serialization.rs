//! Persistence of analysis results.
//!
//! Results are written as JSON, or as YAML when the file name ends in
//! `.yaml`/`.yml`. Without a file name, JSON goes to stdout.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::analysis::types::AnalysisResult;

/// Fields every persisted record must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["nicknames", "relations", "directed"];

/// Errors that can occur while saving or loading results
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to stdout")]
    Stdout(#[source] io::Error),

    #[error("Invalid JSON data")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML data")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Analysis data is not a record")]
    NotARecord,

    #[error("Analysis data is missing required field '{0}'")]
    MissingField(&'static str),
}

/// On-disk format of a result file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DataFormat::Yaml
            }
            _ => DataFormat::Json,
        }
    }
}

fn to_string(data: &AnalysisResult, format: DataFormat) -> Result<String, PersistenceError> {
    Ok(match format {
        DataFormat::Json => serde_json::to_string(data)?,
        DataFormat::Yaml => serde_yaml::to_string(data)?,
    })
}

/// Export data to a file, or to stdout if no file name is given.
pub fn save_data(data: &AnalysisResult, filename: Option<&Path>) -> Result<(), PersistenceError> {
    match filename {
        Some(path) => {
            let content = to_string(data, DataFormat::from_path(path))?;
            fs::write(path, content).map_err(|source| PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("Analysis data written to {}", path.display());
        }
        None => {
            let content = to_string(data, DataFormat::Json)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content).map_err(PersistenceError::Stdout)?;
        }
    }
    Ok(())
}

/// Decode a result from text, checking that all required fields are present.
pub fn parse_data(content: &str, format: DataFormat) -> Result<AnalysisResult, PersistenceError> {
    let value: serde_json::Value = match format {
        DataFormat::Json => serde_json::from_str(content)?,
        DataFormat::Yaml => serde_yaml::from_str(content)?,
    };

    let record = value.as_object().ok_or(PersistenceError::NotARecord)?;
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|key| !record.contains_key(**key)) {
        return Err(PersistenceError::MissingField(*missing));
    }

    Ok(serde_json::from_value(value)?)
}

/// Import data from a file.
pub fn load_data(filename: &Path) -> Result<AnalysisResult, PersistenceError> {
    let content = fs::read_to_string(filename).map_err(|source| PersistenceError::Io {
        path: filename.to_path_buf(),
        source,
    })?;
    let data = parse_data(&content, DataFormat::from_path(filename))?;
    log::debug!(
        "Loaded {} nicknames and {} relations from {}",
        data.nicknames.len(),
        data.relations.len(),
        filename.display()
    );
    Ok(data)
}
