//! GraphViz output for analysis results.
//!
//! Nodes are nicknames and edges are relations, with an edge's stroke width
//! growing linearly with its count. Layout and image generation are left to
//! the external GraphViz programs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::analysis::types::AnalysisResult;

pub const DEFAULT_FORMAT: &str = "dot";
pub const DEFAULT_PROGRAM: &str = "dot";

/// GraphViz layout programs.
pub const ENGINES: [&str; 8] = ["dot", "neato", "twopi", "circo", "fdp", "sfdp", "patchwork", "osage"];

/// GraphViz output formats (`-T` values).
pub const FORMATS: [&str; 16] = [
    "dot", "canon", "gv", "xdot", "json", "plain", "svg", "svgz", "png", "gif", "jpg", "jpeg",
    "pdf", "ps", "eps", "bmp",
];

/// Extra stroke width given to the most frequent relation.
const MAX_WIDTH: f64 = 4.0;

/// Errors that can occur while rendering a graph
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run layout program '{program}'")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Layout program '{program}' exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
}

/// Quote a DOT identifier.
fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Stroke width for a relation count, from 1 up to `MAX_WIDTH + 1`.
pub fn edge_width(count: u64, max_count: u64) -> u32 {
    if max_count == 0 {
        return 1;
    }
    (count as f64 / max_count as f64 * MAX_WIDTH + 1.0) as u32
}

/// Create the DOT graph representation of a result.
pub fn generate_dot(data: &AnalysisResult, name: &str) -> String {
    let (kind, connector) = if data.directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut dot = String::new();
    dot.push_str(&format!("{} {} {{\n", kind, quote(name)));

    for nickname in &data.nicknames {
        dot.push_str(&format!("    {} [label={}];\n", quote(nickname), quote(nickname)));
    }

    let max_count = data.max_count().unwrap_or(0);
    let mut relations: Vec<_> = data.relations.iter().collect();
    relations.sort_by(|a, b| a.first.cmp(&b.first));

    for rel in relations {
        dot.push_str(&format!(
            "    {} {} {} [style=\"setlinewidth({})\"];\n",
            quote(&rel.first),
            connector,
            quote(&rel.second),
            edge_width(rel.count, max_count)
        ));
    }

    dot.push_str("}\n");
    dot
}

/// Write the DOT source and, for any format other than `dot`, have the
/// layout program render it. Returns the path of the final output.
pub fn write_file(
    dot: &str,
    name: &str,
    format: &str,
    program: &str,
    output_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let dot_path = output_dir.join(format!("{}.dot", name));
    fs::write(&dot_path, dot).map_err(|source| RenderError::Write {
        path: dot_path.clone(),
        source,
    })?;
    log::debug!("DOT source written to {}", dot_path.display());

    if format == DEFAULT_FORMAT {
        return Ok(dot_path);
    }

    let rendered_path = output_dir.join(format!("{}.{}", name, format));
    let status = Command::new(program)
        .arg(format!("-T{}", format))
        .arg("-o")
        .arg(&rendered_path)
        .arg(&dot_path)
        .status()
        .map_err(|source| RenderError::Launch {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(RenderError::Failed {
            program: program.to_string(),
            status,
        });
    }
    Ok(rendered_path)
}
