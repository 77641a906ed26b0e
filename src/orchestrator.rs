//! Analysis orchestrator.
//!
//! This module coordinates one analysis run, managing the flow from log
//! parsing through reference detection to the aggregated result.

use std::collections::BTreeSet;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use crate::analysis::log_parser::{parse_logfile, parse_logfiles};
use crate::analysis::relations::{compress_relations, relate_nicknames};
use crate::analysis::types::{AnalysisResult, AnalyzeOptions, ParsedLog, WeightedRelation};
use crate::nicknames::NicknameRegistry;

/// Parse log files and return nicknames and their determined relations.
///
/// Any file that cannot be opened, read or decoded aborts the whole run.
pub fn analyze<I, P>(paths: I, options: &AnalyzeOptions) -> Result<AnalysisResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let parsed = parse_logfiles(paths).wrap_err("Failed to read chat logs")?;
    Ok(analyze_parsed(parsed, options))
}

/// Same as [`analyze`], for lines already in memory.
pub fn analyze_lines<I, S>(lines: I, options: &AnalyzeOptions) -> AnalysisResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    analyze_parsed(parse_logfile(lines), options)
}

/// Relate and aggregate an already parsed log.
pub fn analyze_parsed(parsed: ParsedLog, options: &AnalyzeOptions) -> AnalysisResult {
    let ParsedLog { nicknames, messages } = parsed;

    // The registry is frozen from the speakers before any reference is resolved.
    let registry = NicknameRegistry::new(&nicknames);
    if registry.is_empty() {
        log::warn!("No chat messages found in the input");
    }
    log::debug!("Resolving references against {} nicknames", registry.len());
    let relations = relate_nicknames(&registry, &messages);
    let relations = compress_relations(relations, !options.directed);

    let nicknames = if options.prune_unrelated {
        let related = related_nicknames(&relations);
        log::debug!(
            "Dropped {} unrelated nicknames",
            nicknames.len().saturating_sub(related.len())
        );
        related
    } else {
        nicknames
    };

    log::info!(
        "Found {} nicknames in {} relations",
        nicknames.len(),
        relations.len()
    );

    AnalysisResult {
        nicknames: nicknames.into_iter().collect(),
        relations,
        directed: options.directed,
    }
}

/// Nicknames appearing at either end of some relation.
fn related_nicknames(relations: &[WeightedRelation]) -> BTreeSet<String> {
    relations
        .iter()
        .flat_map(|rel| [rel.first.clone(), rel.second.clone()])
        .collect()
}
