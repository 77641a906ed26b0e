//! Human-readable relation report for verbose output.

use super::types::AnalysisResult;

/// Format the relations of a result, one per line.
///
/// Relations are sorted case-insensitively by their first nickname and
/// followed by a summary line.
pub fn format_report(result: &AnalysisResult) -> Vec<String> {
    let connector = if result.directed { "->" } else { "<->" };

    let mut relations: Vec<_> = result.relations.iter().collect();
    relations.sort_by_cached_key(|rel| rel.first.to_lowercase());

    let mut lines: Vec<String> = Vec::with_capacity(relations.len() + 3);
    lines.push(String::new());
    for rel in relations {
        lines.push(format!(
            "{:>3}x {} {} {}",
            rel.count, rel.first, connector, rel.second
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Found {} nicknames in {} relations.",
        result.nicknames.len(),
        result.relations.len()
    ));
    lines
}

/// Print the report to stdout
pub fn print_report(result: &AnalysisResult) {
    for line in format_report(result) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::WeightedRelation;

    fn sample(directed: bool) -> AnalysisResult {
        AnalysisResult {
            nicknames: vec!["bob".into(), "Alice".into(), "carol".into()],
            relations: vec![
                WeightedRelation::new("carol", "bob", 12),
                WeightedRelation::new("bob", "Alice", 1),
                WeightedRelation::new("Alice", "carol", 100),
            ],
            directed,
        }
    }

    #[test]
    fn test_format_report_undirected() {
        let lines = format_report(&sample(false));
        assert_eq!(
            lines,
            vec![
                "",
                "100x Alice <-> carol",
                "  1x bob <-> Alice",
                " 12x carol <-> bob",
                "",
                "Found 3 nicknames in 3 relations.",
            ]
        );
    }

    #[test]
    fn test_format_report_directed() {
        let lines = format_report(&sample(true));
        assert_eq!(lines[1], "100x Alice -> carol");
    }

    #[test]
    fn test_format_report_empty() {
        let result = AnalysisResult {
            nicknames: vec!["lonely".into()],
            relations: Vec::new(),
            directed: false,
        };
        assert_eq!(
            format_report(&result),
            vec!["", "", "Found 1 nicknames in 0 relations."]
        );
    }
}
