//! Core data types for chat relation analysis.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single public message: who said what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerMessage {
    pub nickname: String,
    pub message: String,
}

impl SpeakerMessage {
    pub fn new(nickname: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            message: message.into(),
        }
    }
}

/// One observed "source addressed target" event.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedRelation {
    pub source: String,
    pub target: String,
}

impl DirectedRelation {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Put both ends in lexicographic order so that (a, b) and (b, a)
    /// compare equal.
    pub fn unified(self) -> Self {
        if self.target < self.source {
            Self {
                source: self.target,
                target: self.source,
            }
        } else {
            self
        }
    }
}

/// Aggregated occurrence count of a relation.
///
/// Persisted as a 3-element array `[first, second, count]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    into = "(String, String, u64)",
    try_from = "(String, String, u64)"
)]
pub struct WeightedRelation {
    pub first: String,
    pub second: String,
    pub count: u64,
}

impl WeightedRelation {
    pub fn new(first: impl Into<String>, second: impl Into<String>, count: u64) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            count,
        }
    }
}

impl From<WeightedRelation> for (String, String, u64) {
    fn from(rel: WeightedRelation) -> Self {
        (rel.first, rel.second, rel.count)
    }
}

/// Rejected relation record (a count below one).
#[derive(Debug, thiserror::Error)]
#[error("relation {first} / {second} has count 0, expected at least 1")]
pub struct ZeroCountError {
    pub first: String,
    pub second: String,
}

impl TryFrom<(String, String, u64)> for WeightedRelation {
    type Error = ZeroCountError;

    fn try_from((first, second, count): (String, String, u64)) -> Result<Self, Self::Error> {
        if count == 0 {
            return Err(ZeroCountError { first, second });
        }
        Ok(Self { first, second, count })
    }
}

impl fmt::Display for WeightedRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {} / {}", self.count, self.first, self.second)
    }
}

/// Output of the parsing phase: every speaker seen and their messages in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    pub nicknames: BTreeSet<String>,
    pub messages: Vec<SpeakerMessage>,
}

impl ParsedLog {
    pub fn record(&mut self, entry: SpeakerMessage) {
        if !self.nicknames.contains(&entry.nickname) {
            self.nicknames.insert(entry.nickname.clone());
        }
        self.messages.push(entry);
    }
}

impl FromIterator<SpeakerMessage> for ParsedLog {
    fn from_iter<I: IntoIterator<Item = SpeakerMessage>>(iter: I) -> Self {
        let mut parsed = ParsedLog::default();
        for entry in iter {
            parsed.record(entry);
        }
        parsed
    }
}

/// Options controlling one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Keep relations directed instead of unifying each pair.
    pub directed: bool,
    /// Drop nicknames that take part in no relation.
    pub prune_unrelated: bool,
}

/// The unit persisted by the analyzer and consumed by the visualizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub nicknames: Vec<String>,
    pub relations: Vec<WeightedRelation>,
    pub directed: bool,
}

impl AnalysisResult {
    /// Highest relation count, if there are any relations.
    pub fn max_count(&self) -> Option<u64> {
        self.relations.iter().map(|rel| rel.count).max()
    }
}
