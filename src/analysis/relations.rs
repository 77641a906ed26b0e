//! Reference detection and relation aggregation.
//!
//! Only line beginnings are checked to find textual references between
//! users, assuming people use their client's nickname completion. A mention
//! anywhere else in the message is not detected.

use std::collections::BTreeMap;

use crate::nicknames::NicknameRegistry;

use super::types::{DirectedRelation, SpeakerMessage, WeightedRelation};

/// Characters removed from the end of an addressed nickname
/// (e.g. `John:`, `Jane,`, `Mary?`).
pub const TRAILING_PUNCTUATION: [char; 6] = [':', ',', '.', '?', '!', '@'];

/// Marker some clients put in front of a mention (`@John: hi`).
pub const MENTION_PREFIX: char = '@';

/// Extract the token a message addresses, without a leading mention marker
/// and without trailing punctuation.
pub fn addressed_token(message: &str) -> &str {
    let token = match message.split_once(char::is_whitespace) {
        Some((first, _)) => first,
        None => message,
    };
    token
        .trim_start_matches(MENTION_PREFIX)
        .trim_end_matches(TRAILING_PUNCTUATION)
}

/// Figure out who each message addresses, lazily and in message order.
///
/// The registry must be built from the speaker nicknames collected at parse
/// time, before any message is related. Self-references are kept.
pub fn relate_nicknames<'a, I>(
    registry: &'a NicknameRegistry,
    messages: I,
) -> impl Iterator<Item = DirectedRelation> + 'a
where
    I: IntoIterator<Item = &'a SpeakerMessage>,
    I::IntoIter: 'a,
{
    messages.into_iter().filter_map(move |entry| {
        registry
            .find(addressed_token(&entry.message))
            .map(|target| DirectedRelation::new(entry.nickname.as_str(), target))
    })
}

/// Combine equal relations into a single weighted relation each.
///
/// With `unify`, relations between the same two nicknames are merged
/// regardless of direction. All relations are consumed before any output is
/// produced; the result is sorted by (first, second).
pub fn compress_relations<I>(relations: I, unify: bool) -> Vec<WeightedRelation>
where
    I: IntoIterator<Item = DirectedRelation>,
{
    let mut counts: BTreeMap<DirectedRelation, u64> = BTreeMap::new();
    let mut total = 0usize;

    for rel in relations {
        let rel = if unify { rel.unified() } else { rel };
        *counts.entry(rel).or_insert(0) += 1;
        total += 1;
    }

    log::debug!(
        "Compressed {} relations into {} {} pairs",
        total,
        counts.len(),
        if unify { "undirected" } else { "directed" }
    );

    counts
        .into_iter()
        .map(|(rel, count)| WeightedRelation::new(rel.source, rel.target, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn rel(source: &str, target: &str) -> DirectedRelation {
        DirectedRelation::new(source, target)
    }

    fn compress_test_input() -> Vec<DirectedRelation> {
        vec![
            rel("one", "two"),
            rel("one", "three"),
            rel("two", "one"),
            rel("one", "three"),
            rel("three", "one"),
        ]
    }

    #[test]
    fn test_addressed_token() {
        assert_eq!(addressed_token("Jane, sup?"), "Jane");
        assert_eq!(addressed_token("John: I am fine"), "John");
        assert_eq!(addressed_token("John?!"), "John");
        assert_eq!(addressed_token("John@"), "John");
        assert_eq!(addressed_token("John\tsays"), "John");
        assert_eq!(addressed_token("@John: hi"), "John");
        assert_eq!(addressed_token("@@John"), "John");
        assert_eq!(addressed_token("+John: hi"), "+John");
        assert_eq!(addressed_token("(John): hi"), "(John)");
        assert_eq!(addressed_token(":,.?!"), "");
        assert_eq!(addressed_token(""), "");
    }

    #[test]
    fn test_relate_nicknames() {
        let registry = NicknameRegistry::new(["John", "Jane", "Mary"]);
        let messages = vec![
            SpeakerMessage::new("John", "heyho"),
            SpeakerMessage::new("John", "Jane, sup?"),
            SpeakerMessage::new("Jane", "John: I am fine, thanks"),
            SpeakerMessage::new("Mary", "John?"),
            SpeakerMessage::new("Mary", "John!"),
            SpeakerMessage::new("Mary", "jane: nickname recognition should be case-insensitive"),
            SpeakerMessage::new("Jane", "John seems to have disappeared..."),
            SpeakerMessage::new("Jane", "@John: o hai"),
        ];

        let result: Vec<_> = relate_nicknames(&registry, &messages).collect();
        assert_eq!(
            result,
            vec![
                rel("John", "Jane"),
                rel("Jane", "John"),
                rel("Mary", "John"),
                rel("Mary", "John"),
                rel("Mary", "Jane"),
                rel("Jane", "John"),
                rel("Jane", "John"),
            ]
        );
    }

    #[test]
    fn test_relate_nicknames_case_insensitive_and_self() {
        let registry = NicknameRegistry::new(["John", "Jane", "Mary"]);
        let messages = vec![
            SpeakerMessage::new("Mary", "jane: nickname recognition should be case-insensitive"),
            SpeakerMessage::new("John", "john, talking to myself"),
            SpeakerMessage::new("Jane", "@mary, mentions may carry a marker"),
            SpeakerMessage::new("Jane", ":John only trailing punctuation is stripped"),
            SpeakerMessage::new("Jane", "hello John"),
        ];

        let result: Vec<_> = relate_nicknames(&registry, &messages).collect();
        assert_eq!(
            result,
            vec![rel("Mary", "Jane"), rel("John", "John"), rel("Jane", "Mary")]
        );
    }

    #[test]
    fn test_compress_relations_directed() {
        let result: BTreeSet<_> = compress_relations(compress_test_input(), false)
            .into_iter()
            .collect();

        let expected: BTreeSet<_> = [
            WeightedRelation::new("one", "two", 1),
            WeightedRelation::new("one", "three", 2),
            WeightedRelation::new("two", "one", 1),
            WeightedRelation::new("three", "one", 1),
        ]
        .into();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_compress_relations_unified() {
        let result = compress_relations(compress_test_input(), true);

        assert_eq!(
            result,
            vec![
                WeightedRelation::new("one", "three", 3),
                WeightedRelation::new("one", "two", 2),
            ]
        );
        assert_eq!(result.iter().map(|r| r.count).sum::<u64>(), 5);
    }

    #[test]
    fn test_compress_relations_empty() {
        assert!(compress_relations(Vec::new(), true).is_empty());
    }
}
