//! Nickname normalization and case-insensitive lookup.

use std::collections::HashMap;

/// Status symbols that may precede a nickname in a log line.
///
/// - `@` ("op")
/// - `%` ("halfop")
/// - `+` ("voice")
pub const STATUS_SYMBOLS: [char; 3] = ['@', '%', '+'];

/// Remove a potential status symbol in front of a nickname.
///
/// Only a single leading symbol is removed.
pub fn clean_nickname(nickname: &str) -> &str {
    nickname
        .strip_prefix(|c: char| STATUS_SYMBOLS.contains(&c))
        .unwrap_or(nickname)
}

/// Fold a nickname into its case-insensitive lookup key.
fn remove_case(nickname: &str) -> String {
    nickname.to_lowercase()
}

/// Case-insensitive index over a frozen set of nicknames.
///
/// If two nicknames fold to the same key, the first one yielded by the
/// source set is kept.
#[derive(Debug, Clone, Default)]
pub struct NicknameRegistry {
    index: HashMap<String, String>,
}

impl NicknameRegistry {
    pub fn new<I, S>(nicknames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = HashMap::new();
        for nickname in nicknames {
            let nickname = nickname.as_ref();
            index
                .entry(remove_case(nickname))
                .or_insert_with(|| nickname.to_string());
        }
        Self { index }
    }

    /// Match the token case-insensitively and return the original spelling.
    pub fn find(&self, nickname: &str) -> Option<&str> {
        if nickname.is_empty() {
            return None;
        }
        self.index.get(&remove_case(nickname)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
