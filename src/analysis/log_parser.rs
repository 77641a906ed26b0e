//! Log parsing for chat transcripts.
//!
//! For a line to be recognized, it has to start with a nickname in angle
//! brackets, followed by a space (e.g. `<SomeUser23> hey what's up?`).
//! Everything else (actions, joins, parts, modes, notices) is skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::nicknames::clean_nickname;

use super::types::{ParsedLog, SpeakerMessage};

/// Separator between the bracketed nickname and the message.
const NICKNAME_SEPARATOR: &str = "> ";

/// Errors raised while reading log input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to open log file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read log file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Log file {} is not valid UTF-8 at line {line}", path.display())]
    Decode { path: PathBuf, line: usize },
}

struct OpenLog {
    path: PathBuf,
    reader: BufReader<File>,
    line_number: usize,
}

/// Lines from multiple files, concatenated in the given order.
///
/// Files are opened lazily. The first error ends the sequence.
pub struct LogLines {
    pending: std::vec::IntoIter<PathBuf>,
    current: Option<OpenLog>,
    buf: Vec<u8>,
    failed: bool,
}

impl LogLines {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let pending: Vec<PathBuf> = paths
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        Self {
            pending: pending.into_iter(),
            current: None,
            buf: Vec::with_capacity(256),
            failed: false,
        }
    }

    fn open_next(&mut self) -> Option<Result<(), InputError>> {
        let path = self.pending.next()?;
        log::debug!("Reading log file {}", path.display());
        match File::open(&path) {
            Ok(file) => {
                self.current = Some(OpenLog {
                    path,
                    reader: BufReader::with_capacity(64 * 1024, file),
                    line_number: 0,
                });
                Some(Ok(()))
            }
            Err(source) => Some(Err(InputError::Open { path, source })),
        }
    }
}

impl Iterator for LogLines {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if self.current.is_none() {
                if let Err(e) = self.open_next()? {
                    self.failed = true;
                    return Some(Err(e));
                }
                continue;
            }
            let open = self.current.as_mut()?;

            self.buf.clear();
            match open.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.current = None;
                }
                Ok(_) => {
                    open.line_number += 1;
                    return match String::from_utf8(std::mem::take(&mut self.buf)) {
                        Ok(line) => Some(Ok(line)),
                        Err(_) => {
                            self.failed = true;
                            Some(Err(InputError::Decode {
                                path: open.path.clone(),
                                line: open.line_number,
                            }))
                        }
                    };
                }
                Err(source) => {
                    self.failed = true;
                    return Some(Err(InputError::Read {
                        path: open.path.clone(),
                        source,
                    }));
                }
            }
        }
    }
}

/// Split a single line into a (nickname, message) pair.
///
/// Returns `None` for lines that are not public messages and for message
/// lines lacking the `"> "` separator or a nickname.
pub fn parse_line(line: &str) -> Option<SpeakerMessage> {
    let rest = line.strip_prefix('<')?;
    let (nickname, message) = rest.trim_end().split_once(NICKNAME_SEPARATOR)?;
    let nickname = clean_nickname(nickname);
    if nickname.is_empty() {
        return None;
    }
    Some(SpeakerMessage::new(nickname, message))
}

/// Select relevant lines and split each of those into a (nickname, message)
/// pair, lazily.
pub fn parse_log<I, S>(lines: I) -> impl Iterator<Item = SpeakerMessage>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().filter_map(|line| {
        let parsed = parse_line(line.as_ref());
        if parsed.is_none() {
            log::trace!("Skipping line: {:?}", line.as_ref());
        }
        parsed
    })
}

/// Collect the set of nicknames and the list of messages from the lines.
pub fn parse_logfile<I, S>(lines: I) -> ParsedLog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_log(lines).collect()
}

/// Read and parse log files, failing on the first unreadable input.
pub fn parse_logfiles<I, P>(paths: I) -> Result<ParsedLog, InputError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut parsed = ParsedLog::default();
    let mut line_count = 0usize;

    for line in LogLines::new(paths) {
        let line = line?;
        line_count += 1;
        if let Some(entry) = parse_line(&line) {
            parsed.record(entry);
        }
    }

    log::info!(
        "Parsed {} lines: {} messages from {} nicknames",
        line_count,
        parsed.messages.len(),
        parsed.nicknames.len()
    );
    Ok(parsed)
}
