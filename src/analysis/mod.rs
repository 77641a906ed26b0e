//! Relation extraction from chat logs.
//!
//! This module turns log lines into (nickname, message) pairs, detects which
//! nickname each message addresses, and aggregates those references into
//! weighted relations.

pub mod types;
pub mod log_parser;
pub mod relations;
pub mod report;

pub use types::*;
pub use log_parser::{parse_log, parse_logfile, parse_logfiles, InputError, LogLines};
pub use relations::{compress_relations, relate_nicknames};
pub use report::{format_report, print_report};
