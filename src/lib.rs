//! # Chat Relater - Analyze and visualize relations between chat users
//!
//! This library extracts a social graph from plain-text chat logs: who
//! addressed whom, and how often.
//!
//! ## Overview
//!
//! A line is recognized as a message when it starts with a nickname in angle
//! brackets followed by a space (e.g. `<SomeUser23> hey what's up?`), as
//! written by XChat and similar clients. A message is taken to address
//! another user when its first word is that user's nickname, optionally
//! followed by punctuation (`Jane: hi`, `John, look`). Users are expected to
//! use nickname completion, so matching is exact apart from case.
//!
//! ## Architecture
//!
//! - `nicknames`: status symbol removal and case-insensitive nickname lookup
//! - `analysis`: log parsing, reference detection, relation aggregation and
//!   the verbose report
//! - `orchestrator`: one complete analysis run over a set of log files
//! - `serialization`: saving and loading analysis results (JSON or YAML)
//! - `visualize`: GraphViz DOT generation and rendering
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chatrelater::analysis::AnalyzeOptions;
//! use chatrelater::{orchestrator, serialization, visualize};
//! use std::path::Path;
//!
//! let options = AnalyzeOptions { directed: false, prune_unrelated: true };
//! let result = orchestrator::analyze(["#channel.log"], &options)?;
//! serialization::save_data(&result, Some(Path::new("relations.json")))?;
//!
//! let dot = visualize::generate_dot(&result, "channel");
//! # Ok::<(), color_eyre::Report>(())
//! ```
//!
//! ## Error Handling
//!
//! Modules report typed errors built with `thiserror`; the orchestrator and
//! the binaries use `color_eyre` to attach context. Lines that are not
//! messages and references that match nobody are not errors, they are
//! skipped.

pub mod nicknames;
pub mod analysis;
pub mod orchestrator;
pub mod serialization;
pub mod visualize;
