//! gotrans - translation catalog extractor for Go servers
//!
//! gotrans scans a Go server tree (and an optional enterprise tree) for the
//! translation identifiers passed to well-known translation functions, then
//! either rewrites the English translations file to match (`extract`) or
//! reports how far it has drifted (`check`).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning and reconciliation engine

pub mod cli;
pub mod config;
pub mod core;
