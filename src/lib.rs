//! `utilkit` is a small utility library backing the `utilkit` CLI binary.
//!
//! It provides:
//! - Pure helpers for math, statistics, text, collections, dates, and validation
//! - An in-memory user store with never-reused ids
//! - Scoped guards: an advisory file lock and an elapsed-time timer
//! - Lenient JSON file I/O and a JSON-backed config object

/// Set- and group-style list transforms.
pub mod collections;
/// JSON-backed key/value configuration.
pub mod config;
/// Date/time formatting, parsing, and ranges.
pub mod datetime;
/// Crate-wide error type.
pub mod error;
/// Text and JSON file helpers.
pub mod fsio;
/// Random identifier generation (id8 / hex / salts).
pub mod id;
/// Advisory file lock guard.
pub mod lock;
/// Logging setup for binaries.
pub mod logging;
/// Geometry, sequences, and the calculator.
pub mod math;
/// Fixed-delay retry helper.
pub mod retry;
/// Salted password hashing.
pub mod security;
/// Summary statistics.
pub mod stats;
/// In-memory user store.
pub mod store;
/// String helpers and unit conversions.
pub mod text;
/// Elapsed-time guard.
pub mod timer;
/// Record-shape validation.
pub mod validate;

pub use error::{Error, Result};
