//! Conversion tests for `rsi-rs`
//!
//! Every test writes real PNG files into a temporary directory and goes through
//! the public file-level API.

mod batch;
mod common;
mod directory;
mod import;
