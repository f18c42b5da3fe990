//! This crate provides the core data types and codecs for the `rsi-rs` project.
//!
//! # Formats
//!
//! - **RSI**: a directory holding `meta.json` and one packed PNG sheet per state
//! - **DMI**: a single PNG sheet with its description embedded in a text chunk
//!
//! # Modules
//!
//! - [`dmi`]: DMI description tokenizer and parser, DMI to RSI import
//! - [`geometry`]: frame rectangles inside sheets and sheet re-packing
//! - [`rsi`]: the RSI model, `meta.json` codec and directory I/O
//! - [`history`]: undo/redo of state deletions
//! - [`source`] and [`batch`]: opening either format, converting whole directories
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use rsi_types::prelude::*;
//!
//! let rsi = dmi::import_file("mob.dmi", &ConvertConfig::default())?;
//! rsi.save("mob.rsi", &SaveConfig::default())?;
//!
//! let loaded = Rsi::open("mob.rsi")?;
//! for warning in &loaded.warnings {
//!     eprintln!("{warning}");
//! }
//! # Ok::<(), RsiError>(())
//! ```

pub mod batch;
pub mod config;
pub mod direction;
pub mod dmi;
pub mod error;
pub mod geometry;
pub mod history;
pub mod pixels;
pub mod rsi;
pub mod size;
pub mod source;

/// `use rsi_types::prelude::*;` to import commonly used items.
pub mod prelude;
