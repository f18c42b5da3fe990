//! DMI (legacy sprite sheet) support.
//!
//! A DMI file is a single PNG whose text chunk carries a `# BEGIN DMI` ...
//! `# END DMI` description. The image is one frame-major sheet holding every
//! state back to back. This module reads that description and slices the
//! sheet into an [`Rsi`](crate::rsi::Rsi); DMI files are never written.
//!
//! # Example
//!
//! ```no_run
//! use rsi_types::{config::ConvertConfig, dmi};
//!
//! let rsi = dmi::import_file("mob.dmi", &ConvertConfig::default())?;
//! println!("{} states", rsi.states().len());
//! # Ok::<(), rsi_types::error::RsiError>(())
//! ```

pub mod import;
pub mod parser;
pub mod png_text;
pub mod tokenizer;

pub use import::{import_bytes, import_file};
pub use parser::{LegacyState, LegacyVersion, Metadata, parse};
pub use png_text::{DMI_HEADER, find_dmi_text};
pub use tokenizer::Tokenizer;
