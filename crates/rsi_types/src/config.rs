//! Conversion and save options.
//!
//! The core never reads ambient settings; every option that used to be a user
//! preference is passed in through one of these structs. Both deserialize with
//! `serde`, so front-ends can load them from any configuration source.
//!
//! # Examples
//!
//! ```
//! use rsi_types::config::{ConvertConfig, SaveConfig};
//!
//! let convert = ConvertConfig::new(Some("CC-BY-SA-3.0".into()), None);
//! assert_eq!(convert.replacement, '_');
//!
//! let save = SaveConfig::compact();
//! assert!(save.minify_json);
//! ```

use serde::{Deserialize, Serialize};

use crate::rsi::state::DEFAULT_REPLACEMENT;

/// Options applied when a DMI file is converted to an RSI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
	/// License assigned to converted RSIs
	pub default_license: Option<String>,
	/// Copyright assigned to converted RSIs
	pub default_copyright: Option<String>,
	/// Stand-in for characters that cannot appear in state file names
	pub replacement: char,
}

impl Default for ConvertConfig {
	fn default() -> Self {
		Self {
			default_license: None,
			default_copyright: None,
			replacement: DEFAULT_REPLACEMENT,
		}
	}
}

impl ConvertConfig {
	/// Create a configuration with the given licensing defaults.
	///
	/// # Arguments
	/// * `default_license` - License for every converted RSI
	/// * `default_copyright` - Copyright for every converted RSI
	pub fn new(default_license: Option<String>, default_copyright: Option<String>) -> Self {
		Self {
			default_license,
			default_copyright,
			..Self::default()
		}
	}
}

/// Options applied when an RSI is written to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
	/// Write `meta.json` without whitespace and without null fields
	pub minify_json: bool,
}

impl SaveConfig {
	/// Indented `meta.json` with explicit nulls.
	pub fn pretty() -> Self {
		Self {
			minify_json: false,
		}
	}

	/// Single-line `meta.json` without null fields.
	pub fn compact() -> Self {
		Self {
			minify_json: true,
		}
	}
}
