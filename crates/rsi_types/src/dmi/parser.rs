//! Parser for DMI embedded metadata.
//!
//! # Format
//!
//! ```text
//! # BEGIN DMI
//! version = 4.0
//!     width = 32
//!     height = 32
//! state = "idle"
//!     dirs = 4
//!     frames = 2
//!     delay = 1,2
//! state = "dead"
//!     dirs = 1
//!     frames = 1
//! # END DMI
//! ```
//!
//! The first tuple must be `version`. `width`/`height` may follow; any other key
//! ends the version block. Each `state` tuple opens a record which `dirs`,
//! `frames` and `delay` refine until the next `state` tuple. Keys this parser
//! does not model (`loop`, `rewind`, `movement`, `hotspot`, ...) are skipped.

use std::fmt;

use log::{debug, trace};

use super::tokenizer::Tokenizer;
use crate::{
	direction::DirectionMode,
	error::{ParseError, ParseErrorKind},
	size::Size,
};

/// Delay assigned to frames that have no explicit `delay` entry.
pub const DEFAULT_DELAY: f32 = 1.0;

/// The `version` block of a DMI file: format version and tile size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegacyVersion {
	/// Format version number
	pub version: f64,
	/// Tile width, `-1` when absent
	pub width: i32,
	/// Tile height, `-1` when absent
	pub height: i32,
}

impl LegacyVersion {
	/// Creates a version record with an unset tile size.
	pub fn new(version: f64) -> Self {
		Self {
			version,
			width: -1,
			height: -1,
		}
	}

	/// Creates a complete version record.
	pub fn with_size(version: f64, width: i32, height: i32) -> Self {
		Self {
			version,
			width,
			height,
		}
	}

	/// Returns true if the version is non-zero and both dimensions are set.
	pub fn valid(&self) -> bool {
		self.version != 0.0 && self.width >= 0 && self.height >= 0
	}

	/// Tile size, if both dimensions are positive.
	pub fn tile_size(&self) -> Option<Size> {
		Size::from_signed(self.width, self.height)
	}
}

impl Default for LegacyVersion {
	fn default() -> Self {
		Self::new(0.0)
	}
}

impl fmt::Display for LegacyVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "DMI v{} ({}x{})", self.version, self.width, self.height)
	}
}

/// One `state` record of a DMI file.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyState {
	/// State name, quotes removed
	pub name: String,
	/// Direction set
	pub dirs: DirectionMode,
	/// Frames per direction, at least 1
	pub frames: u32,
	/// `delay` values as written, at most `frames` of them
	pub delay: Option<Vec<f32>>,
}

impl LegacyState {
	/// Creates a single-direction, single-frame state.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			dirs: DirectionMode::None,
			frames: 1,
			delay: None,
		}
	}

	/// Number of tiles this state occupies in the sheet.
	pub fn tile_count(&self) -> usize {
		self.dirs.count().saturating_mul(self.frames as usize)
	}

	/// Delay table covering every declared frame: one list per occupied
	/// direction, each `frames` long.
	///
	/// This allocates `dirs * frames` entries; use [`delays_for`](Self::delays_for)
	/// when only the frames a sheet actually holds are wanted.
	pub fn delays(&self) -> Option<Vec<Vec<f32>>> {
		self.delays_for(self.frames as usize)
	}

	/// Delay table for the first `frames` frames.
	///
	/// Written delays are padded with [`DEFAULT_DELAY`] or cut to `frames`. A
	/// state without usable delays gets uniform delays when `frames > 1`, and no
	/// table otherwise.
	pub fn delays_for(&self, frames: usize) -> Option<Vec<Vec<f32>>> {
		let delay = match &self.delay {
			Some(delay) if !delay.is_empty() => {
				let mut delay = delay.clone();
				delay.resize(frames, DEFAULT_DELAY);
				delay
			}
			_ if frames > 1 => vec![DEFAULT_DELAY; frames],
			_ => return None,
		};

		Some(vec![delay; self.dirs.count()])
	}
}

/// Parsed DMI metadata: the version block and every state in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
	version: LegacyVersion,
	states: Vec<LegacyState>,
}

impl Metadata {
	/// Creates metadata from parts.
	pub fn new(version: LegacyVersion, states: Vec<LegacyState>) -> Self {
		Self {
			version,
			states,
		}
	}

	/// Parses a metadata text blob.
	///
	/// # Errors
	///
	/// See [`parse`].
	pub fn from_text(text: &str) -> Result<Self, ParseError> {
		parse(&mut Tokenizer::new(text))
	}

	/// The version block.
	pub fn version(&self) -> &LegacyVersion {
		&self.version
	}

	/// States in file order.
	pub fn states(&self) -> &[LegacyState] {
		&self.states
	}

	/// Total tiles the sheet must hold for every state.
	pub fn tile_count(&self) -> usize {
		self.states.iter().map(LegacyState::tile_count).fold(0, usize::saturating_add)
	}
}

/// Parses DMI metadata from a tokenizer.
///
/// # Errors
///
/// - [`ParseErrorKind::NoVersion`] if the first tuple is not `version=<float>`
/// - [`ParseErrorKind::MalformedVersion`] if the version block is incomplete
/// - [`ParseErrorKind::MalformedTuple`] if a later line has no `=`
pub fn parse(tokenizer: &mut Tokenizer<'_>) -> Result<Metadata, ParseError> {
	let version = parse_version(tokenizer)?;
	let mut states = Vec::new();

	while let Some((key, value)) = next_tuple(tokenizer)? {
		if key == "state" {
			states.push(parse_state(tokenizer, value)?);
		} else {
			trace!("Skipping \"{key}\" outside of a state block");
		}
	}

	debug!("Parsed {} with {} states", version, states.len());

	Ok(Metadata {
		version,
		states,
	})
}

/// Advances to the next non-comment line and splits it.
fn next_tuple<'a>(tokenizer: &mut Tokenizer<'a>) -> Result<Option<(&'a str, &'a str)>, ParseError> {
	while tokenizer.advance() {
		let Some(line) = tokenizer.current_line() else {
			break;
		};

		if Tokenizer::is_comment(line) {
			continue;
		}

		return Tokenizer::parse_tuple(line).map(Some);
	}

	Ok(None)
}

fn parse_version(tokenizer: &mut Tokenizer<'_>) -> Result<LegacyVersion, ParseError> {
	let first = next_tuple(tokenizer).map_err(|e| ParseErrorKind::NoVersion.with_message(e.message()))?;

	let version = match first {
		Some(("version", value)) => value.parse::<f64>().ok(),
		_ => None,
	};
	let Some(version) = version else {
		return Err(ParseErrorKind::NoVersion.with_message("First tuple is not a version number"));
	};

	let mut version = LegacyVersion::new(version);

	while let Some((key, value)) = next_tuple(tokenizer)? {
		match key {
			"width" => {
				if let Ok(width) = value.parse() {
					version.width = width;
				}
			}
			"height" => {
				if let Ok(height) = value.parse() {
					version.height = height;
				}
			}
			_ => {
				tokenizer.rewind();
				break;
			}
		}
	}

	if !version.valid() {
		return Err(ParseErrorKind::MalformedVersion.with_message(format!("Invalid version block: {version}")));
	}

	Ok(version)
}

fn parse_state(tokenizer: &mut Tokenizer<'_>, name: &str) -> Result<LegacyState, ParseError> {
	let mut state = LegacyState::new(name);
	let mut delay: Option<Vec<f32>> = None;

	while let Some((key, value)) = next_tuple(tokenizer)? {
		match key {
			"state" => {
				tokenizer.rewind();
				break;
			}
			"dirs" => {
				if let Some(dirs) = value.parse::<u8>().ok().and_then(DirectionMode::from_count) {
					state.dirs = dirs;
				}
			}
			"frames" => {
				if let Ok(frames) = value.parse::<u32>() {
					state.frames = frames;
				}
			}
			"delay" => {
				delay = Some(value.split(',').filter_map(|d| d.trim().parse::<f32>().ok()).collect());
			}
			_ => trace!("Ignoring \"{key}\" on state \"{name}\""),
		}
	}

	state.frames = state.frames.max(1);
	let frames = state.frames as usize;
	state.delay = delay.map(|mut delay| {
		delay.truncate(frames);
		delay
	});

	trace!("State \"{}\": {} dirs, {} frames", state.name, state.dirs.count(), state.frames);

	Ok(state)
}
