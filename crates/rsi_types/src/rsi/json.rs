//! `meta.json` codec.
//!
//! Output fields are always written in the order `version`, `size`, `states`,
//! `license`, `copyright`, and each state as `name`, `directions`, `delays`,
//! `flags`. Compact output drops null fields entirely; pretty output keeps
//! them as explicit `null`s.

use serde::{
	Deserialize, Serialize, Serializer,
	ser::SerializeStruct,
};

use super::{
	CURRENT_RSI_VERSION, Rsi,
	state::{Flags, RsiState},
};
use crate::{config::SaveConfig, direction::DirectionMode, error::CodecError, pixels, size::Size};

/// Encodes the metadata of `rsi` as `meta.json` text.
///
/// # Errors
///
/// Returns [`CodecError::MalformedJson`] if serialization fails.
pub fn to_json(rsi: &Rsi, config: &SaveConfig) -> Result<String, CodecError> {
	let document = MetaRef {
		rsi,
		compact: config.minify_json,
	};

	let text = if config.minify_json {
		serde_json::to_string(&document)?
	} else {
		serde_json::to_string_pretty(&document)?
	};

	Ok(text)
}

/// Decodes `meta.json` text into an [`Rsi`] without pixel data.
///
/// A missing `states` array yields an RSI without states.
///
/// # Errors
///
/// - [`CodecError::MissingSizeProperty`] if there is no `size` object
/// - [`CodecError::InvalidSize`] if a tile dimension is zero or one tile is
///   too large to allocate
/// - [`CodecError::MalformedJson`] for any other structural problem
pub fn from_json(text: &str) -> Result<Rsi, CodecError> {
	let document: MetaDocument = serde_json::from_str(text)?;

	let raw = document.size.ok_or(CodecError::MissingSizeProperty)?;
	let invalid = || CodecError::InvalidSize {
		x: raw.x,
		y: raw.y,
	};
	let size = Size::try_new(raw.x, raw.y).ok_or_else(invalid)?;
	pixels::check_buffer(u64::from(size.x), u64::from(size.y)).map_err(|_| invalid())?;

	let mut rsi = Rsi::with_version(document.version, size);
	rsi.set_license(document.license);
	rsi.set_copyright(document.copyright);

	for state in document.states {
		rsi.add_state(RsiState::new(&state.name, state.directions, state.delays, state.flags));
	}

	Ok(rsi)
}

struct MetaRef<'a> {
	rsi: &'a Rsi,
	compact: bool,
}

impl Serialize for MetaRef<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let rsi = self.rsi;
		let states: Vec<_> = rsi
			.states()
			.iter()
			.map(|state| StateRef {
				state,
				compact: self.compact,
			})
			.collect();

		let mut s = serializer.serialize_struct("Rsi", 5)?;
		s.serialize_field("version", &rsi.version())?;
		s.serialize_field("size", &rsi.size())?;
		s.serialize_field("states", &states)?;
		serialize_nullable(&mut s, "license", &rsi.license(), self.compact)?;
		serialize_nullable(&mut s, "copyright", &rsi.copyright(), self.compact)?;
		s.end()
	}
}

struct StateRef<'a> {
	state: &'a RsiState,
	compact: bool,
}

impl Serialize for StateRef<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let state = self.state;

		let mut s = serializer.serialize_struct("RsiState", 4)?;
		s.serialize_field("name", state.name())?;
		s.serialize_field("directions", &state.directions())?;
		serialize_nullable(&mut s, "delays", &state.delays(), self.compact)?;
		serialize_nullable(&mut s, "flags", &state.flags(), self.compact)?;
		s.end()
	}
}

fn serialize_nullable<S: SerializeStruct, T: Serialize>(
	s: &mut S,
	key: &'static str,
	value: &Option<T>,
	compact: bool,
) -> Result<(), S::Error> {
	if compact && value.is_none() {
		s.skip_field(key)
	} else {
		s.serialize_field(key, value)
	}
}

fn current_version() -> u32 {
	CURRENT_RSI_VERSION
}

#[derive(Deserialize)]
struct MetaDocument {
	#[serde(default = "current_version")]
	version: u32,
	size: Option<SizeDocument>,
	#[serde(default)]
	states: Vec<StateDocument>,
	license: Option<String>,
	copyright: Option<String>,
}

#[derive(Deserialize)]
struct SizeDocument {
	x: u32,
	y: u32,
}

#[derive(Deserialize)]
struct StateDocument {
	name: String,
	#[serde(default)]
	directions: DirectionMode,
	delays: Option<Vec<Vec<f32>>>,
	flags: Option<Flags>,
}
