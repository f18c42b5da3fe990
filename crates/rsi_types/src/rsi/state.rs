//! RSI states and their frame storage.
//!
//! Frames live in a flat arena of `MAX_DIRECTIONS * frame_len` slots, indexed
//! `direction * frame_len + frame`. The arena always reserves all eight
//! direction slots; the ones a state's [`DirectionMode`] does not use stay empty.

use std::fmt;

use image::{ImageResult, RgbaImage};
use log::{debug, warn};

use crate::{
	direction::{DirectionMode, MAX_DIRECTIONS},
	geometry::{self, PackLayout},
	pixels,
	size::Size,
};

/// Opaque per-state flags, kept verbatim from `meta.json`.
pub type Flags = serde_json::Map<String, serde_json::Value>;

/// Replacement used for characters that are not allowed in file names.
pub const DEFAULT_REPLACEMENT: char = '_';

/// Characters rejected in file names on at least one supported platform.
pub const INVALID_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every file-name-invalid character of `name` with `replacement`.
pub fn sanitize_name(name: &str, replacement: char) -> String {
	name.chars()
		.map(|c| {
			if INVALID_NAME_CHARS.contains(&c) || c.is_control() {
				replacement
			} else {
				c
			}
		})
		.collect()
}

/// How many of a state's required frame slots hold pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramePopulation {
	/// No required slot is filled
	Empty,
	/// Some required slots are filled
	PartiallyLoaded,
	/// Every required slot is filled
	Loaded,
}

/// A named animation state of an RSI.
#[derive(Debug, Clone, PartialEq)]
pub struct RsiState {
	name: String,
	directions: DirectionMode,
	delays: Option<Vec<Vec<f32>>>,
	flags: Option<Flags>,
	/// Frame slots per direction
	frame_len: usize,
	frames: Vec<Option<RgbaImage>>,
}

impl RsiState {
	/// Creates a state with no pixel data, replacing invalid name characters with `_`.
	pub fn new(
		name: &str,
		directions: DirectionMode,
		delays: Option<Vec<Vec<f32>>>,
		flags: Option<Flags>,
	) -> Self {
		Self::with_replacement(name, DEFAULT_REPLACEMENT, directions, delays, flags)
	}

	/// Creates a state with no pixel data, using a custom name replacement character.
	pub fn with_replacement(
		name: &str,
		replacement: char,
		directions: DirectionMode,
		delays: Option<Vec<Vec<f32>>>,
		flags: Option<Flags>,
	) -> Self {
		let frame_len = frame_len_for(delays.as_deref());

		Self {
			name: sanitize_name(name, replacement),
			directions,
			delays,
			flags,
			frame_len,
			frames: vec![None; MAX_DIRECTIONS * frame_len],
		}
	}

	/// Creates a single-frame state whose used slots hold transparent tiles.
	pub fn blank(name: &str, directions: DirectionMode, tile: Size) -> Self {
		let mut state = Self::new(name, directions, None, None);
		for direction in 0..directions.count() {
			state.set_frame(direction, 0, pixels::transparent(tile));
		}
		state
	}

	/// State name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Renames the state, replacing invalid characters with `_`.
	pub fn set_name(&mut self, name: &str) {
		self.name = sanitize_name(name, DEFAULT_REPLACEMENT);
	}

	/// Direction set.
	pub fn directions(&self) -> DirectionMode {
		self.directions
	}

	/// Per-direction delay lists.
	pub fn delays(&self) -> Option<&[Vec<f32>]> {
		self.delays.as_deref()
	}

	/// Opaque flags.
	pub fn flags(&self) -> Option<&Flags> {
		self.flags.as_ref()
	}

	/// Replaces the flags.
	pub fn set_flags(&mut self, flags: Option<Flags>) {
		self.flags = flags;
	}

	/// Frame slots reserved per direction.
	pub fn frame_len(&self) -> usize {
		self.frame_len
	}

	/// Frames `direction` declares; 0 for directions outside the mode.
	pub fn frame_count(&self, direction: usize) -> usize {
		if direction >= self.directions.count() {
			return 0;
		}
		geometry::frame_count_for(self.delays(), direction).unwrap_or(0).min(self.frame_len)
	}

	/// Changes the direction set.
	///
	/// Slots of directions that remain in range keep their pixels; slots of
	/// dropped directions are cleared. A delay table grows by copying the first
	/// direction's delays, or shrinks by truncation.
	pub fn set_direction_mode(&mut self, directions: DirectionMode) {
		if directions == self.directions {
			return;
		}

		let count = directions.count();
		if let Some(delays) = self.delays.as_mut() {
			let template = delays.first().cloned().unwrap_or_default();
			delays.resize(count, template);
		}

		self.directions = directions;
		self.relayout(frame_len_for(self.delays.as_deref()));

		for direction in count..MAX_DIRECTIONS {
			for frame in 0..self.frame_len {
				self.frames[direction * self.frame_len + frame] = None;
			}
		}

		debug!("State \"{}\" switched to {}", self.name, directions);
	}

	/// Replaces the delay table, keeping any frames that still have a slot.
	pub fn set_delays(&mut self, delays: Option<Vec<Vec<f32>>>) {
		let frame_len = frame_len_for(delays.as_deref());
		self.delays = delays;
		self.relayout(frame_len);
	}

	fn relayout(&mut self, frame_len: usize) {
		if frame_len == self.frame_len {
			return;
		}

		let mut frames = vec![None; MAX_DIRECTIONS * frame_len];
		let kept = frame_len.min(self.frame_len);
		for direction in 0..MAX_DIRECTIONS {
			for frame in 0..kept {
				frames[direction * frame_len + frame] = self.frames[direction * self.frame_len + frame].take();
			}
		}

		self.frames = frames;
		self.frame_len = frame_len;
	}

	#[inline]
	fn slot(&self, direction: usize, frame: usize) -> Option<usize> {
		(direction < MAX_DIRECTIONS && frame < self.frame_len).then(|| direction * self.frame_len + frame)
	}

	/// Pixel data of a slot.
	pub fn frame(&self, direction: usize, frame: usize) -> Option<&RgbaImage> {
		self.frames.get(self.slot(direction, frame)?)?.as_ref()
	}

	/// Stores pixel data in a slot.
	///
	/// Returns `false` if the mode or the delay table does not declare that
	/// slot; `direction` must be inside the mode and `frame` below its
	/// [`frame_count`](Self::frame_count).
	pub fn set_frame(&mut self, direction: usize, frame: usize, image: RgbaImage) -> bool {
		if frame >= self.frame_count(direction) {
			return false;
		}
		let Some(slot) = self.slot(direction, frame) else {
			return false;
		};
		self.frames[slot] = Some(image);
		true
	}

	/// Removes and returns the pixel data of a slot.
	pub fn take_frame(&mut self, direction: usize, frame: usize) -> Option<RgbaImage> {
		let slot = self.slot(direction, frame)?;
		self.frames[slot].take()
	}

	/// Every `(direction, frame)` slot the mode and delay table require.
	pub fn required_slots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		(0..self.directions.count())
			.flat_map(move |direction| (0..self.frame_count(direction)).map(move |frame| (direction, frame)))
	}

	/// Populated slots in `[direction][frame]` order, including unused directions.
	pub fn populated(&self) -> impl Iterator<Item = ((usize, usize), &RgbaImage)> {
		let frame_len = self.frame_len;
		self.frames
			.iter()
			.enumerate()
			.filter_map(move |(slot, image)| Some(((slot / frame_len, slot % frame_len), image.as_ref()?)))
	}

	/// Number of slots holding pixel data.
	pub fn populated_count(&self) -> usize {
		self.frames.iter().filter(|f| f.is_some()).count()
	}

	/// How many required slots hold pixel data.
	pub fn population(&self) -> FramePopulation {
		let (total, filled) = self
			.required_slots()
			.fold((0, 0), |(total, filled), (d, f)| (total + 1, filled + usize::from(self.frame(d, f).is_some())));

		match filled {
			0 => FramePopulation::Empty,
			n if n == total => FramePopulation::Loaded,
			_ => FramePopulation::PartiallyLoaded,
		}
	}

	/// Slices a packed direction-major sheet into this state's slots.
	///
	/// Slots whose tile falls outside the sheet are left untouched. Returns the
	/// number of frames loaded.
	pub fn load_sheet(&mut self, sheet: &RgbaImage, tile: Size) -> usize {
		let (width, height) = sheet.dimensions();
		let slots: Vec<_> = self.required_slots().collect();
		let mut loaded = 0;

		for (direction, frame) in slots {
			let rect = geometry::frame_rectangle_for(self.delays(), tile, direction, frame, width, height);
			match rect {
				Some(rect) => {
					self.set_frame(direction, frame, pixels::crop(sheet, rect));
					loaded += 1;
				}
				None => {
					warn!("State \"{}\": no pixel data for direction {direction} frame {frame}", self.name);
				}
			}
		}

		loaded
	}

	/// Packs every populated slot into a near-square sheet.
	///
	/// Empty slots take no cell. A state without pixel data packs to a single
	/// transparent tile.
	///
	/// # Errors
	///
	/// Returns [`ImageError::Limits`](image::ImageError::Limits) if the sheet
	/// would exceed the default `image` allocation limit.
	pub fn pack(&self, tile: Size) -> ImageResult<RgbaImage> {
		let images: Vec<_> = self.populated().map(|(_, image)| image).collect();
		if images.is_empty() {
			return pixels::try_transparent(u64::from(tile.x), u64::from(tile.y));
		}

		let (rows, columns) = geometry::pack_grid(images.len());
		let mut sheet =
			pixels::try_transparent(u64::from(columns) * u64::from(tile.x), u64::from(rows) * u64::from(tile.y))?;

		let layout = PackLayout::new(tile, images.len());
		for (image, position) in images.into_iter().zip(&layout.positions) {
			pixels::composite(&mut sheet, image, *position);
		}

		Ok(sheet)
	}

	/// Releases every frame buffer.
	pub fn dispose(&mut self) {
		self.frames.iter_mut().for_each(|f| *f = None);
	}
}

impl fmt::Display for RsiState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"\"{}\": {} directions, {} frames/direction, {} images",
			self.name,
			self.directions.count(),
			self.frame_len,
			self.populated_count()
		)
	}
}

/// Longest delay list, or 1 without delays.
fn frame_len_for(delays: Option<&[Vec<f32>]>) -> usize {
	delays.and_then(|d| d.iter().map(Vec::len).max()).unwrap_or(1).max(1)
}
