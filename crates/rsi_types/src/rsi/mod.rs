//! RSI aggregate: tile size, ordered states and licensing metadata.
//!
//! An [`Rsi`] is the in-memory form of an `.rsi` directory. Every mutation here
//! is pure; reading and writing the directory lives in [`io`], and the
//! `meta.json` encoding in [`json`].
//!
//! # Example
//!
//! ```
//! use rsi_types::{direction::DirectionMode, rsi::{Rsi, state::RsiState}, size::Size};
//!
//! let mut rsi = Rsi::new(Size::new(32, 32));
//! rsi.add_state(RsiState::new("idle", DirectionMode::Cardinal, None, None));
//! rsi.add_state(RsiState::new("dead", DirectionMode::None, None, None));
//!
//! let removed = rsi.remove_state(0).unwrap();
//! assert_eq!(removed.name(), "idle");
//! assert_eq!(rsi.states().len(), 1);
//! ```

pub mod io;
pub mod json;
pub mod state;

use image::RgbaImage;
use log::debug;

use crate::{error::RsiError, size::Size};

use state::RsiState;

/// `meta.json` format version written by this crate.
pub const CURRENT_RSI_VERSION: u32 = 1;

/// An RSI: one tile size shared by an ordered list of states.
#[derive(Debug, Clone, PartialEq)]
pub struct Rsi {
	version: u32,
	size: Size,
	states: Vec<RsiState>,
	license: Option<String>,
	copyright: Option<String>,
}

impl Rsi {
	/// Creates an empty RSI at the current format version.
	pub fn new(size: Size) -> Self {
		Self::with_version(CURRENT_RSI_VERSION, size)
	}

	/// Creates an empty RSI with an explicit format version.
	pub fn with_version(version: u32, size: Size) -> Self {
		Self {
			version,
			size,
			states: Vec::new(),
			license: None,
			copyright: None,
		}
	}

	/// Format version.
	pub fn version(&self) -> u32 {
		self.version
	}

	/// Tile size.
	pub fn size(&self) -> Size {
		self.size
	}

	/// States in order.
	pub fn states(&self) -> &[RsiState] {
		&self.states
	}

	/// State at `index`.
	pub fn state(&self, index: usize) -> Option<&RsiState> {
		self.states.get(index)
	}

	/// Mutable state at `index`.
	pub fn state_mut(&mut self, index: usize) -> Option<&mut RsiState> {
		self.states.get_mut(index)
	}

	/// Index of the first state called `name`.
	pub fn find_state(&self, name: &str) -> Option<usize> {
		self.states.iter().position(|s| s.name() == name)
	}

	/// License identifier.
	pub fn license(&self) -> Option<&str> {
		self.license.as_deref()
	}

	/// Sets the license identifier.
	pub fn set_license(&mut self, license: Option<String>) {
		self.license = license;
	}

	/// Copyright notice.
	pub fn copyright(&self) -> Option<&str> {
		self.copyright.as_deref()
	}

	/// Sets the copyright notice.
	pub fn set_copyright(&mut self, copyright: Option<String>) {
		self.copyright = copyright;
	}

	/// Appends a state.
	pub fn add_state(&mut self, state: RsiState) {
		debug!("Adding state \"{}\" at {}", state.name(), self.states.len());
		self.states.push(state);
	}

	/// Inserts a state before `index`. `index == len` appends.
	///
	/// # Errors
	///
	/// Returns [`RsiError::StateIndexOutOfRange`] if `index > len`.
	pub fn insert_state(&mut self, index: usize, state: RsiState) -> Result<(), RsiError> {
		if index > self.states.len() {
			return Err(RsiError::StateIndexOutOfRange {
				index,
				len: self.states.len(),
			});
		}

		debug!("Inserting state \"{}\" at {index}", state.name());
		self.states.insert(index, state);
		Ok(())
	}

	/// Removes the state at `index` and hands it back with its pixel data intact.
	///
	/// # Errors
	///
	/// Returns [`RsiError::StateIndexOutOfRange`] if there is no such state.
	pub fn remove_state(&mut self, index: usize) -> Result<RsiState, RsiError> {
		if index >= self.states.len() {
			return Err(RsiError::StateIndexOutOfRange {
				index,
				len: self.states.len(),
			});
		}

		let state = self.states.remove(index);
		debug!("Removed state \"{}\" from {index}", state.name());
		Ok(state)
	}

	/// Removes the first state called `name`, returning its former index.
	pub fn remove_state_named(&mut self, name: &str) -> Option<(usize, RsiState)> {
		let index = self.find_state(name)?;
		Some((index, self.states.remove(index)))
	}

	/// Replaces the pixel data of the state at `index` with tiles cut from `sheet`.
	///
	/// The sheet is read with the state's own delay table, direction-major. Returns
	/// the number of frames loaded.
	///
	/// # Errors
	///
	/// - [`RsiError::StateIndexOutOfRange`] if there is no such state
	/// - [`RsiError::SheetTooSmall`] if the sheet cannot hold a single tile
	pub fn update_image_state(&mut self, index: usize, sheet: &RgbaImage) -> Result<usize, RsiError> {
		let size = self.size;
		let len = self.states.len();
		let state = self.states.get_mut(index).ok_or(RsiError::StateIndexOutOfRange {
			index,
			len,
		})?;

		let (sheet_width, sheet_height) = sheet.dimensions();
		if sheet_width < size.x || sheet_height < size.y {
			return Err(RsiError::SheetTooSmall {
				sheet_width,
				sheet_height,
				tile_width: size.x,
				tile_height: size.y,
			});
		}

		state.dispose();
		Ok(state.load_sheet(sheet, size))
	}

	/// Orders states by name. The sort is stable, so duplicates keep their order.
	pub fn sort_states(&mut self) {
		self.states.sort_by(|a, b| a.name().cmp(b.name()));
	}

	/// Releases the pixel data of every state.
	pub fn dispose(&mut self) {
		self.states.iter_mut().for_each(RsiState::dispose);
	}
}
