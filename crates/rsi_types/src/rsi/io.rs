//! Reading and writing `.rsi` directories.
//!
//! A directory holds `meta.json` plus one `<state>.png` per state, each a
//! packed sheet of that state's frames.

use std::{
	fs,
	path::{Path, PathBuf},
};

use log::{debug, info, warn};

use super::{
	Rsi,
	json::{from_json, to_json},
	state::RsiState,
};
use crate::{config::SaveConfig, error::RsiError, pixels};

/// Metadata file name inside an RSI directory.
pub const META_FILE: &str = "meta.json";

/// An RSI read from disk, together with the per-state problems met on the way.
#[derive(Debug)]
pub struct Loaded {
	/// The loaded RSI
	pub rsi: Rsi,
	/// Recoverable errors, at most one per state
	pub warnings: Vec<RsiError>,
}

impl Loaded {
	/// Returns true if every state loaded cleanly.
	pub fn is_clean(&self) -> bool {
		self.warnings.is_empty()
	}
}

/// Path of the sheet that backs `state` inside `dir`.
pub fn state_image_path(dir: &Path, state: &RsiState) -> PathBuf {
	dir.join(format!("{}.png", state.name()))
}

impl Rsi {
	/// Opens an RSI directory.
	///
	/// A state whose sheet is missing or unreadable is kept without pixel data;
	/// the problem is reported in [`Loaded::warnings`] and loading goes on.
	///
	/// # Errors
	///
	/// Returns an error if `meta.json` cannot be read or decoded.
	pub fn open(dir: impl AsRef<Path>) -> Result<Loaded, RsiError> {
		let dir = dir.as_ref();
		let text = fs::read_to_string(dir.join(META_FILE))?;
		let mut rsi = from_json(&text)?;

		let warnings = rsi.load_images(dir);
		info!("Opened {} with {} states, {} warnings", dir.display(), rsi.states().len(), warnings.len());

		Ok(Loaded {
			rsi,
			warnings,
		})
	}

	/// Loads every state's sheet from `dir`, returning one error per state that failed.
	pub fn load_images(&mut self, dir: &Path) -> Vec<RsiError> {
		let size = self.size;
		let mut warnings = Vec::new();

		for state in &mut self.states {
			let path = state_image_path(dir, state);
			if !path.is_file() {
				warn!("Missing image for state \"{}\" at {}", state.name(), path.display());
				warnings.push(RsiError::MissingStateImage {
					state: state.name().to_owned(),
					path,
				});
				continue;
			}

			let sheet = match pixels::open(&path) {
				Ok(sheet) => sheet,
				Err(e) => {
					warn!("Cannot decode {}: {}", path.display(), e);
					warnings.push(e.into());
					continue;
				}
			};

			let (sheet_width, sheet_height) = sheet.dimensions();
			if sheet_width < size.x || sheet_height < size.y {
				warn!("Sheet {} is smaller than one {} tile", path.display(), size);
				warnings.push(RsiError::SheetTooSmall {
					sheet_width,
					sheet_height,
					tile_width: size.x,
					tile_height: size.y,
				});
				continue;
			}

			let loaded = state.load_sheet(&sheet, size);
			debug!("Loaded {loaded} frames for state \"{}\"", state.name());
		}

		warnings
	}

	/// Writes `meta.json` and one packed sheet per state into `dir`, creating it if needed.
	///
	/// States sharing a name write to the same file; the last one wins.
	///
	/// # Errors
	///
	/// Returns an error if a file cannot be written or a sheet cannot be encoded.
	pub fn save(&self, dir: impl AsRef<Path>, config: &SaveConfig) -> Result<(), RsiError> {
		let dir = dir.as_ref();
		fs::create_dir_all(dir)?;

		fs::write(dir.join(META_FILE), to_json(self, config)?)?;

		for state in &self.states {
			let sheet = state.pack(self.size)?;
			let path = state_image_path(dir, state);
			fs::write(&path, pixels::encode(&sheet)?)?;
			debug!("Wrote {} ({}x{})", path.display(), sheet.width(), sheet.height());
		}

		info!("Saved {} states to {}", self.states.len(), dir.display());
		Ok(())
	}
}
