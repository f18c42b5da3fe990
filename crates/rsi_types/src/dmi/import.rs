//! Conversion of DMI files into RSIs.

use std::{fs, path::Path};

use image::RgbaImage;
use log::{debug, info, warn};

use super::{
	parser::{LegacyState, Metadata},
	png_text::find_dmi_text,
};
use crate::{
	config::ConvertConfig,
	error::{ParseErrorKind, RsiError},
	geometry,
	pixels,
	rsi::{Rsi, state::RsiState},
	size::Size,
};

impl Metadata {
	/// Reads and parses the DMI description embedded in PNG bytes.
	///
	/// # Errors
	///
	/// - [`ParseErrorKind::NoDmiTag`] if no text chunk carries a DMI description
	/// - any [`parse`](super::parser::parse) failure
	/// - [`RsiError::Png`] if the bytes are not a PNG stream
	pub fn from_png_bytes(data: &[u8]) -> Result<Self, RsiError> {
		let Some(text) = find_dmi_text(data)? else {
			return Err(ParseErrorKind::NoDmiTag.with_message("No DMI description in PNG text chunks").into());
		};

		Ok(Self::from_text(&text)?)
	}

	/// Tile size declared by the version block.
	///
	/// # Errors
	///
	/// Returns [`RsiError::InvalidTileSize`] if a dimension is zero.
	pub fn tile_size(&self) -> Result<Size, RsiError> {
		let version = self.version();
		version.tile_size().ok_or(RsiError::InvalidTileSize {
			width: i64::from(version.width),
			height: i64::from(version.height),
		})
	}

	/// Cuts `sheet` into the states this metadata describes.
	///
	/// Tiles that fall outside a truncated sheet are left empty and logged. A
	/// state is given no more frames than the sheet has tiles left for it, so
	/// declared frame counts never size anything beyond the sheet itself.
	///
	/// # Errors
	///
	/// - [`RsiError::InvalidTileSize`] if the declared tile size is zero
	/// - [`RsiError::SheetTooSmall`] if the sheet cannot hold a single tile
	pub fn to_rsi(&self, sheet: &RgbaImage, config: &ConvertConfig) -> Result<Rsi, RsiError> {
		let size = self.tile_size()?;
		let (width, height) = sheet.dimensions();
		if width < size.x || height < size.y {
			return Err(RsiError::SheetTooSmall {
				sheet_width: width,
				sheet_height: height,
				tile_width: size.x,
				tile_height: size.y,
			});
		}

		let available = (width / size.x) as usize * (height / size.y) as usize;
		let required = self.tile_count();
		if required > available {
			warn!("Sheet holds {available} tiles but {required} are declared; missing frames left empty");
		}

		let mut rsi = Rsi::new(size);
		rsi.set_license(config.default_license.clone());
		rsi.set_copyright(config.default_copyright.clone());

		let mut offset = 0usize;
		for legacy in self.states() {
			let frames = held_frames(legacy, available.saturating_sub(offset));
			if frames < legacy.frames as usize {
				warn!("State \"{}\" declares {} frames, sheet holds {frames}", legacy.name, legacy.frames);
			}

			let state = crop_state(legacy, frames, sheet, size, offset, config.replacement);
			offset = offset.saturating_add(legacy.tile_count());

			debug!("Imported {state} ({width}x{height} sheet)");
			rsi.add_state(state);
		}

		Ok(rsi)
	}
}

/// Frames of `legacy` that can have any tile among `remaining`, at least 1.
fn held_frames(legacy: &LegacyState, remaining: usize) -> usize {
	let directions = legacy.dirs.count();
	let held = remaining.div_ceil(directions);
	(legacy.frames as usize).min(held).max(1)
}

fn crop_state(
	legacy: &LegacyState,
	frames: usize,
	sheet: &RgbaImage,
	size: Size,
	offset: usize,
	replacement: char,
) -> RsiState {
	let (width, height) = sheet.dimensions();
	let directions = legacy.dirs.count();
	let delays = legacy.delays_for(frames);
	let mut state = RsiState::with_replacement(&legacy.name, replacement, legacy.dirs, delays, None);

	for frame in 0..frames {
		for direction in 0..directions {
			let index = geometry::legacy_frame_index(offset, directions, direction, frame);
			match geometry::tile_rectangle(size, index, width, height) {
				Some(rect) => {
					state.set_frame(direction, frame, pixels::crop(sheet, rect));
				}
				None => {
					warn!("State \"{}\": tile {index} is outside the sheet", legacy.name);
				}
			}
		}
	}

	state
}

/// Converts DMI file bytes into an RSI.
///
/// # Errors
///
/// Returns an error if the PNG cannot be decoded or its description is invalid.
pub fn import_bytes(data: &[u8], config: &ConvertConfig) -> Result<Rsi, RsiError> {
	let metadata = Metadata::from_png_bytes(data)?;
	let sheet = pixels::decode(data)?;
	metadata.to_rsi(&sheet, config)
}

/// Converts a DMI file into an RSI.
///
/// # Errors
///
/// See [`import_bytes`]; also fails if the file cannot be read.
pub fn import_file(path: impl AsRef<Path>, config: &ConvertConfig) -> Result<Rsi, RsiError> {
	let path = path.as_ref();
	let data = fs::read(path)?;
	let rsi = import_bytes(&data, config)?;
	info!("Imported {} ({} states)", path.display(), rsi.states().len());
	Ok(rsi)
}

#[cfg(test)]
mod tests {
	use image::Rgba;

	use super::*;
	use crate::{direction::DirectionMode, rsi::state::FramePopulation};

	/// Sheet whose every 32x32 tile is filled with its linear index.
	fn indexed_sheet(columns: u32, rows: u32) -> RgbaImage {
		RgbaImage::from_fn(columns * 32, rows * 32, |x, y| {
			let index = (y / 32 * columns + x / 32) as u8;
			Rgba([index, 0, 0, 255])
		})
	}

	fn encode_dmi(text: &str, sheet: &RgbaImage) -> Vec<u8> {
		let mut data = Vec::new();
		let mut encoder = png::Encoder::new(&mut data, sheet.width(), sheet.height());
		encoder.set_color(png::ColorType::Rgba);
		encoder.set_depth(png::BitDepth::Eight);
		encoder.add_ztxt_chunk("Description".to_string(), text.to_string()).unwrap();

		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(sheet.as_raw()).unwrap();
		writer.finish().unwrap();
		data
	}

	fn tile_value(state: &RsiState, direction: usize, frame: usize) -> Option<u8> {
		state.frame(direction, frame).map(|f| f.get_pixel(0, 0).0[0])
	}

	const TWO_STATES: &str = "# BEGIN DMI
version = 4.0
	width = 32
	height = 32
state = \"walk\"
	dirs = 4
	frames = 2
	delay = 1,2
state = \"dead\"
	dirs = 1
	frames = 1
# END DMI";

	#[test]
	fn test_frame_major_cropping() {
		let data = encode_dmi(TWO_STATES, &indexed_sheet(3, 3));
		let rsi = import_bytes(&data, &ConvertConfig::default()).unwrap();

		assert_eq!(rsi.size(), Size::new(32, 32));
		let walk = &rsi.states()[0];
		assert_eq!(walk.directions(), DirectionMode::Cardinal);
		assert_eq!(walk.population(), FramePopulation::Loaded);
		// frame 0 of every direction first, then frame 1
		assert_eq!(tile_value(walk, 0, 0), Some(0));
		assert_eq!(tile_value(walk, 3, 0), Some(3));
		assert_eq!(tile_value(walk, 0, 1), Some(4));
		assert_eq!(tile_value(walk, 3, 1), Some(7));
		assert_eq!(walk.delays().unwrap()[2], vec![1.0, 2.0]);

		let dead = &rsi.states()[1];
		assert_eq!(tile_value(dead, 0, 0), Some(8));
	}

	#[test]
	fn test_truncated_sheet() {
		// room for "walk" only
		let data = encode_dmi(TWO_STATES, &indexed_sheet(4, 2));
		let rsi = import_bytes(&data, &ConvertConfig::default()).unwrap();

		assert_eq!(rsi.states()[0].population(), FramePopulation::Loaded);
		assert_eq!(rsi.states()[1].population(), FramePopulation::Empty);
	}

	#[test]
	fn test_defaults_from_config() {
		let text = "# BEGIN DMI\nversion = 4.0\nwidth = 32\nheight = 32\nstate = \"a:b\"\n# END DMI";
		let data = encode_dmi(text, &indexed_sheet(1, 1));
		let config = ConvertConfig {
			replacement: '-',
			..ConvertConfig::new(Some("CC-BY-SA-3.0".into()), Some("Someone".into()))
		};

		let rsi = import_bytes(&data, &config).unwrap();
		assert_eq!(rsi.license(), Some("CC-BY-SA-3.0"));
		assert_eq!(rsi.copyright(), Some("Someone"));
		assert_eq!(rsi.states()[0].name(), "a-b");
	}

	#[test]
	fn test_no_dmi_tag() {
		let sheet = indexed_sheet(1, 1);
		let data = pixels::encode(&sheet).unwrap();
		let err = import_bytes(&data, &ConvertConfig::default()).unwrap_err();
		assert_eq!(err.parse_kind(), Some(ParseErrorKind::NoDmiTag));
	}

	#[test]
	fn test_zero_tile_size() {
		let data = encode_dmi("# BEGIN DMI\nversion = 4.0\nwidth = 0\nheight = 32\n# END DMI", &indexed_sheet(1, 1));
		let err = import_bytes(&data, &ConvertConfig::default()).unwrap_err();
		assert!(matches!(
			err,
			RsiError::InvalidTileSize {
				width: 0,
				height: 32
			}
		));
	}

	#[test]
	fn test_tile_larger_than_sheet() {
		let text = "# BEGIN DMI\nversion = 4.0\nwidth = 200000\nheight = 200000\nstate = \"a\"\n# END DMI";
		let data = encode_dmi(text, &indexed_sheet(1, 1));
		let err = import_bytes(&data, &ConvertConfig::default()).unwrap_err();
		assert!(matches!(
			err,
			RsiError::SheetTooSmall {
				sheet_width: 32,
				tile_width: 200_000,
				..
			}
		));
	}

	#[test]
	fn test_frames_limited_to_sheet() {
		let text = "# BEGIN DMI
version = 4.0
	width = 32
	height = 32
state = \"spin\"
	dirs = 4
	frames = 2000000000
	delay = 3,4
state = \"after\"
# END DMI";
		// 6 tiles: two full frames for "spin", nothing for "after"
		let data = encode_dmi(text, &indexed_sheet(3, 2));
		let rsi = import_bytes(&data, &ConvertConfig::default()).unwrap();

		let spin = &rsi.states()[0];
		assert_eq!(spin.frame_len(), 2);
		assert_eq!(spin.delays().unwrap()[0], vec![3.0, 4.0]);
		assert_eq!(tile_value(spin, 1, 1), Some(5));
		assert_eq!(spin.population(), FramePopulation::PartiallyLoaded);

		assert_eq!(rsi.states()[1].population(), FramePopulation::Empty);
	}

	#[test]
	fn test_not_a_png() {
		let err = import_bytes(b"GIF89a", &ConvertConfig::default()).unwrap_err();
		assert!(matches!(err, RsiError::Png(_)));
	}
}
