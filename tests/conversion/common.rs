//! Fixtures shared by the conversion tests.

use std::{fs, path::Path};

use image::{Rgba, RgbaImage};

/// Tile edge used by every fixture.
pub(crate) const TILE: u32 = 32;

/// A sheet of `columns` x `rows` tiles; the red channel of each tile is its linear index.
pub(crate) fn indexed_sheet(columns: u32, rows: u32) -> RgbaImage {
	RgbaImage::from_fn(columns * TILE, rows * TILE, |x, y| {
		let index = (y / TILE * columns + x / TILE) as u8;
		Rgba([index, 0x40, 0x80, 0xFF])
	})
}

/// Linear index stored in a cropped tile.
pub(crate) fn tile_index(tile: &RgbaImage) -> u8 {
	tile.get_pixel(0, 0).0[0]
}

/// Encodes `sheet` as a DMI PNG whose zTXt `Description` chunk holds `text`.
pub(crate) fn encode_dmi(text: &str, sheet: &RgbaImage) -> Vec<u8> {
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

/// Writes a DMI file into `dir` and returns its path.
pub(crate) fn write_dmi(dir: &Path, name: &str, text: &str, sheet: &RgbaImage) -> std::path::PathBuf {
	let path = dir.join(name);
	fs::write(&path, encode_dmi(text, sheet)).unwrap();
	path
}

/// A DMI description with one 4-direction, single-frame state and no delays.
pub(crate) const FOUR_DIRECTIONS: &str = "# BEGIN DMI
version = 4.0
	width = 32
	height = 32
state = \"body\"
	dirs = 4
	frames = 1
# END DMI
";

/// A DMI description with an animated state followed by a still one.
pub(crate) const ANIMATED: &str = "# BEGIN DMI
version = 4.0
	width = 32
	height = 32
state = \"walk\"
	dirs = 4
	frames = 3
	delay = 1,1,2
	loop = 0
state = \"dead\"
	dirs = 1
	frames = 1
# END DMI
";
