//! Benchmark helper utilities for rsi-rs
//!
//! This module generates synthetic DMI descriptions and sprite sheets so the
//! benchmarks do not depend on real asset files.

use image::{Rgba, RgbaImage};

/// Generates a DMI description with `states` states.
///
/// States cycle through 1, 4 and 8 directions and 1 to 4 frames, so the parser
/// sees every record shape.
pub fn generate_dmi_text(states: usize, tile: u32) -> String {
	let mut text = format!("# BEGIN DMI\nversion = 4.0\n\twidth = {tile}\n\theight = {tile}\n");

	for i in 0..states {
		let dirs = [1, 4, 8][i % 3];
		let frames = i % 4 + 1;

		text.push_str(&format!("state = \"state_{i}\"\n\tdirs = {dirs}\n\tframes = {frames}\n"));
		if frames > 1 {
			let delays: Vec<_> = (1..=frames).map(|d| d.to_string()).collect();
			text.push_str(&format!("\tdelay = {}\n", delays.join(",")));
		}
	}

	text.push_str("# END DMI\n");
	text
}

/// Total tiles the states of [`generate_dmi_text`] occupy.
pub fn generated_tile_count(states: usize) -> usize {
	(0..states).map(|i| [1, 4, 8][i % 3] * (i % 4 + 1)).sum()
}

/// Generates a square-ish sheet holding `tiles` tiles of `tile` pixels, each a distinct color.
pub fn generate_sheet(tiles: usize, tile: u32) -> RgbaImage {
	let columns = (tiles as f64).sqrt().ceil().max(1.0) as u32;
	let rows = (tiles as u32).div_ceil(columns).max(1);

	RgbaImage::from_fn(columns * tile, rows * tile, |x, y| {
		let index = (y / tile) * columns + x / tile;
		Rgba([index as u8, (index >> 8) as u8, (x % tile) as u8, 255])
	})
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// A handful of states
	pub const SMALL: usize = 8;
	/// Typical mob or item file
	pub const MEDIUM: usize = 64;
	/// Large clothing or tile atlas
	pub const LARGE: usize = 512;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_dmi_text() {
		let text = generate_dmi_text(3, 32);
		assert!(text.starts_with("# BEGIN DMI\nversion = 4.0"));
		assert_eq!(text.matches("state = ").count(), 3);
		assert!(text.contains("delay = 1,2\n"));
	}

	#[test]
	fn test_generate_sheet() {
		let tiles = generated_tile_count(sizes::SMALL);
		let sheet = generate_sheet(tiles, 32);
		let capacity = (sheet.width() / 32) * (sheet.height() / 32);
		assert!(capacity as usize >= tiles);
	}
}
