//! Sheet geometry: where frames live inside packed sprite sheets.
//!
//! Two layouts are handled here:
//!
//! - **RSI sheets** are direction-major: every frame of direction 0, then every
//!   frame of direction 1, and so on. The per-direction frame counts come from
//!   the state's delay table.
//! - **DMI sheets** are frame-major: frame 0 of every direction, then frame 1,
//!   with all states packed back to back from a running offset.
//!
//! Tiles are read left-to-right, top-to-bottom in both cases. Anything that
//! would land outside the sheet is reported as `None`, which callers treat as
//! "no pixel data for this slot".
//!
//! # Re-packing
//!
//! ```text
//! n = 5 occupied slots, pack_grid(5) = (3 rows, 2 columns)
//!
//! +----+----+
//! | 0  | 1  |
//! +----+----+
//! | 2  | 3  |
//! +----+----+
//! | 4  |    |
//! +----+----+
//! ```

use crate::size::{Point, Rect, Size};

/// Index of the first frame of `direction` within a direction-major sheet.
///
/// Sums the frame counts of every preceding direction. Without a delay table
/// every direction has exactly one frame, so the index is the direction itself.
/// Returns `None` when the delay table does not cover `direction`.
pub fn first_frame_index_for(delays: Option<&[Vec<f32>]>, direction: usize) -> Option<usize> {
	match delays {
		Some(table) if !table.is_empty() => {
			if direction >= table.len() {
				return None;
			}
			Some(table[..direction].iter().map(Vec::len).sum())
		}
		_ => Some(direction),
	}
}

/// Number of frames `direction` declares, or 1 without a delay table.
pub fn frame_count_for(delays: Option<&[Vec<f32>]>, direction: usize) -> Option<usize> {
	match delays {
		Some(table) if !table.is_empty() => table.get(direction).map(Vec::len),
		_ => Some(1),
	}
}

/// Pixel position of the tile at `linear_index` in a sheet `sheet_width_in_tiles` wide.
///
/// # Panics
///
/// Panics if `sheet_width_in_tiles` is zero.
pub fn coordinates_for_frame(tile: Size, linear_index: usize, sheet_width_in_tiles: u32) -> Point {
	assert!(sheet_width_in_tiles > 0, "sheet must be at least one tile wide");

	let row_width = u64::from(sheet_width_in_tiles) * u64::from(tile.x);
	let offset = linear_index as u64 * u64::from(tile.x);
	let x = offset % row_width;
	let y = offset / row_width * u64::from(tile.y);

	Point::new(x as u32, y as u32)
}

/// Rectangle of the tile at `linear_index`, or `None` if it falls outside the sheet.
pub fn tile_rectangle(tile: Size, linear_index: usize, sheet_width: u32, sheet_height: u32) -> Option<Rect> {
	let sheet_width_in_tiles = sheet_width / tile.x;
	if sheet_width_in_tiles == 0 {
		return None;
	}

	let rows = u64::from(sheet_height / tile.y);
	if linear_index as u64 >= rows * u64::from(sheet_width_in_tiles) {
		return None;
	}

	let rect = Rect::at(coordinates_for_frame(tile, linear_index, sheet_width_in_tiles), tile);
	rect.fits_within(sheet_width, sheet_height).then_some(rect)
}

/// Rectangle of the first frame of `direction` in a direction-major sheet.
pub fn first_frame_rectangle_for(
	delays: Option<&[Vec<f32>]>,
	tile: Size,
	direction: usize,
	sheet_width: u32,
	sheet_height: u32,
) -> Option<Rect> {
	frame_rectangle_for(delays, tile, direction, 0, sheet_width, sheet_height)
}

/// Rectangle of `frame` of `direction` in a direction-major sheet.
///
/// Returns `None` if the delay table does not declare that frame or the sheet
/// is too small to contain it.
pub fn frame_rectangle_for(
	delays: Option<&[Vec<f32>]>,
	tile: Size,
	direction: usize,
	frame: usize,
	sheet_width: u32,
	sheet_height: u32,
) -> Option<Rect> {
	let first = first_frame_index_for(delays, direction)?;
	if frame >= frame_count_for(delays, direction)? {
		return None;
	}

	tile_rectangle(tile, first + frame, sheet_width, sheet_height)
}

/// Linear tile index of (`direction`, `frame`) in a frame-major DMI sheet.
///
/// `offset` is the number of tiles consumed by every preceding state.
#[inline]
pub fn legacy_frame_index(offset: usize, directions: usize, direction: usize, frame: usize) -> usize {
	offset + frame * directions + direction
}

/// Near-square grid for `images` tiles, as `(rows, columns)`.
///
/// `rows = ceil(sqrt(n))` and `columns = round(sqrt(n))`; rows are added if the
/// rounded column count ever leaves too few cells.
pub fn pack_grid(images: usize) -> (u32, u32) {
	if images == 0 {
		return (0, 0);
	}

	let sqrt = (images as f64).sqrt();
	let mut rows = sqrt.ceil() as u32;
	let columns = (sqrt.round() as u32).max(1);

	while (rows as usize) * (columns as usize) < images {
		rows += 1;
	}

	(rows, columns)
}

/// Target placement of every occupied slot in a re-packed sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
	/// Grid rows
	pub rows: u32,
	/// Grid columns
	pub columns: u32,
	/// Sheet width in pixels
	pub width: u32,
	/// Sheet height in pixels
	pub height: u32,
	/// Top-left corner of each packed tile, in packing order
	pub positions: Vec<Point>,
}

impl PackLayout {
	/// Lays out `images` tiles of `tile` size on a [`pack_grid`] grid.
	pub fn new(tile: Size, images: usize) -> Self {
		let (rows, columns) = pack_grid(images);
		let positions = (0..images)
			.map(|i| {
				let column = i as u32 % columns;
				let row = i as u32 / columns;
				Point::new(column * tile.x, row * tile.y)
			})
			.collect();

		Self {
			rows,
			columns,
			width: columns * tile.x,
			height: rows * tile.y,
			positions,
		}
	}

	/// Number of tiles placed.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// Returns true if nothing was placed.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}
