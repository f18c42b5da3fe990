//! Pixel sizes, points and rectangles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tile size in pixels. Both dimensions are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
	/// Width in pixels
	pub x: u32,
	/// Height in pixels
	pub y: u32,
}

impl Size {
	/// Creates a new size.
	///
	/// # Panics
	///
	/// Panics if either dimension is zero.
	pub fn new(x: u32, y: u32) -> Self {
		assert!(x > 0 && y > 0, "Size dimensions must be positive, got {x}x{y}");
		Self {
			x,
			y,
		}
	}

	/// Creates a new size, or `None` if either dimension is zero.
	pub fn try_new(x: u32, y: u32) -> Option<Self> {
		(x > 0 && y > 0).then_some(Self {
			x,
			y,
		})
	}

	/// Builds a size from signed dimensions as found in legacy metadata.
	pub fn from_signed(x: i32, y: i32) -> Option<Self> {
		Self::try_new(u32::try_from(x).ok()?, u32::try_from(y).ok()?)
	}
}

impl Default for Size {
	fn default() -> Self {
		Self {
			x: 32,
			y: 32,
		}
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.x, self.y)
	}
}

/// A pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
	/// Horizontal offset
	pub x: u32,
	/// Vertical offset
	pub y: u32,
}

impl Point {
	/// Creates a new point.
	pub const fn new(x: u32, y: u32) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
	/// Left edge
	pub x: u32,
	/// Top edge
	pub y: u32,
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

impl Rect {
	/// Creates a new rectangle.
	pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Creates a tile-sized rectangle at `origin`.
	pub fn at(origin: Point, size: Size) -> Self {
		Self::new(origin.x, origin.y, size.x, size.y)
	}

	/// Top-left corner.
	pub fn origin(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Returns true if this rectangle lies entirely within a `width` x `height` area.
	pub fn fits_within(&self, width: u32, height: u32) -> bool {
		let right = u64::from(self.x) + u64::from(self.width);
		let bottom = u64::from(self.y) + u64::from(self.height);
		right <= u64::from(width) && bottom <= u64::from(height)
	}
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
	}
}
