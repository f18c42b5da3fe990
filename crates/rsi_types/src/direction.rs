//! Direction sets and facing slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of direction slots every state reserves, regardless of its mode.
pub const MAX_DIRECTIONS: usize = 8;

/// How many facing angles a state has.
///
/// Serialised as the plain direction count (`1`, `4` or `8`), matching both
/// the RSI `directions` field and the DMI `dirs` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DirectionMode {
	/// A single facing
	#[default]
	None,
	/// South, north, east, west
	Cardinal,
	/// The cardinals followed by the four diagonals
	Diagonal,
}

impl DirectionMode {
	/// Builds a mode from its direction count.
	pub fn from_count(count: u8) -> Option<Self> {
		match count {
			1 => Some(Self::None),
			4 => Some(Self::Cardinal),
			8 => Some(Self::Diagonal),
			_ => None,
		}
	}

	/// Number of directions this mode occupies.
	#[inline]
	pub fn count(self) -> usize {
		match self {
			Self::None => 1,
			Self::Cardinal => 4,
			Self::Diagonal => 8,
		}
	}

	/// Iterates over the directions this mode occupies, in sheet order.
	pub fn directions(self) -> impl Iterator<Item = Direction> {
		Direction::ALL.into_iter().take(self.count())
	}
}

impl TryFrom<u8> for DirectionMode {
	type Error = String;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		Self::from_count(value).ok_or_else(|| format!("invalid direction count {value}, expected 1, 4 or 8"))
	}
}

impl From<DirectionMode> for u8 {
	fn from(mode: DirectionMode) -> Self {
		mode.count() as u8
	}
}

impl fmt::Display for DirectionMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::None => write!(f, "None (1)"),
			Self::Cardinal => write!(f, "Cardinal (4)"),
			Self::Diagonal => write!(f, "Diagonal (8)"),
		}
	}
}

/// A facing slot. The discriminant is the slot's position in a state's sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
	/// Facing the viewer
	South = 0,
	/// Facing away
	North = 1,
	/// Facing right
	East = 2,
	/// Facing left
	West = 3,
	/// Down-right
	SouthEast = 4,
	/// Down-left
	SouthWest = 5,
	/// Up-right
	NorthEast = 6,
	/// Up-left
	NorthWest = 7,
}

impl Direction {
	/// Every direction in slot order.
	pub const ALL: [Direction; MAX_DIRECTIONS] = [
		Self::South,
		Self::North,
		Self::East,
		Self::West,
		Self::SouthEast,
		Self::SouthWest,
		Self::NorthEast,
		Self::NorthWest,
	];

	/// Converts a slot index to a direction.
	pub fn from_index(index: usize) -> Option<Self> {
		Self::ALL.get(index).copied()
	}

	/// Slot index of this direction.
	#[inline]
	pub fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::South => "South",
			Self::North => "North",
			Self::East => "East",
			Self::West => "West",
			Self::SouthEast => "SouthEast",
			Self::SouthWest => "SouthWest",
			Self::NorthEast => "NorthEast",
			Self::NorthWest => "NorthWest",
		};
		f.pad(name)
	}
}
