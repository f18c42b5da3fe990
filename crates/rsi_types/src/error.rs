//! Error types for legacy metadata parsing, JSON metadata and RSI file handling.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Machine-checkable category of a legacy metadata parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
	/// No embedded `BEGIN DMI` text was found at all
	NoDmiTag,
	/// The first tuple is not a parsable `version=<float>`
	NoVersion,
	/// A non-comment line without `=`
	MalformedTuple,
	/// The version record ended up invalid (zero version or bad tile size)
	MalformedVersion,
}

impl fmt::Display for ParseErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoDmiTag => write!(f, "NoDmiTag"),
			Self::NoVersion => write!(f, "NoVersion"),
			Self::MalformedTuple => write!(f, "MalformedTuple"),
			Self::MalformedVersion => write!(f, "MalformedVersion"),
		}
	}
}

/// A failure while reading legacy DMI metadata.
///
/// Carries both a [`ParseErrorKind`] for callers that branch on the cause and
/// a human-readable message for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ParseError {
	kind: ParseErrorKind,
	message: String,
}

impl ParseError {
	/// Creates a new parse error.
	pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	/// Returns the error category.
	pub fn kind(&self) -> ParseErrorKind {
		self.kind
	}

	/// Returns the human-readable message.
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl ParseErrorKind {
	/// Attaches a message to this kind.
	pub fn with_message(self, message: impl Into<String>) -> ParseError {
		ParseError::new(self, message)
	}
}

/// Errors produced by the `meta.json` codec.
#[derive(Debug, Error)]
pub enum CodecError {
	/// The document has no `size` object
	#[error("meta.json has no size property")]
	MissingSizeProperty,

	/// The tile size has a zero dimension or is too large to allocate
	#[error("Invalid tile size {x}x{y}")]
	InvalidSize {
		/// Width in pixels
		x: u32,
		/// Height in pixels
		y: u32,
	},

	/// The document is not valid RSI JSON
	#[error("Malformed meta.json: {0}")]
	MalformedJson(#[from] serde_json::Error),
}

/// Unified error type for RSI and DMI file operations.
#[derive(Debug, Error)]
pub enum RsiError {
	/// Legacy metadata could not be parsed
	#[error(transparent)]
	Parse(#[from] ParseError),

	/// `meta.json` could not be read or written
	#[error(transparent)]
	Codec(#[from] CodecError),

	/// Pixel data could not be decoded or encoded
	#[error("Image error: {0}")]
	Image(#[from] image::ImageError),

	/// PNG chunk stream could not be read
	#[error("PNG error: {0}")]
	Png(#[from] png::DecodingError),

	/// A state's companion PNG is absent
	#[error("Missing image for state \"{state}\": {}", path.display())]
	MissingStateImage {
		/// State name
		state: String,
		/// Expected image path
		path: PathBuf,
	},

	/// State index outside the state list
	#[error("State index {index} out of range (total states: {len})")]
	StateIndexOutOfRange {
		/// Requested index
		index: usize,
		/// Number of states
		len: usize,
	},

	/// Tile size with a zero dimension
	#[error("Invalid tile size {width}x{height}")]
	InvalidTileSize {
		/// Width in pixels
		width: i64,
		/// Height in pixels
		height: i64,
	},

	/// Sheet narrower or shorter than a single tile
	#[error("Sheet {sheet_width}x{sheet_height} is smaller than tile {tile_width}x{tile_height}")]
	SheetTooSmall {
		/// Sheet width in pixels
		sheet_width: u32,
		/// Sheet height in pixels
		sheet_height: u32,
		/// Tile width in pixels
		tile_width: u32,
		/// Tile height in pixels
		tile_height: u32,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl RsiError {
	/// Returns the legacy parse category, if this is a parse failure.
	pub fn parse_kind(&self) -> Option<ParseErrorKind> {
		match self {
			Self::Parse(e) => Some(e.kind()),
			_ => None,
		}
	}
}
