//! Prelude module for `rsi_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use rsi_types::prelude::*;
//!
//! let mut rsi = Rsi::new(Size::new(32, 32));
//! rsi.add_state(RsiState::new("idle", DirectionMode::Cardinal, None, None));
//! assert_eq!(rsi.states()[0].population(), FramePopulation::Empty);
//! ```

#[doc(inline)]
pub use crate::{
	batch::{BatchReport, convert_directory},
	config::{ConvertConfig, SaveConfig},
	direction::{Direction, DirectionMode, MAX_DIRECTIONS},
	dmi::{LegacyState, LegacyVersion, Metadata, Tokenizer},
	error::{CodecError, ParseError, ParseErrorKind, RsiError},
	geometry::{PackLayout, pack_grid},
	history::{BoundedStack, DeletionHistory},
	rsi::{
		CURRENT_RSI_VERSION, Rsi,
		io::Loaded,
		state::{FramePopulation, RsiState},
	},
	size::{Point, Rect, Size},
	source::Source,
};

// Re-export modules for advanced usage
#[doc(inline)]
pub use crate::{dmi, geometry, rsi::json};
