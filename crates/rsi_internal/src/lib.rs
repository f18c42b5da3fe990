//! This module is separated into its own crate to give `rsi-rs` a stable re-export layer, and should not be used directly.

/// `use rsi_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export rsi_types for convenience
pub use rsi_types;

// Re-export commonly used types at crate root
pub use rsi_types::{
	config::{ConvertConfig, SaveConfig},
	error::RsiError,
	rsi::{Rsi, state::RsiState},
	source::Source,
};
