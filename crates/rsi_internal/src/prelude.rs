//! Prelude module for `rsi_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use rsi_internal::prelude::*;
//!
//! let metadata = Metadata::from_text("version = 4.0\nwidth = 32\nheight = 32\nstate = \"idle\"").unwrap();
//! assert_eq!(metadata.states().len(), 1);
//! assert_eq!(pack_grid(5), (3, 2));
//! ```

// Re-export everything from rsi_types::prelude
#[doc(inline)]
pub use rsi_types::prelude::*;

// Re-export the entire rsi_types module for advanced usage
#[doc(inline)]
pub use rsi_types;
