#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `rsi-rs` reads, converts and writes RSI sprite sheets, and imports legacy DMI files.
//!
pub use rsi_internal::*;
