//! Sprite sources that resolve to an [`Rsi`].
//!
//! Code past this boundary only ever sees the canonical [`Rsi`]; whether it came
//! from a DMI file or an RSI directory is decided here once.

use std::{
	fmt,
	path::{Path, PathBuf},
};

use crate::{
	config::ConvertConfig,
	dmi,
	error::RsiError,
	rsi::{
		Rsi,
		io::{Loaded, META_FILE},
	},
};

/// File extension of DMI files.
pub const DMI_EXTENSION: &str = "dmi";

/// Directory extension of RSIs.
pub const RSI_EXTENSION: &str = "rsi";

/// Where sprite data is read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
	/// A legacy `.dmi` PNG
	Dmi(PathBuf),
	/// An `.rsi` directory with `meta.json`
	Rsi(PathBuf),
}

impl Source {
	/// Classifies `path`: a directory holding `meta.json` is an RSI, a file with
	/// the `dmi` extension (any case) is a DMI.
	pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
		let path = path.as_ref();

		if path.is_dir() {
			return path.join(META_FILE).is_file().then(|| Self::Rsi(path.to_path_buf()));
		}

		let is_dmi = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case(DMI_EXTENSION));
		(is_dmi && path.is_file()).then(|| Self::Dmi(path.to_path_buf()))
	}

	/// Path of the source.
	pub fn path(&self) -> &Path {
		match self {
			Self::Dmi(path) | Self::Rsi(path) => path,
		}
	}

	/// Reads the source into an [`Rsi`].
	///
	/// `config` applies to DMI conversion only. DMI sources never produce warnings.
	///
	/// # Errors
	///
	/// Returns the underlying import or open error.
	pub fn load(&self, config: &ConvertConfig) -> Result<Loaded, RsiError> {
		match self {
			Self::Dmi(path) => Ok(Loaded {
				rsi: dmi::import_file(path, config)?,
				warnings: Vec::new(),
			}),
			Self::Rsi(path) => Rsi::open(path),
		}
	}
}

impl fmt::Display for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Dmi(path) => write!(f, "DMI {}", path.display()),
			Self::Rsi(path) => write!(f, "RSI {}", path.display()),
		}
	}
}
