//! Converting a directory of DMI files.
//!
//! Files are converted one at a time. A file that fails is recorded in the
//! [`BatchReport`] and the loop moves on to the next one.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use log::{error, info};

use crate::{
	config::{ConvertConfig, SaveConfig},
	dmi,
	error::RsiError,
	source::{DMI_EXTENSION, RSI_EXTENSION},
};

/// Outcome of a directory conversion.
#[derive(Debug, Default)]
pub struct BatchReport {
	/// `(input, output)` of every converted file
	pub converted: Vec<(PathBuf, PathBuf)>,
	/// Inputs that failed, with the reason
	pub failed: Vec<(PathBuf, RsiError)>,
}

impl BatchReport {
	/// Number of files attempted.
	pub fn total(&self) -> usize {
		self.converted.len() + self.failed.len()
	}

	/// Returns true if nothing failed.
	pub fn is_success(&self) -> bool {
		self.failed.is_empty()
	}
}

/// Lists the `*.dmi` files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn collect_dmi_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		let is_dmi = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case(DMI_EXTENSION));
		if is_dmi && path.is_file() {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Output directory for `input` under `output_root`: `<stem>.rsi`.
pub fn output_path_for(input: &Path, output_root: &Path) -> PathBuf {
	let stem = input.file_stem().unwrap_or(input.as_os_str());
	let mut name = stem.to_os_string();
	name.push(".");
	name.push(RSI_EXTENSION);
	output_root.join(name)
}

/// Converts one DMI file into an RSI directory.
///
/// # Errors
///
/// Returns the import or save error.
pub fn convert_file(
	input: &Path,
	output: &Path,
	convert: &ConvertConfig,
	save: &SaveConfig,
) -> Result<(), RsiError> {
	let rsi = dmi::import_file(input, convert)?;
	rsi.save(output, save)
}

/// Converts every `*.dmi` file in `input` into `<stem>.rsi` directories under `output`.
///
/// # Errors
///
/// Only fails if `input` cannot be listed; per-file failures land in the report.
pub fn convert_directory(
	input: &Path,
	output: &Path,
	convert: &ConvertConfig,
	save: &SaveConfig,
) -> io::Result<BatchReport> {
	let files = collect_dmi_files(input)?;
	info!("Converting {} DMI files from {}", files.len(), input.display());

	let mut report = BatchReport::default();
	for (idx, path) in files.into_iter().enumerate() {
		let target = output_path_for(&path, output);
		match convert_file(&path, &target, convert, save) {
			Ok(()) => {
				info!("  [{}] {} -> {}", idx, path.display(), target.display());
				report.converted.push((path, target));
			}
			Err(e) => {
				error!("  [{}] {}: {}", idx, path.display(), e);
				report.failed.push((path, e));
			}
		}
	}

	info!("Converted {}/{} files", report.converted.len(), report.total());
	Ok(report)
}
