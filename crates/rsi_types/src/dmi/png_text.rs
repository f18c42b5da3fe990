//! Extraction of the DMI description from PNG text chunks.

use std::io::Cursor;

use log::warn;

use crate::error::RsiError;

/// Marker that identifies DMI metadata inside a text chunk.
pub const DMI_HEADER: &str = "BEGIN DMI";

/// Returns the text of the first tEXt, zTXt or iTXt chunk containing [`DMI_HEADER`].
///
/// Only chunks that precede the image data are inspected; DMI writers always
/// place the description there.
///
/// # Errors
///
/// Returns an error if `data` is not a readable PNG stream.
pub fn find_dmi_text(data: &[u8]) -> Result<Option<String>, RsiError> {
	let decoder = png::Decoder::new(Cursor::new(data));
	let reader = decoder.read_info()?;
	let info = reader.info();

	for chunk in &info.uncompressed_latin1_text {
		if chunk.text.contains(DMI_HEADER) {
			return Ok(Some(chunk.text.clone()));
		}
	}

	for chunk in &info.compressed_latin1_text {
		match chunk.get_text() {
			Ok(text) if text.contains(DMI_HEADER) => return Ok(Some(text)),
			Ok(_) => {}
			Err(e) => warn!("Cannot inflate zTXt chunk \"{}\": {}", chunk.keyword, e),
		}
	}

	for chunk in &info.utf8_text {
		match chunk.get_text() {
			Ok(text) if text.contains(DMI_HEADER) => return Ok(Some(text)),
			Ok(_) => {}
			Err(e) => warn!("Cannot read iTXt chunk \"{}\": {}", chunk.keyword, e),
		}
	}

	Ok(None)
}
