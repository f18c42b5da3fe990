//! Pixel buffer operations used by the codec.
//!
//! Frames are plain [`RgbaImage`] buffers; PNG compression is delegated to the
//! `image` crate.

use std::io::Cursor;

use image::{
	ColorType, ImageError, ImageFormat, ImageResult, Limits, RgbaImage,
	error::{LimitError, LimitErrorKind},
	imageops,
};

use crate::size::{Point, Rect, Size};

/// Decodes PNG bytes into an RGBA buffer.
pub fn decode(bytes: &[u8]) -> ImageResult<RgbaImage> {
	Ok(image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8())
}

/// Reads and decodes a PNG file into an RGBA buffer.
pub fn open(path: impl AsRef<std::path::Path>) -> ImageResult<RgbaImage> {
	Ok(image::open(path)?.to_rgba8())
}

/// Encodes an RGBA buffer as PNG bytes.
pub fn encode(image: &RgbaImage) -> ImageResult<Vec<u8>> {
	let mut buffer = Cursor::new(Vec::new());
	image.write_to(&mut buffer, ImageFormat::Png)?;
	Ok(buffer.into_inner())
}

/// Copies the pixels under `rect` into a new buffer.
///
/// The rectangle is clamped to the source bounds by the underlying view, so
/// callers should check bounds first when an exact tile size matters.
pub fn crop(image: &RgbaImage, rect: Rect) -> RgbaImage {
	imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image()
}

/// Copies `source` onto `target` with its top-left corner at `at`, without blending.
pub fn composite(target: &mut RgbaImage, source: &RgbaImage, at: Point) {
	imageops::replace(target, source, i64::from(at.x), i64::from(at.y));
}

/// A fully transparent buffer of `size`.
pub fn transparent(size: Size) -> RgbaImage {
	RgbaImage::new(size.x, size.y)
}

/// Checks that an RGBA buffer of `width` x `height` fits the default `image`
/// allocation limit, returning the dimensions as `u32`.
///
/// # Errors
///
/// Returns [`ImageError::Limits`] if a dimension overflows `u32` or the buffer
/// is too large.
pub fn check_buffer(width: u64, height: u64) -> ImageResult<(u32, u32)> {
	let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
		return Err(ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)));
	};

	Limits::default().reserve_buffer(width, height, ColorType::Rgba8)?;
	Ok((width, height))
}

/// A fully transparent buffer, refused past the default allocation limit.
///
/// # Errors
///
/// See [`check_buffer`].
pub fn try_transparent(width: u64, height: u64) -> ImageResult<RgbaImage> {
	let (width, height) = check_buffer(width, height)?;
	Ok(RgbaImage::new(width, height))
}
