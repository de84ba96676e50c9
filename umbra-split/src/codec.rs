use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma};
use thiserror::Error;

use umbra_lib::grid::{Bitmap, GridError};
use umbra_lib::phase::{FieldError, GreyMap};

/// Luma below this is taken as ink when thresholding a raster to bilevel.
pub const INK_THRESHOLD: u8 = 128;

#[derive(Debug, Error)]
pub enum ToolError {
	#[error("grid operation failed: {0:?}")]
	Grid(GridError),
	#[error("moonfield operation failed: {0:?}")]
	Field(FieldError),
	#[error("cannot derive share names from {0:?}: need a file stem and an extension")]
	ShareNames(PathBuf),
}

impl From<GridError> for ToolError {
	fn from(err: GridError) -> Self {
		ToolError::Grid(err)
	}
}

impl From<FieldError> for ToolError {
	fn from(err: FieldError) -> Self {
		ToolError::Field(err)
	}
}

/// Threshold a raster to a bilevel bitmap: dark luma becomes ink.
pub fn bitmap_from_image(img: &DynamicImage) -> Result<Bitmap, ToolError> {
	let luma = img.to_luma8();
	let (width, height) = luma.dimensions();
	let mut bitmap = Bitmap::new(width as usize, height as usize)?;
	for (x, y, pixel) in luma.enumerate_pixels() {
		bitmap.set(x as usize, y as usize, pixel.0[0] < INK_THRESHOLD)?;
	}
	Ok(bitmap)
}

/// Render a bitmap as an 8-bit raster, ink black on white paper.
pub fn bitmap_to_image(bitmap: &Bitmap) -> GrayImage {
	let (width, height) = bitmap.size();
	GrayImage::from_fn(width as u32, height as u32, |x, y| {
		// the buffer is built over the bitmap's own extent, so get stays in bounds
		match bitmap.get(x as usize, y as usize) {
			Ok(true) => Luma([0u8]),
			_ => Luma([255u8]),
		}
	})
}

/// Take a raster as the greyscale source for the greyscale engine.
pub fn greymap_from_image(img: &DynamicImage) -> Result<GreyMap, ToolError> {
	let luma = img.to_luma8();
	let (width, height) = luma.dimensions();
	Ok(GreyMap::new(width as usize, height as usize, luma.into_raw())?)
}

/// Derive an output name from the input picture's name: `picture.png` with
/// suffix `1` becomes `picture_1.png`. An explicit extension overrides the
/// picture's own (the greyscale shares go out as vector pages, not rasters).
pub fn derived_name(image: &Path, suffix: &str, extension: Option<&str>) -> Result<PathBuf, ToolError> {
	let stem = image.file_stem().and_then(|s| s.to_str());
	let ext = match extension {
		Some(e) => Some(e.to_owned()),
		None => image.extension().and_then(|s| s.to_str()).map(|s| s.to_owned()),
	};
	match (stem, ext) {
		(Some(stem), Some(ext)) => {
			Ok(image.with_file_name(format!("{}_{}.{}", stem, suffix, ext)))
		}
		_ => Err(ToolError::ShareNames(image.to_path_buf())),
	}
}

/// The two share file names for a picture: `<stem>_1` and `<stem>_2`.
pub fn share_names(image: &Path, extension: Option<&str>) -> Result<(PathBuf, PathBuf), ToolError> {
	Ok((
		derived_name(image, "1", extension)?,
		derived_name(image, "2", extension)?,
	))
}

#[cfg(test)]
mod codec_test {
	use super::{bitmap_from_image, bitmap_to_image, greymap_from_image, share_names};
	use image::{DynamicImage, GrayImage, Luma};
	use std::path::Path;

	fn gradient() -> DynamicImage {
		let buffer = GrayImage::from_fn(8, 4, |x, y| Luma([(x * 32 + y) as u8]));
		DynamicImage::ImageLuma8(buffer)
	}

	#[test]
	fn threshold_splits_at_128() {
		let bitmap = bitmap_from_image(&gradient()).unwrap();
		assert!(bitmap.get(0, 0).unwrap());
		assert!(!bitmap.get(7, 0).unwrap())
	}

	#[test]
	fn bitmap_raster_round_trip() {
		let bitmap = bitmap_from_image(&gradient()).unwrap();
		let raster = DynamicImage::ImageLuma8(bitmap_to_image(&bitmap));
		let back = bitmap_from_image(&raster).unwrap();
		assert_eq!(back, bitmap)
	}

	#[test]
	fn greymap_keeps_levels() {
		let map = greymap_from_image(&gradient()).unwrap();
		assert_eq!(map.size(), (8, 4));
		assert_eq!(map.get(3, 2).unwrap(), 98)
	}

	#[test]
	fn share_names_from_extension() {
		let (one, two) = share_names(Path::new("pics/guido.png"), None).unwrap();
		assert_eq!(one, Path::new("pics/guido_1.png"));
		assert_eq!(two, Path::new("pics/guido_2.png"))
	}

	#[test]
	fn share_names_override() {
		let (one, two) = share_names(Path::new("guido.png"), Some("svg")).unwrap();
		assert_eq!(one, Path::new("guido_1.svg"));
		assert_eq!(two, Path::new("guido_2.svg"))
	}

	#[test]
	fn share_names_need_extension() {
		assert!(share_names(Path::new("guido"), None).is_err())
	}
}
