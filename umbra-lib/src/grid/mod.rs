use alloc::vec::Vec;

use rand::Rng;
use rand_core::OsRng;

pub mod boolean;
pub mod expand;

#[derive(Debug, PartialEq)]
pub enum GridError {
	InvalidSize(usize, usize),
	OutOfBounds(usize, usize),
	SizeMismatch((usize, usize), (usize, usize)),
	EmptyOperandSet,
}

/// A two-dimensional one-bit-deep bitmap. The coordinate system has 0,0 at NW
/// and width-1, height-1 at SE. A cell holds `false` for white paper and
/// `true` for black ink.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
	width: usize,
	height: usize,
	cells: Vec<bool>,
}

impl Bitmap {
	/// Make an all-paper bitmap of the given size.
	pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
		if width == 0 || height == 0 {
			return Err(GridError::InvalidSize(width, height))
		}
		Ok(Bitmap {
			width,
			height,
			cells: alloc::vec![false; width * height],
		})
	}

	/// Make a bitmap of the given size with every cell drawn from `rng`.
	/// The scheme's secrecy is only as strong as this generator, so
	/// secrecy-bearing callers must pass a cryptographically strong one.
	pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Self, GridError> {
		let mut bitmap = Bitmap::new(width, height)?;
		for cell in bitmap.cells.iter_mut() {
			*cell = rng.gen();
		}
		Ok(bitmap)
	}

	/// Random bitmap over the operating system generator. Fine for demos,
	/// not a statement about the secrecy of the resulting shares.
	pub fn random_insecure(width: usize, height: usize) -> Result<Self, GridError> {
		Bitmap::random(width, height, &mut OsRng)
	}

	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	pub fn get(&self, x: usize, y: usize) -> Result<bool, GridError> {
		if x >= self.width || y >= self.height {
			return Err(GridError::OutOfBounds(x, y))
		}
		Ok(self.cells[y * self.width + x])
	}

	pub fn set(&mut self, x: usize, y: usize, ink: bool) -> Result<(), GridError> {
		if x >= self.width || y >= self.height {
			return Err(GridError::OutOfBounds(x, y))
		}
		self.cells[y * self.width + x] = ink;
		Ok(())
	}

	pub(crate) fn raw(&self) -> &[bool] {
		&self.cells
	}

	pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<bool>) -> Self {
		debug_assert_eq!(cells.len(), width * height);
		Bitmap { width, height, cells }
	}
}

#[cfg(test)]
mod bitmap_test {
	use crate::grid::{Bitmap, GridError};

	#[test]
	fn new_is_all_paper() {
		let bitmap = Bitmap::new(3, 2).unwrap();
		for x in 0..3 {
			for y in 0..2 {
				assert!(!bitmap.get(x, y).unwrap())
			}
		}
	}

	#[test]
	fn zero_dimension() {
		let err = Bitmap::new(0, 4).unwrap_err();
		assert_eq!(err, GridError::InvalidSize(0, 4))
	}

	#[test]
	fn set_get() {
		let mut bitmap = Bitmap::new(4, 4).unwrap();
		bitmap.set(2, 3, true).unwrap();
		assert!(bitmap.get(2, 3).unwrap());
		bitmap.set(2, 3, false).unwrap();
		assert!(!bitmap.get(2, 3).unwrap())
	}

	#[test]
	fn out_of_bounds() {
		let mut bitmap = Bitmap::new(2, 2).unwrap();
		assert_eq!(bitmap.get(2, 0).unwrap_err(), GridError::OutOfBounds(2, 0));
		assert_eq!(bitmap.set(0, 5, true).unwrap_err(), GridError::OutOfBounds(0, 5))
	}

	#[test]
	fn random_size() {
		let bitmap = Bitmap::random_insecure(5, 7).unwrap();
		assert_eq!(bitmap.size(), (5, 7))
	}
}
