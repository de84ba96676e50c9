use alloc::vec::Vec;

use rand::Rng;
use rand_core::OsRng;

pub mod dump;

/// Number of discrete rotation steps across a half turn. The luminosity of
/// the gap between two superimposed halfmoons ranges from 255 (white, the
/// moons coincide) to 0 (black, the moons cover the whole disc), so there are
/// 255 steps in pi and twice that in a full turn.
pub const DISCRETE_PI: u16 = 255;

/// Phase values live in 0..PHASE_MOD and all arithmetic on them wraps
/// modulo it.
pub const PHASE_MOD: u16 = 2 * DISCRETE_PI;

#[derive(Debug, PartialEq)]
pub enum FieldError {
	InvalidSize(usize, usize),
	OutOfBounds(usize, usize),
	SizeMismatch((usize, usize), (usize, usize)),
	Unfilled,
	Malformed,
}

/// A two-dimensional array of angles, 0,0 at NW. Each angle gives the phase
/// (rotation) of a black halfmoon around its cell centre as an integer in
/// 0..510. A moonfield starts out unfilled and becomes readable only once
/// every cell has been assigned through one of the fill operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Moonfield {
	width: usize,
	height: usize,
	cells: Option<Vec<u16>>,
}

impl Moonfield {
	/// Make an unfilled moonfield of the given size.
	pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
		if width == 0 || height == 0 {
			return Err(FieldError::InvalidSize(width, height))
		}
		Ok(Moonfield {
			width,
			height,
			cells: None,
		})
	}

	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	pub fn is_filled(&self) -> bool {
		self.cells.is_some()
	}

	/// Assign every cell the value of `filler` at its position, taken modulo
	/// 510. Negative filler values wrap, so `-1` stores 509.
	pub fn fill<F: FnMut(usize, usize) -> i32>(&mut self, mut filler: F) {
		let mut cells = Vec::with_capacity(self.width * self.height);
		for y in 0..self.height {
			for x in 0..self.width {
				cells.push(filler(x, y).rem_euclid(PHASE_MOD as i32) as u16);
			}
		}
		self.cells = Some(cells);
	}

	/// Fill with uniform random phases drawn from `rng`. As with
	/// [`Bitmap::random`](crate::grid::Bitmap::random), the secrecy of a pad
	/// filled this way is only as strong as the supplied generator.
	pub fn random_fill<R: Rng>(&mut self, rng: &mut R) {
		self.random_fill_range(rng, 0, PHASE_MOD - 1);
	}

	/// Fill with uniform random phases in `low..=high`.
	pub fn random_fill_range<R: Rng>(&mut self, rng: &mut R, low: u16, high: u16) {
		self.fill(|_, _| rng.gen_range(low..=high) as i32);
	}

	/// Random fill over the operating system generator. Demo grade.
	pub fn random_fill_insecure(&mut self) {
		self.random_fill(&mut OsRng);
	}

	pub fn get(&self, x: usize, y: usize) -> Result<u16, FieldError> {
		let cells = self.cells.as_ref().ok_or(FieldError::Unfilled)?;
		if x >= self.width || y >= self.height {
			return Err(FieldError::OutOfBounds(x, y))
		}
		Ok(cells[y * self.width + x])
	}

	/// Derive the companion moonfield that, superimposed on this one, shows
	/// the supplied greyscale picture: the gap between the two halfmoons at
	/// each cell comes out proportional to the grey level there. Grey 255
	/// (white) yields a zero offset from this field's phase and grey 0
	/// (black) the full half-turn offset of 255. The subtraction wraps with
	/// Euclidean modulo so negative differences land back in 0..510.
	pub fn complement_against(&self, img: &GreyMap) -> Result<Moonfield, FieldError> {
		let cells = self.cells.as_ref().ok_or(FieldError::Unfilled)?;
		if img.size() != (self.width, self.height) {
			return Err(FieldError::SizeMismatch((self.width, self.height), img.size()))
		}
		let complement = cells
			.iter()
			.zip(img.raw())
			.map(|(&phase, &grey)| {
				let offset = DISCRETE_PI as i32 - grey as i32;
				(phase as i32 - offset).rem_euclid(PHASE_MOD as i32) as u16
			})
			.collect();
		Ok(Moonfield {
			width: self.width,
			height: self.height,
			cells: Some(complement),
		})
	}

	pub(crate) fn raw(&self) -> Option<&[u16]> {
		self.cells.as_deref()
	}

	pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<u16>) -> Self {
		debug_assert_eq!(cells.len(), width * height);
		Moonfield {
			width,
			height,
			cells: Some(cells),
		}
	}
}

/// A greyscale picture as handed over by the image codec collaborator: one
/// byte per cell, 0 black to 255 white, row major from NW.
#[derive(Debug, Clone, PartialEq)]
pub struct GreyMap {
	width: usize,
	height: usize,
	levels: Vec<u8>,
}

impl GreyMap {
	pub fn new(width: usize, height: usize, levels: Vec<u8>) -> Result<Self, FieldError> {
		if width == 0 || height == 0 {
			return Err(FieldError::InvalidSize(width, height))
		}
		if levels.len() != width * height {
			return Err(FieldError::Malformed)
		}
		Ok(GreyMap {
			width,
			height,
			levels,
		})
	}

	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	pub fn get(&self, x: usize, y: usize) -> Result<u8, FieldError> {
		if x >= self.width || y >= self.height {
			return Err(FieldError::OutOfBounds(x, y))
		}
		Ok(self.levels[y * self.width + x])
	}

	pub(crate) fn raw(&self) -> &[u8] {
		&self.levels
	}
}
