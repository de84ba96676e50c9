use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::phase::{FieldError, Moonfield, PHASE_MOD};

/// External form of a dumped moonfield. Dimensions travel as u32 so dumps
/// stay readable across pointer widths.
#[derive(Serialize, Deserialize, Debug)]
struct ExMoonfield {
	width: u32,
	height: u32,
	cells: Vec<u16>,
}

impl Moonfield {
	/// Dump a filled moonfield to bytes. Another moonfield, equal cell for
	/// cell, can later be rebuilt from them with [`Moonfield::from_bytes`].
	pub fn to_bytes(&self) -> Result<Vec<u8>, FieldError> {
		let cells = self.raw().ok_or(FieldError::Unfilled)?;
		let ex = ExMoonfield {
			width: self.size().0 as u32,
			height: self.size().1 as u32,
			cells: cells.to_vec(),
		};
		bincode::serialize(&ex).map_err(|_| FieldError::Malformed)
	}

	/// Rebuild a moonfield from a dump. The dump must decode, its cell count
	/// must agree with its dimensions and every phase must lie in 0..510.
	pub fn from_bytes(data: &[u8]) -> Result<Moonfield, FieldError> {
		let ex: ExMoonfield = bincode::deserialize(data).map_err(|_| FieldError::Malformed)?;
		let width = ex.width as usize;
		let height = ex.height as usize;
		if width == 0 || height == 0 {
			return Err(FieldError::InvalidSize(width, height))
		}
		if ex.cells.len() != width * height {
			return Err(FieldError::Malformed)
		}
		if ex.cells.iter().any(|&phase| phase >= PHASE_MOD) {
			return Err(FieldError::Malformed)
		}
		Ok(Moonfield::from_raw(width, height, ex.cells))
	}
}

#[cfg(test)]
mod dump_test {
	use crate::phase::{FieldError, Moonfield};

	#[test]
	fn dump_round_trip() {
		let mut field = Moonfield::new(7, 3).unwrap();
		field.random_fill_insecure();
		let bytes = field.to_bytes().unwrap();
		let rebuilt = Moonfield::from_bytes(&bytes).unwrap();
		assert_eq!(rebuilt, field)
	}

	#[test]
	fn unfilled_dump() {
		let field = Moonfield::new(2, 2).unwrap();
		assert_eq!(field.to_bytes().unwrap_err(), FieldError::Unfilled)
	}

	#[test]
	fn truncated_dump() {
		let mut field = Moonfield::new(4, 4).unwrap();
		field.random_fill_insecure();
		let mut bytes = field.to_bytes().unwrap();
		bytes.truncate(bytes.len() - 3);
		assert_eq!(Moonfield::from_bytes(&bytes).unwrap_err(), FieldError::Malformed)
	}

	#[test]
	fn garbage_dump() {
		assert_eq!(Moonfield::from_bytes(b"not a moonfield").unwrap_err(), FieldError::Malformed)
	}
}
