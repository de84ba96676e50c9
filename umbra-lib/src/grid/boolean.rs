use alloc::vec::Vec;

use crate::grid::{Bitmap, GridError};

/// The elementwise operations available for compositing bitmaps. All three
/// are commutative and associative; [`compose`] nevertheless folds its
/// operands strictly left to right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoolOp {
	And,
	Or,
	Xor,
}

impl BoolOp {
	fn apply(self, a: bool, b: bool) -> bool {
		match self {
			BoolOp::And => a & b,
			BoolOp::Or => a | b,
			BoolOp::Xor => a ^ b,
		}
	}
}

/// Fold `op` over the cells of all operands and return the resulting bitmap.
/// The operands are left untouched. The operand list must be non-empty and
/// all bitmaps must share the same size.
pub fn compose(op: BoolOp, operands: &[&Bitmap]) -> Result<Bitmap, GridError> {
	let first = match operands.first() {
		Some(d) => d,
		None => return Err(GridError::EmptyOperandSet),
	};
	let (width, height) = first.size();
	let mut cells: Vec<bool> = first.raw().to_vec();
	for operand in &operands[1..] {
		if operand.size() != (width, height) {
			return Err(GridError::SizeMismatch((width, height), operand.size()))
		}
		for (acc, &cell) in cells.iter_mut().zip(operand.raw()) {
			*acc = op.apply(*acc, cell);
		}
	}
	Ok(Bitmap::from_raw(width, height, cells))
}

pub fn and(operands: &[&Bitmap]) -> Result<Bitmap, GridError> {
	compose(BoolOp::And, operands)
}

pub fn or(operands: &[&Bitmap]) -> Result<Bitmap, GridError> {
	compose(BoolOp::Or, operands)
}

pub fn xor(operands: &[&Bitmap]) -> Result<Bitmap, GridError> {
	compose(BoolOp::Xor, operands)
}

/// Return the negative of a bitmap, obtained by swopping paper and ink at
/// every cell. Applying it twice gives back the original.
pub fn not(bitmap: &Bitmap) -> Bitmap {
	let (width, height) = bitmap.size();
	let cells = bitmap.raw().iter().map(|&cell| !cell).collect();
	Bitmap::from_raw(width, height, cells)
}

#[cfg(test)]
mod boolean_test {
	use crate::grid::boolean::{and, compose, not, or, xor, BoolOp};
	use crate::grid::{Bitmap, GridError};

	fn checker(width: usize, height: usize) -> Bitmap {
		let mut bitmap = Bitmap::new(width, height).unwrap();
		for x in 0..width {
			for y in 0..height {
				bitmap.set(x, y, (x + y) % 2 == 0).unwrap();
			}
		}
		bitmap
	}

	#[test]
	fn xor_round_trip() {
		let plain = checker(6, 4);
		let pad = Bitmap::random_insecure(6, 4).unwrap();
		let cipher = xor(&[&plain, &pad]).unwrap();
		let back = xor(&[&cipher, &pad]).unwrap();
		assert_eq!(back, plain)
	}

	#[test]
	fn xor_self_is_paper() {
		let bitmap = checker(5, 5);
		let blank = xor(&[&bitmap, &bitmap]).unwrap();
		assert_eq!(blank, Bitmap::new(5, 5).unwrap())
	}

	#[test]
	fn and_idempotent() {
		let bitmap = checker(5, 3);
		assert_eq!(and(&[&bitmap, &bitmap]).unwrap(), bitmap)
	}

	#[test]
	fn or_and_commute() {
		let a = checker(4, 4);
		let b = Bitmap::random_insecure(4, 4).unwrap();
		assert_eq!(or(&[&a, &b]).unwrap(), or(&[&b, &a]).unwrap());
		assert_eq!(and(&[&a, &b]).unwrap(), and(&[&b, &a]).unwrap())
	}

	#[test]
	fn xor_associates() {
		let a = checker(3, 3);
		let b = Bitmap::random_insecure(3, 3).unwrap();
		let c = Bitmap::random_insecure(3, 3).unwrap();
		let left = xor(&[&xor(&[&a, &b]).unwrap(), &c]).unwrap();
		let all = xor(&[&a, &b, &c]).unwrap();
		assert_eq!(left, all)
	}

	#[test]
	fn not_involution() {
		let bitmap = checker(4, 2);
		assert_eq!(not(&not(&bitmap)), bitmap)
	}

	#[test]
	fn single_operand_is_copy() {
		let bitmap = checker(2, 2);
		assert_eq!(compose(BoolOp::Or, &[&bitmap]).unwrap(), bitmap)
	}

	#[test]
	fn empty_operands() {
		let err = compose(BoolOp::And, &[]).unwrap_err();
		assert_eq!(err, GridError::EmptyOperandSet)
	}

	#[test]
	fn size_mismatch() {
		let a = Bitmap::new(2, 2).unwrap();
		let b = Bitmap::new(2, 3).unwrap();
		let err = or(&[&a, &b]).unwrap_err();
		assert_eq!(err, GridError::SizeMismatch((2, 2), (2, 3)))
	}
}
