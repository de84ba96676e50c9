use crate::grid::Bitmap;

impl Bitmap {
	/// Return a new bitmap, twice as big linearly, by pixelcoding every cell
	/// into a grid of 4 cells. Each source cell becomes a 2x2 block with the
	/// cell's value on the main diagonal and its negation on the other, so
	/// every block carries exactly two ink cells and, seen alone, gives away
	/// nothing about the source. This expansion is the core trick of visual
	/// cryptography.
	pub fn pixelcode(&self) -> Bitmap {
		let (width, height) = self.size();
		let out_width = width * 2;
		let mut cells = alloc::vec![false; out_width * height * 2];
		for y in 0..height {
			for x in 0..width {
				let value = self.raw()[y * width + x];
				cells[2 * y * out_width + 2 * x] = value;
				cells[2 * y * out_width + 2 * x + 1] = !value;
				cells[(2 * y + 1) * out_width + 2 * x] = !value;
				cells[(2 * y + 1) * out_width + 2 * x + 1] = value;
			}
		}
		Bitmap::from_raw(out_width, height * 2, cells)
	}
}

#[cfg(test)]
mod pixelcode_test {
	use crate::grid::Bitmap;

	#[test]
	fn doubles_linearly() {
		let bitmap = Bitmap::new(3, 5).unwrap();
		assert_eq!(bitmap.pixelcode().size(), (6, 10))
	}

	#[test]
	fn block_pattern() {
		let mut bitmap = Bitmap::new(2, 2).unwrap();
		bitmap.set(1, 0, true).unwrap();
		let coded = bitmap.pixelcode();
		for x in 0..2 {
			for y in 0..2 {
				let value = bitmap.get(x, y).unwrap();
				assert_eq!(coded.get(2 * x, 2 * y).unwrap(), value);
				assert_eq!(coded.get(2 * x + 1, 2 * y + 1).unwrap(), value);
				assert_eq!(coded.get(2 * x + 1, 2 * y).unwrap(), !value);
				assert_eq!(coded.get(2 * x, 2 * y + 1).unwrap(), !value);
			}
		}
	}

	#[test]
	fn blocks_are_half_ink() {
		let bitmap = Bitmap::random_insecure(4, 4).unwrap();
		let coded = bitmap.pixelcode();
		for x in 0..4 {
			for y in 0..4 {
				let mut ink = 0;
				for (dx, dy) in &[(0, 0), (1, 0), (0, 1), (1, 1)] {
					if coded.get(2 * x + dx, 2 * y + dy).unwrap() {
						ink += 1;
					}
				}
				assert_eq!(ink, 2)
			}
		}
	}
}
