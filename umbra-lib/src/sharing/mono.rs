use rand::Rng;
use rand_core::OsRng;

use crate::grid::boolean::{or, xor};
use crate::grid::{Bitmap, GridError};
use crate::sharing::SplitScheme;

/// Sharing engine for monochrome pictures: XOR the plaintext against a
/// random pad, then pixelcode both halves into the distributable shares.
pub struct MonochromeSharing<R: Rng> {
	rng: R,
}

impl<R: Rng> MonochromeSharing<R> {
	pub fn new(rng: R) -> Self {
		MonochromeSharing { rng }
	}

	/// Take a plaintext bitmap and, optionally, a supposedly random pad of
	/// the same size (one is made up on the spot if not supplied). Return
	/// the pixelcoded versions of ciphertext and pad.
	pub fn encrypt(
		&mut self,
		plaintext: &Bitmap,
		pad: Option<&Bitmap>,
	) -> Result<(Bitmap, Bitmap), GridError> {
		let raw_pad = match pad {
			Some(supplied) => {
				if supplied.size() != plaintext.size() {
					return Err(GridError::SizeMismatch(plaintext.size(), supplied.size()))
				}
				supplied.clone()
			}
			None => {
				let (width, height) = plaintext.size();
				Bitmap::random(width, height, &mut self.rng)?
			}
		};
		let raw_ciphertext = xor(&[plaintext, &raw_pad])?;
		Ok((raw_ciphertext.pixelcode(), raw_pad.pixelcode()))
	}
}

impl MonochromeSharing<OsRng> {
	/// Engine over the operating system generator. Good enough to play
	/// around with, not to carry the secrecy of the scheme.
	pub fn insecure() -> Self {
		MonochromeSharing::new(OsRng)
	}
}

/// Decryption ought to happen without a computer, by superimposing the two
/// printed transparencies. This simulates that overlay: ink wherever either
/// share has ink.
pub fn decrypt(ciphertext: &Bitmap, pad: &Bitmap) -> Result<Bitmap, GridError> {
	or(&[ciphertext, pad])
}

impl<R: Rng> SplitScheme for MonochromeSharing<R> {
	type Source = Bitmap;
	type Share = Bitmap;
	type Error = GridError;

	fn split(&mut self, source: &Bitmap) -> Result<(Bitmap, Bitmap), GridError> {
		let (ciphertext, pad) = self.encrypt(source, None)?;
		Ok((pad, ciphertext))
	}
}
