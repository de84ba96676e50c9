use rand::Rng;
use rand_core::OsRng;

use crate::phase::{FieldError, GreyMap, Moonfield};
use crate::sharing::SplitScheme;

/// Sharing engine for greyscale pictures: a randomly phased pad moonfield
/// and its complement against the picture. Rendering the two fields'
/// halfmoons on top of each other shows the picture; that rendering is the
/// display collaborator's job, this engine only guarantees the phase
/// arithmetic.
pub struct GreyscaleSharing<R: Rng> {
	rng: R,
}

impl<R: Rng> GreyscaleSharing<R> {
	pub fn new(rng: R) -> Self {
		GreyscaleSharing { rng }
	}

	/// Generate a random pad moonfield of the given size.
	pub fn make_pad(&mut self, width: usize, height: usize) -> Result<Moonfield, FieldError> {
		let mut pad = Moonfield::new(width, height)?;
		pad.random_fill(&mut self.rng);
		Ok(pad)
	}

	/// Derive the cipher moonfield for a picture from an existing pad. Pure
	/// phase arithmetic, no randomness involved.
	pub fn make_cipher(&self, pad: &Moonfield, img: &GreyMap) -> Result<Moonfield, FieldError> {
		pad.complement_against(img)
	}
}

impl GreyscaleSharing<OsRng> {
	/// Engine over the operating system generator. Good enough to play
	/// around with, not to carry the secrecy of the scheme.
	pub fn insecure() -> Self {
		GreyscaleSharing::new(OsRng)
	}
}

impl<R: Rng> SplitScheme for GreyscaleSharing<R> {
	type Source = GreyMap;
	type Share = Moonfield;
	type Error = FieldError;

	fn split(&mut self, source: &GreyMap) -> Result<(Moonfield, Moonfield), FieldError> {
		let (width, height) = source.size();
		let pad = self.make_pad(width, height)?;
		let cipher = pad.complement_against(source)?;
		Ok((pad, cipher))
	}
}
