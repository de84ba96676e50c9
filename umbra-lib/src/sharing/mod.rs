pub mod grey;
pub mod mono;

/// The common shape of a two-share splitting scheme: one source in, a pad
/// share and a cipher share out, in that order. Either share alone carries
/// no information about the source; superimposed they reconstruct its
/// visual appearance.
pub trait SplitScheme {
	type Source;
	type Share;
	type Error;

	fn split(&mut self, source: &Self::Source) -> Result<(Self::Share, Self::Share), Self::Error>;
}
