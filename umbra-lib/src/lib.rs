//! # Umbra-Lib
//! This is the `no_std` library of Umbra implementing the primitives of visual
//! secret sharing: one-bit [`Bitmap`](grid::Bitmap) grids with their boolean
//! compositing algebra and pixelcoding expansion, [`Moonfield`](phase::Moonfield)
//! phase grids for continuous tone, and the sharing engines that turn a
//! plaintext into a pad/ciphertext pair of shares.
//!
//! Superimposing the two shares (physically, on printed transparencies, or
//! simulated by a rendering collaborator) reconstructs the plaintext's visual
//! appearance. None of this is cryptographically strong by itself: the secrecy
//! of the scheme is only as good as the randomness fed into the pad.
//!
#![no_std]

extern crate alloc;

pub mod grid;
pub mod phase;
pub mod sharing;

pub use sharing::grey::GreyscaleSharing;
pub use sharing::mono::MonochromeSharing;
pub use sharing::SplitScheme;
