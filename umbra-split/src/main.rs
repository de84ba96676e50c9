use std::fs;
use std::path::{Path, PathBuf};

use structopt::StructOpt;
use tracing::{info, Level};

use umbra_lib::grid::Bitmap;
use umbra_lib::phase::Moonfield;
use umbra_lib::sharing::mono;
use umbra_lib::{GreyscaleSharing, MonochromeSharing, SplitScheme};

mod codec;
mod render;

use crate::codec::ToolError;

#[derive(Debug, StructOpt)]
#[structopt(
	name = "umbra-split",
	about = "Split pictures into visual secret sharing shares."
)]
enum Opt {
	/// Split a monochrome picture into two pixelcoded share rasters
	///
	/// Writes <stem>_1 (pad share) and <stem>_2 (cipher share) next to the
	/// input, keeping its extension. Superimposing prints of the two shares
	/// reveals the picture.
	Mono {
		/// Picture to split; dark pixels count as ink
		image: PathBuf,
		/// Also write <stem>_check with the simulated superimposition
		#[structopt(long)]
		check: bool,
	},
	/// Generate a random monochrome pad for later encryption
	///
	/// Writes the raw pad (to be kept back for encrypting) and its
	/// pixelcoded share form (to be handed out).
	MonoPad {
		#[structopt(long)]
		width: usize,
		#[structopt(long)]
		height: usize,
		/// Raw pad dump, needed again by mono-cipher
		#[structopt(long, default_value = "rawpad.png")]
		dump: PathBuf,
		/// Pixelcoded pad share
		#[structopt(long, default_value = "pad.png")]
		share: PathBuf,
	},
	/// Encrypt a monochrome picture against a stored raw pad
	MonoCipher {
		/// Picture to encrypt; must match the raw pad's size
		image: PathBuf,
		/// Raw pad dump written by mono-pad
		#[structopt(long, default_value = "rawpad.png")]
		pad: PathBuf,
		/// Pixelcoded cryptograph share
		#[structopt(long, default_value = "coded.png")]
		out: PathBuf,
	},
	/// Split a greyscale picture into two moonfield shares
	///
	/// Writes <stem>_1.svg / <stem>_2.svg halfmoon pages for transparency
	/// printing and <stem>_1.mfd / <stem>_2.mfd raw dumps of the fields.
	Grey {
		image: PathBuf,
		/// Halfmoon radius in page units
		#[structopt(long, default_value = "9")]
		radius: u32,
	},
	/// Generate a random moonfield pad for later encryption
	GreyPad {
		#[structopt(long)]
		width: usize,
		#[structopt(long)]
		height: usize,
		/// Raw pad dump, needed again by grey-cipher
		#[structopt(long, default_value = "rawpad.mfd")]
		dump: PathBuf,
		/// Rendered pad share page
		#[structopt(long, default_value = "pad.svg")]
		share: PathBuf,
		#[structopt(long, default_value = "9")]
		radius: u32,
	},
	/// Encrypt a greyscale picture against a stored moonfield pad
	GreyCipher {
		/// Picture to encrypt; must match the pad's size
		image: PathBuf,
		/// Raw pad dump written by grey-pad
		#[structopt(long, default_value = "rawpad.mfd")]
		pad: PathBuf,
		/// Rendered cryptograph share page
		#[structopt(long, default_value = "coded.svg")]
		out: PathBuf,
		#[structopt(long, default_value = "9")]
		radius: u32,
	},
}

fn main() -> anyhow::Result<()> {
	let collector = tracing_subscriber::fmt()
		.with_max_level(Level::INFO)
		.finish();
	tracing::subscriber::set_global_default(collector)
		.expect("setting up the tracing collector failed");

	match Opt::from_args() {
		Opt::Mono { image, check } => split_mono(&image, check),
		Opt::MonoPad {
			width,
			height,
			dump,
			share,
		} => make_mono_pad(width, height, &dump, &share),
		Opt::MonoCipher { image, pad, out } => make_mono_cipher(&image, &pad, &out),
		Opt::Grey { image, radius } => split_grey(&image, radius),
		Opt::GreyPad {
			width,
			height,
			dump,
			share,
			radius,
		} => make_grey_pad(width, height, &dump, &share, radius),
		Opt::GreyCipher {
			image,
			pad,
			out,
			radius,
		} => make_grey_cipher(&image, &pad, &out, radius),
	}
}

fn save_bitmap(bitmap: &Bitmap, path: &Path, what: &str) -> anyhow::Result<()> {
	codec::bitmap_to_image(bitmap).save(path)?;
	info!("wrote {} to {}", what, path.display());
	Ok(())
}

fn split_mono(image: &Path, check: bool) -> anyhow::Result<()> {
	let plaintext = codec::bitmap_from_image(&image::open(image)?)?;
	let (share1, share2) = codec::share_names(image, None)?;
	let mut engine = MonochromeSharing::insecure();
	let (pad_share, cipher_share) = engine.split(&plaintext).map_err(ToolError::from)?;
	save_bitmap(&pad_share, &share1, "pad share")?;
	save_bitmap(&cipher_share, &share2, "cipher share")?;
	if check {
		let revealed = mono::decrypt(&cipher_share, &pad_share).map_err(ToolError::from)?;
		let check_path = codec::derived_name(image, "check", None)?;
		save_bitmap(&revealed, &check_path, "superimposition check")?;
	}
	Ok(())
}

fn make_mono_pad(width: usize, height: usize, dump: &Path, share: &Path) -> anyhow::Result<()> {
	let raw_pad = Bitmap::random_insecure(width, height).map_err(ToolError::from)?;
	save_bitmap(&raw_pad, dump, "raw pad")?;
	save_bitmap(&raw_pad.pixelcode(), share, "pixelcoded pad share")?;
	Ok(())
}

fn make_mono_cipher(image: &Path, pad: &Path, out: &Path) -> anyhow::Result<()> {
	let plaintext = codec::bitmap_from_image(&image::open(image)?)?;
	let raw_pad = codec::bitmap_from_image(&image::open(pad)?)?;
	let mut engine = MonochromeSharing::insecure();
	let (cipher_share, _) = engine
		.encrypt(&plaintext, Some(&raw_pad))
		.map_err(ToolError::from)?;
	save_bitmap(&cipher_share, out, "pixelcoded cryptograph")?;
	Ok(())
}

fn save_moonfield(field: &Moonfield, dump: &Path, page: &Path, radius: u32) -> anyhow::Result<()> {
	fs::write(dump, field.to_bytes().map_err(ToolError::from)?)?;
	info!("wrote moonfield dump to {}", dump.display());
	fs::write(page, render::moonfield_svg(field, radius)?)?;
	info!("wrote halfmoon page to {}", page.display());
	Ok(())
}

fn split_grey(image: &Path, radius: u32) -> anyhow::Result<()> {
	let source = codec::greymap_from_image(&image::open(image)?)?;
	let (page1, page2) = codec::share_names(image, Some("svg"))?;
	let (dump1, dump2) = codec::share_names(image, Some("mfd"))?;
	let mut engine = GreyscaleSharing::insecure();
	let (pad, cipher) = engine.split(&source).map_err(ToolError::from)?;
	save_moonfield(&pad, &dump1, &page1, radius)?;
	save_moonfield(&cipher, &dump2, &page2, radius)?;
	Ok(())
}

fn make_grey_pad(
	width: usize,
	height: usize,
	dump: &Path,
	share: &Path,
	radius: u32,
) -> anyhow::Result<()> {
	let mut engine = GreyscaleSharing::insecure();
	let pad = engine.make_pad(width, height).map_err(ToolError::from)?;
	save_moonfield(&pad, dump, share, radius)?;
	Ok(())
}

fn make_grey_cipher(image: &Path, pad: &Path, out: &Path, radius: u32) -> anyhow::Result<()> {
	let source = codec::greymap_from_image(&image::open(image)?)?;
	let raw_pad = Moonfield::from_bytes(&fs::read(pad)?).map_err(ToolError::from)?;
	let engine = GreyscaleSharing::insecure();
	let cipher = engine
		.make_cipher(&raw_pad, &source)
		.map_err(ToolError::from)?;
	fs::write(out, render::moonfield_svg(&cipher, radius)?)?;
	info!("wrote cryptograph page to {}", out.display());
	Ok(())
}
