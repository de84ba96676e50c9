use umbra_lib::phase::Moonfield;

use crate::codec::ToolError;

/// Default halfmoon radius in page units.
pub const DEFAULT_RADIUS: u32 = 9;

/// Phase step to degree conversion factor.
const DEGREES_PER_STEP: f64 = 360.0 / 510.0;

/// Render a filled moonfield as an SVG page of black halfmoons on white,
/// one half-disc per cell. The arc starts at `phase * 360/510` degrees and
/// sweeps half a turn; angles grow counterclockwise on the page, matching
/// the canvas convention the phase values were defined against. A page like
/// this is what goes on a printed transparency.
pub fn moonfield_svg(field: &Moonfield, radius: u32) -> Result<String, ToolError> {
	let (width, height) = field.size();
	let diameter = 2 * radius as usize;
	let page_width = width * diameter;
	let page_height = height * diameter;
	let r = radius as f64;

	let mut svg = String::new();
	svg.push_str(&format!(
		"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
		page_width, page_height, page_width, page_height
	));
	svg.push_str(&format!(
		"<rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
		page_width, page_height
	));
	for y in 0..height {
		for x in 0..width {
			let phase = field.get(x, y)?;
			let angle = (phase as f64 * DEGREES_PER_STEP).to_radians();
			let cx = (x * diameter + radius as usize) as f64;
			let cy = (y * diameter + radius as usize) as f64;
			// endpoints of the diameter at the start angle; y is negated
			// because the page's y axis points down
			let x1 = cx + r * angle.cos();
			let y1 = cy - r * angle.sin();
			let x2 = cx - r * angle.cos();
			let y2 = cy + r * angle.sin();
			svg.push_str(&format!(
				"<path d=\"M{:.2} {:.2} A{} {} 0 0 0 {:.2} {:.2} Z\" fill=\"black\"/>\n",
				x1, y1, radius, radius, x2, y2
			));
		}
	}
	svg.push_str("</svg>\n");
	Ok(svg)
}
