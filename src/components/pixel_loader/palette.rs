//! Per-run colour palette.
//!
//! Each grid generation draws a fresh set of closely related hues so the
//! whole grid reads as one tint with a little variation.

use rand::Rng;

/// HSL color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	/// Hue in degrees, `0..360`.
	pub hue: u32,
	/// Saturation percentage.
	pub saturation: f64,
	/// Lightness percentage.
	pub lightness: f64,
}

impl Hsl {
	/// Build a color, wrapping the hue onto the colour wheel.
	pub fn new(hue: u32, saturation: f64, lightness: f64) -> Self {
		Self {
			hue: hue % 360,
			saturation,
			lightness,
		}
	}

	/// CSS Color 4 space-separated syntax, e.g. `hsl(120 100% 72.5%)`.
	pub fn to_css(self) -> String {
		format!(
			"hsl({} {}% {}%)",
			self.hue, self.saturation, self.lightness
		)
	}
}

/// The colours a grid generation picks from.
#[derive(Clone, Debug)]
pub struct Palette {
	colors: Vec<String>,
}

impl Palette {
	/// Random palette of `len` colours around a random base hue.
	///
	/// Colour `i` sits within `(i + 1) * 10` degrees above the base, so later
	/// entries spread further from it.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
		let base = rng.gen_range(0.0..360.0_f64).floor();
		let colors = (0..len.max(1))
			.map(|i| {
				let spread = (i + 1) as f64 * 10.0;
				let hue = rng.gen_range(base..base + spread).floor() as u32;
				let lightness = rng.gen_range(50.0..100.0);
				Hsl::new(hue, 100.0, lightness).to_css()
			})
			.collect();
		Self { colors }
	}

	/// Uniformly random entry.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
		&self.colors[rng.gen_range(0..self.colors.len())]
	}

	/// Number of colours.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Whether the palette holds no colours. [`Palette::random`] always adds at least one.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}
