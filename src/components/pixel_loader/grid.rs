//! Grid layout.
//!
//! Places one [`Particle`] per cell of a regular lattice covering the
//! container. Cells whose square would poke past the right or bottom edge
//! are skipped.

use rand::Rng;

use super::config::{DelayOrigin, LoaderConfig};
use super::palette::Palette;
use super::particle::{Generation, Particle};

/// One generation of pixels laid out for a fixed container size.
#[derive(Clone, Debug, Default)]
pub struct PixelGrid {
	/// Container width in pixels.
	pub width: u32,
	/// Container height in pixels.
	pub height: u32,
	/// Pixels in row-major order, x outer and y inner.
	pub pixels: Vec<Particle>,
}

/// Distance from `(x, y)` to the wave origin.
pub fn radial_delay(x: f64, y: f64, width: f64, height: f64, origin: DelayOrigin) -> f64 {
	let dx = x - width * 0.5;
	let dy = match origin {
		DelayOrigin::Bottom => y - height,
		DelayOrigin::Top => y,
	};
	dx.hypot(dy)
}

impl PixelGrid {
	/// Lay out a fresh grid with new random colours and timing.
	pub fn build<R: Rng + ?Sized>(
		width: u32,
		height: u32,
		config: &LoaderConfig,
		rng: &mut R,
	) -> Self {
		let palette = Palette::random(rng, config.palette_size);
		let gap = config.cell_gap();
		let max_size = config.max_cell_size();
		let (w, h) = (width as f64, height as f64);

		let generation = Generation {
			speed: rng.gen_range(0.008..0.25),
			counter_step: (w + h) * 0.005,
			max_size_available: max_size as f64,
			min_size: config.flicker_min(),
			shrink_step: config.shrink_per_frame(),
		};

		let mut pixels = Vec::new();
		for x in (0..width).step_by(gap as usize) {
			for y in (0..height).step_by(gap as usize) {
				if x + max_size > width || y + max_size > height {
					continue;
				}

				let (px, py) = (x as f64, y as f64);
				let color = palette.choose(rng).to_string();
				let delay = radial_delay(px, py, w, h, config.origin);
				pixels.push(Particle::new(px, py, color, delay, &generation, rng));
			}
		}

		Self {
			width,
			height,
			pixels,
		}
	}

	/// Number of pixels.
	pub fn len(&self) -> usize {
		self.pixels.len()
	}

	/// True when the container was too small to hold a single cell.
	pub fn is_empty(&self) -> bool {
		self.pixels.is_empty()
	}
}
