//! Single animated grid pixel.
//!
//! A pixel waits out its delay, grows to a random target size, then flickers
//! between its minimum and that target until the shrink phase begins. When
//! shrinking it waits out a second delay, then shrinks to nothing.

use rand::Rng;

use super::surface::Surface;

/// Values shared by every pixel of one grid generation.
#[derive(Clone, Debug)]
pub struct Generation {
	/// Base flicker speed; each pixel scales it by a random factor.
	pub speed: f64,
	/// Amount the delay counters advance per frame.
	pub counter_step: f64,
	/// Side of the square each cell reserves.
	pub max_size_available: f64,
	/// Lower flicker bound.
	pub min_size: f64,
	/// Size lost per frame while shrinking.
	pub shrink_step: f64,
}

/// Coarse phase of a pixel, derived from its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelState {
	/// Waiting, growing or shrinking; not oscillating.
	Growing,
	/// Oscillating between min and max size.
	Flicking,
	/// Shrunk to nothing during the hide phase.
	Hidden,
}

/// One square of the grid.
#[derive(Clone, Debug)]
pub struct Particle {
	x: f64,
	y: f64,
	color: String,
	speed: f64,
	size: f64,
	size_step: f64,
	min_size: f64,
	max_size: f64,
	max_size_available: f64,
	size_direction: f64,
	delay: f64,
	delay_hide: f64,
	counter: f64,
	counter_hide: f64,
	counter_step: f64,
	shrink_step: f64,
	is_hidden: bool,
	is_flicking: bool,
}

impl Particle {
	/// Create a pixel at `(x, y)` with randomized flicker parameters.
	///
	/// Both delays start out equal to `delay`.
	pub fn new<R: Rng + ?Sized>(
		x: f64,
		y: f64,
		color: String,
		delay: f64,
		generation: &Generation,
		rng: &mut R,
	) -> Self {
		let max_size_available = generation.max_size_available.max(0.0);
		let min_size = generation.min_size.max(0.0).min(max_size_available);
		let max_size = if min_size < max_size_available {
			rng.gen_range(min_size..max_size_available)
		} else {
			max_size_available
		};

		Self {
			x,
			y,
			color,
			speed: rng.gen_range(0.1..0.9) * generation.speed,
			size: 0.0,
			size_step: rng.gen_range(0.0..0.5),
			min_size,
			max_size,
			max_size_available,
			size_direction: 1.0,
			delay,
			delay_hide: delay,
			counter: 0.0,
			counter_hide: 0.0,
			counter_step: generation.counter_step,
			shrink_step: generation.shrink_step.max(0.0),
			is_hidden: false,
			is_flicking: false,
		}
	}

	/// Advance one frame of the reveal phase.
	pub fn show(&mut self) {
		self.is_hidden = false;
		self.counter_hide = 0.0;

		if self.counter <= self.delay {
			self.counter += self.counter_step;
			return;
		}

		if self.size >= self.max_size {
			self.is_flicking = true;
		}

		if self.is_flicking {
			self.flicker();
		} else {
			self.size = (self.size + self.size_step).min(self.max_size);
		}
	}

	/// Advance one frame of the shrink phase.
	pub fn hide(&mut self) {
		self.counter = 0.0;

		if self.counter_hide <= self.delay_hide {
			self.counter_hide += self.counter_step;
			if self.is_flicking {
				self.flicker();
			}
			return;
		}

		self.is_flicking = false;

		if self.size <= 0.0 {
			self.size = 0.0;
			self.is_hidden = true;
			return;
		}

		self.size = (self.size - self.shrink_step).max(0.0);
	}

	/// Bounce the size between `min_size` and `max_size`.
	///
	/// Touching either bound reverses direction before the step is applied.
	pub fn flicker(&mut self) {
		if self.size >= self.max_size {
			self.size_direction = -1.0;
		} else if self.size <= self.min_size {
			self.size_direction = 1.0;
		}

		self.size = (self.size + self.size_direction * self.speed)
			.clamp(self.min_size, self.max_size);
	}

	/// Paint the square centred in its cell.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		let offset = (self.max_size_available - self.size) * 0.5;
		surface.fill_square(self.x + offset, self.y + offset, self.size, &self.color);
	}

	/// Current phase.
	pub fn state(&self) -> PixelState {
		if self.is_hidden {
			PixelState::Hidden
		} else if self.is_flicking {
			PixelState::Flicking
		} else {
			PixelState::Growing
		}
	}

	/// Grid position.
	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	/// Current side length.
	pub fn size(&self) -> f64 {
		self.size
	}

	/// Largest side length the cell allows.
	pub fn max_size_available(&self) -> f64 {
		self.max_size_available
	}

	/// CSS fill colour.
	pub fn color(&self) -> &str {
		&self.color
	}

	/// Radial delay before growth starts.
	pub fn delay(&self) -> f64 {
		self.delay
	}

	/// Whether the pixel has fully shrunk away.
	pub fn is_hidden(&self) -> bool {
		self.is_hidden
	}

	/// Whether the pixel is in its oscillation phase.
	pub fn is_flicking(&self) -> bool {
		self.is_flicking
	}
}
