//! Ticker-driven animation loop state.
//!
//! The host calls [`Animator::frame`] from its frame callback after
//! re-arming the callback. The animator decides whether enough time has
//! passed, then moves every pixel one step through the current phase.
//!
//! The ticker counts up while pixels reveal and down while they hide. It
//! flips direction at its bounds, and snaps back to zero as soon as every
//! pixel has hidden, so a new cycle starts without waiting out the countdown.

use rand::Rng;

use super::config::LoaderConfig;
use super::grid::PixelGrid;
use super::surface::Surface;

/// Drops frames that arrive sooner than a fixed interval.
#[derive(Clone, Debug)]
pub struct FrameLimiter {
	interval: f64,
	last: f64,
}

impl FrameLimiter {
	/// Limiter admitting at most one frame per `interval` milliseconds.
	pub fn new(interval: f64) -> Self {
		Self { interval, last: 0.0 }
	}

	/// Whether a frame stamped `now` should be processed.
	///
	/// The remainder of the elapsed time is carried over so the average rate
	/// stays at the interval even when the host fires slightly late.
	pub fn admit(&mut self, now: f64) -> bool {
		let diff = now - self.last;
		if diff < self.interval {
			return false;
		}
		self.last = now - diff % self.interval;
		true
	}
}

/// Which way the ticker moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Ticker counts up; pixels grow and flicker.
	Reveal,
	/// Ticker counts down; pixels shrink away.
	Conceal,
}

impl Phase {
	fn step(self) -> i32 {
		match self {
			Phase::Reveal => 1,
			Phase::Conceal => -1,
		}
	}
}

/// Owns the pixel grid and the ticker.
#[derive(Clone, Debug)]
pub struct Animator {
	config: LoaderConfig,
	grid: PixelGrid,
	limiter: FrameLimiter,
	ticker: i32,
	phase: Phase,
}

impl Animator {
	/// Animator with an empty grid; call [`Animator::relayout`] to populate it.
	pub fn new(config: LoaderConfig) -> Self {
		Self {
			limiter: FrameLimiter::new(config.frame_interval()),
			config,
			grid: PixelGrid::default(),
			ticker: 0,
			phase: Phase::Reveal,
		}
	}

	/// Resize the surface to the container and start over with a fresh grid.
	///
	/// Dimensions are floored to whole pixels. The frame limiter keeps its
	/// history so a relayout never lets two frames through back to back.
	pub fn relayout<S, R>(&mut self, width: f64, height: f64, surface: &mut S, rng: &mut R)
	where
		S: Surface + ?Sized,
		R: Rng + ?Sized,
	{
		let width = width.max(0.0).floor() as u32;
		let height = height.max(0.0).floor() as u32;

		surface.set_size(width, height);
		self.grid = PixelGrid::build(width, height, &self.config, rng);
		self.ticker = 0;

		log::debug!(
			"pixel-loader: grid rebuilt at {}x{} with {} pixels",
			width,
			height,
			self.grid.len()
		);
	}

	/// Process a frame stamped `now` if the limiter admits it.
	///
	/// Returns whether anything was drawn.
	pub fn frame<S: Surface + ?Sized>(&mut self, now: f64, surface: &mut S) -> bool {
		if !self.limiter.admit(now) {
			return false;
		}
		self.step(surface);
		true
	}

	/// Advance one frame unconditionally.
	pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		surface.clear();

		if self.ticker >= self.config.max_ticker {
			self.phase = Phase::Conceal;
		} else if self.ticker <= 0 {
			self.phase = Phase::Reveal;
		}

		let mut all_hidden = true;
		for pixel in &mut self.grid.pixels {
			match self.phase {
				Phase::Reveal => pixel.show(),
				Phase::Conceal => {
					pixel.hide();
					all_hidden = all_hidden && pixel.is_hidden();
				}
			}
			pixel.draw(surface);
		}

		self.ticker += self.phase.step();

		if self.phase == Phase::Conceal && all_hidden {
			self.ticker = 0;
		}
	}

	/// Current ticker value.
	pub fn ticker(&self) -> i32 {
		self.ticker
	}

	/// Current phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// The live grid.
	pub fn grid(&self) -> &PixelGrid {
		&self.grid
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::pixel_loader::surface::recording::RecordingSurface;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn animator(width: f64, height: f64) -> (Animator, RecordingSurface) {
		let mut rng = StdRng::seed_from_u64(3);
		let mut surface = RecordingSurface::default();
		let mut animator = Animator::new(LoaderConfig::default());
		animator.relayout(width, height, &mut surface, &mut rng);
		(animator, surface)
	}

	#[test]
	fn limiter_drops_early_frames() {
		let mut limiter = FrameLimiter::new(10.0);
		assert!(!limiter.admit(5.0));
		assert!(limiter.admit(10.0));
		assert!(!limiter.admit(19.0));
		// 25 - 10 = 15, so 5 carries over and the next slot opens at 30
		assert!(limiter.admit(25.0));
		assert!(!limiter.admit(29.0));
		assert!(limiter.admit(30.0));
	}

	#[test]
	fn frame_respects_limiter() {
		let (mut animator, mut surface) = animator(12.0, 12.0);
		assert!(!animator.frame(1.0, &mut surface));
		assert_eq!(animator.ticker(), 0);
		assert_eq!(surface.clears, 0);

		assert!(animator.frame(20.0, &mut surface));
		assert_eq!(animator.ticker(), 1);
		assert!(!animator.frame(25.0, &mut surface));
		assert_eq!(animator.ticker(), 1);
	}

	#[test]
	fn relayout_floors_and_resets() {
		let (mut animator, mut surface) = animator(12.0, 12.0);
		for _ in 0..10 {
			animator.step(&mut surface);
		}
		assert_eq!(animator.ticker(), 10);

		let mut rng = StdRng::seed_from_u64(4);
		animator.relayout(100.9, 48.2, &mut surface, &mut rng);
		assert_eq!(surface.size(), (100, 48));
		assert_eq!(animator.ticker(), 0);
		assert_eq!((animator.grid().width, animator.grid().height), (100, 48));
		assert!(animator.grid().pixels.iter().all(|p| p.size() == 0.0));
	}

	#[test]
	fn every_pixel_drawn_each_frame() {
		let (mut animator, mut surface) = animator(30.0, 30.0);
		animator.step(&mut surface);
		assert_eq!(surface.fills.len(), animator.grid().len());
		animator.step(&mut surface);
		assert_eq!(surface.clears, 2);
		assert_eq!(surface.fills.len(), animator.grid().len());
	}

	#[test]
	fn ticker_flips_at_max_without_overshoot() {
		let (mut animator, mut surface) = animator(12.0, 12.0);
		assert_eq!(animator.phase(), Phase::Reveal);

		for _ in 0..360 {
			animator.step(&mut surface);
			assert!(animator.ticker() <= 360);
		}
		assert_eq!(animator.ticker(), 360);
		assert_eq!(animator.phase(), Phase::Reveal);

		animator.step(&mut surface);
		assert_eq!(animator.phase(), Phase::Conceal);
		assert_eq!(animator.ticker(), 359);
	}

	#[test]
	fn all_hidden_resets_ticker_early() {
		let (mut animator, mut surface) = animator(12.0, 12.0);
		for _ in 0..361 {
			animator.step(&mut surface);
		}
		assert_eq!(animator.phase(), Phase::Conceal);

		let mut previous = animator.ticker();
		let mut frames = 0;
		while animator.ticker() != 0 {
			previous = animator.ticker();
			animator.step(&mut surface);
			frames += 1;
			assert!(frames <= 360);
		}
		assert!(previous > 1, "ticker ran all the way down");
		assert!(animator.grid().pixels.iter().all(|p| p.is_hidden()));

		animator.step(&mut surface);
		assert_eq!(animator.phase(), Phase::Reveal);
		assert_eq!(animator.ticker(), 1);
	}

	#[test]
	fn sizes_stay_in_bounds_over_full_cycles() {
		let (mut animator, mut surface) = animator(64.0, 40.0);
		for _ in 0..1500 {
			animator.step(&mut surface);
			for p in &animator.grid().pixels {
				assert!(p.size() >= 0.0 && p.size() <= p.max_size_available());
			}
		}
	}

	#[test]
	fn empty_grid_cycles_quietly() {
		let (mut animator, mut surface) = animator(0.0, 0.0);
		assert!(animator.grid().is_empty());
		for _ in 0..360 {
			animator.step(&mut surface);
		}
		assert_eq!(animator.ticker(), 360);

		// nothing left to hide, so the first shrink frame restarts the cycle
		animator.step(&mut surface);
		assert_eq!(animator.ticker(), 0);
		assert!(surface.fills.is_empty());
	}

	fn size_range(json: &str) -> (f64, f64) {
		let config = crate::parse_config(json).unwrap();
		let mut rng = StdRng::seed_from_u64(5);
		let mut surface = RecordingSurface::default();
		let mut animator = Animator::new(config);
		animator.relayout(60.0, 60.0, &mut surface, &mut rng);

		let (mut lo, mut hi) = (f64::MAX, f64::MIN);
		for _ in 0..1500 {
			animator.step(&mut surface);
			for p in &animator.grid().pixels {
				lo = lo.min(p.size());
				hi = hi.max(p.size());
			}
		}
		(lo, hi)
	}

	#[test]
	fn negative_min_size_stays_in_bounds() {
		let (lo, hi) = size_range(r#"{ "min_size": -2.0 }"#);
		assert!(lo >= 0.0 && hi <= 3.0, "sizes ranged {lo}..{hi}");
	}

	#[test]
	fn non_positive_shrink_step_stays_in_bounds() {
		for json in [r#"{ "shrink_step": -0.05 }"#, r#"{ "shrink_step": 0.0 }"#] {
			let (lo, hi) = size_range(json);
			assert!(lo >= 0.0 && hi <= 3.0, "{json}: sizes ranged {lo}..{hi}");
		}
	}

	#[test]
	fn zero_frame_interval_still_limits() {
		let config = crate::parse_config(r#"{ "frame_interval_ms": 0.0 }"#).unwrap();
		let mut surface = RecordingSurface::default();
		let mut animator = Animator::new(config);

		assert!(animator.frame(10.0, &mut surface));
		assert!(!animator.frame(10.0, &mut surface));
		assert!(!animator.frame(10.5, &mut surface));
		assert!(animator.frame(11.0, &mut surface));
		assert_eq!(animator.ticker(), 2);
	}
}
