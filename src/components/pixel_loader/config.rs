//! Loader configuration.
//!
//! Defaults reproduce the stock effect. A page may override any subset of
//! fields through JSON; missing fields fall back to [`LoaderConfig::default`].

use serde::Deserialize;

/// Smallest shrink step used when the configured one is not positive.
const MIN_SHRINK_STEP: f64 = 0.001;

/// Smallest frame interval, in milliseconds, used when the configured one is not positive.
const MIN_FRAME_INTERVAL_MS: f64 = 1.0;

/// Reference point that per-pixel delays are measured from.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DelayOrigin {
	/// Horizontal centre of the bottom edge. The wave rises upward.
	#[default]
	Bottom,
	/// Horizontal centre of the top edge. The wave falls downward.
	Top,
}

/// Tunables for grid layout and animation pacing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoaderConfig {
	/// Distance between neighbouring cells, in pixels.
	pub gap: u32,
	/// Upper bound of the ticker; reaching it starts the shrink phase.
	pub max_ticker: i32,
	/// Minimum wall time between processed frames, in milliseconds.
	pub frame_interval_ms: f64,
	/// Size lost per frame once a pixel starts shrinking.
	pub shrink_step: f64,
	/// Lower flicker bound for every pixel.
	pub min_size: f64,
	/// Number of colours drawn per grid generation.
	pub palette_size: usize,
	/// Where the reveal wave starts.
	pub origin: DelayOrigin,
}

impl Default for LoaderConfig {
	fn default() -> Self {
		Self {
			gap: 6,
			max_ticker: 360,
			frame_interval_ms: 1000.0 / 60.0,
			shrink_step: 0.05,
			min_size: 0.5,
			palette_size: 5,
			origin: DelayOrigin::Bottom,
		}
	}
}

impl LoaderConfig {
	/// Cell gap, never zero.
	pub fn cell_gap(&self) -> u32 {
		self.gap.max(1)
	}

	/// Largest square a cell may hold: half the gap, rounded down.
	pub fn max_cell_size(&self) -> u32 {
		self.cell_gap() / 2
	}

	/// Lower flicker bound, never negative.
	pub fn flicker_min(&self) -> f64 {
		self.min_size.max(0.0)
	}

	/// Per-frame shrink amount, always positive.
	pub fn shrink_per_frame(&self) -> f64 {
		if self.shrink_step > MIN_SHRINK_STEP {
			self.shrink_step
		} else {
			MIN_SHRINK_STEP
		}
	}

	/// Frame interval in milliseconds, always positive.
	pub fn frame_interval(&self) -> f64 {
		if self.frame_interval_ms > MIN_FRAME_INTERVAL_MS {
			self.frame_interval_ms
		} else {
			MIN_FRAME_INTERVAL_MS
		}
	}
}
