//! Drawing surface abstraction.
//!
//! The animation only needs to clear the whole area and fill coloured
//! squares, so that is all a surface has to offer.

use web_sys::CanvasRenderingContext2d;

/// A rectangular area the loader draws onto.
pub trait Surface {
	/// Current pixel dimensions.
	fn size(&self) -> (u32, u32);
	/// Resize the backing store.
	fn set_size(&mut self, width: u32, height: u32);
	/// Erase everything.
	fn clear(&mut self);
	/// Fill an axis-aligned square with a CSS colour.
	fn fill_square(&mut self, x: f64, y: f64, side: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn size(&self) -> (u32, u32) {
		self.canvas()
			.map(|c| (c.width(), c.height()))
			.unwrap_or((0, 0))
	}

	fn set_size(&mut self, width: u32, height: u32) {
		if let Some(canvas) = self.canvas() {
			canvas.set_width(width);
			canvas.set_height(height);
		}
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.clear_rect(0.0, 0.0, w as f64, h as f64);
	}

	fn fill_square(&mut self, x: f64, y: f64, side: f64, color: &str) {
		self.set_fill_style_str(color);
		self.fill_rect(x, y, side, side);
	}
}

#[cfg(test)]
pub(crate) mod recording {
	use super::Surface;

	/// A filled square as recorded by [`RecordingSurface`].
	#[derive(Clone, Debug, PartialEq)]
	pub struct Fill {
		pub x: f64,
		pub y: f64,
		pub side: f64,
		pub color: String,
	}

	/// In-memory surface that remembers what the last frame drew.
	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub width: u32,
		pub height: u32,
		pub clears: usize,
		pub fills: Vec<Fill>,
	}

	impl Surface for RecordingSurface {
		fn size(&self) -> (u32, u32) {
			(self.width, self.height)
		}

		fn set_size(&mut self, width: u32, height: u32) {
			self.width = width;
			self.height = height;
		}

		fn clear(&mut self) {
			self.clears += 1;
			self.fills.clear();
		}

		fn fill_square(&mut self, x: f64, y: f64, side: f64, color: &str) {
			self.fills.push(Fill {
				x,
				y,
				side,
				color: color.to_string(),
			});
		}
	}
}
