//! Pixel-grid flicker and reveal effect.
//!
//! Fills a container with a lattice of small squares that appear in a radial
//! wave, flicker for a while, then shrink away in the same wave before the
//! cycle restarts:
//! - Regular grid sized to the container, one pixel per cell
//! - Per-run palette of related hues
//! - Frame pacing capped at 60 frames per second
//! - Fresh layout on container resize or any click on the page
//!
//! The simulation modules are host-independent; only [`PixelLoader`] touches
//! the DOM.
//!
//! # Example
//!
//! ```ignore
//! use pixel_loader::{DelayOrigin, LoaderConfig, PixelLoader};
//!
//! let config = LoaderConfig { origin: DelayOrigin::Top, ..Default::default() };
//!
//! view! {
//!     <div style="width: 400px; height: 300px;">
//!         <PixelLoader config=config />
//!     </div>
//! }
//! ```

pub mod animator;
mod component;
pub mod config;
pub mod grid;
pub mod palette;
pub mod particle;
pub mod surface;

pub use animator::{Animator, FrameLimiter, Phase};
pub use component::PixelLoader;
pub use config::{DelayOrigin, LoaderConfig};
pub use grid::PixelGrid;
pub use particle::{Particle, PixelState};
pub use surface::Surface;
