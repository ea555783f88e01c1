//! UI components.

pub mod pixel_loader;
