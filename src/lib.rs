//! pixel-loader: radial pixel-grid flicker animation for web pages.
//!
//! This crate provides a WASM-based canvas effect that fills a container with
//! small squares which grow, flicker and shrink in a wave, restarting with new
//! colours whenever the container is resized or the page is clicked.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Enables the browser entropy source for `rand` on wasm32.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::pixel_loader::{DelayOrigin, LoaderConfig, PixelLoader};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("pixel-loader: logging initialized");
}

/// Parse loader overrides from JSON; fields left out keep their defaults.
pub fn parse_config(json: &str) -> Result<LoaderConfig, serde_json::Error> {
	serde_json::from_str(json)
}

/// Load config overrides from a script element with id="loader-config".
/// Expected format: JSON object with any subset of [`LoaderConfig`] fields.
fn load_config() -> Option<LoaderConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("loader-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_config(&json_text) {
		Ok(config) => {
			info!("pixel-loader: loaded config {:?}", config);
			Some(config)
		}
		Err(e) => {
			warn!("pixel-loader: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads config from the DOM and fills the viewport with the loader.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Pixel Loader" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-loader" style="position: fixed; inset: 0; background: #0b0b0f;">
			<PixelLoader config=config />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_config_accepts_overrides() {
		let config = parse_config(r#"{ "max_ticker": 120, "frame_interval_ms": 33.0 }"#).unwrap();
		assert_eq!(config.max_ticker, 120);
		assert_eq!(config.frame_interval_ms, 33.0);
		assert_eq!(config.origin, DelayOrigin::Bottom);
	}

	#[test]
	fn parse_config_rejects_garbage() {
		assert!(parse_config("not json").is_err());
		assert!(parse_config(r#"{ "gap": -1 }"#).is_err());
	}
}
