//! Leptos component hosting the pixel loader canvas.
//!
//! The component renders a container with a canvas inside it. Once both are
//! mounted it wires three browser hooks:
//! - a `requestAnimationFrame` loop that re-arms itself then steps the animator
//! - a `ResizeObserver` on the container
//! - a document-wide `click` listener
//!
//! Resize and click share one relayout callback. It cancels the pending frame,
//! rebuilds the grid for the container's current size, and kicks the loop.
//! Unmounting the component cancels the loop and unhooks both listeners.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use rand::rngs::ThreadRng;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Performance, ResizeObserver, Window,
};

use super::animator::Animator;
use super::config::LoaderConfig;

/// Browser handles plus the animation they drive.
struct LoaderContext {
	window: Window,
	performance: Performance,
	container: HtmlElement,
	ctx: CanvasRenderingContext2d,
	animator: Animator,
	rng: ThreadRng,
	/// Pending `requestAnimationFrame` handle.
	request: Option<i32>,
	/// Held so the observer lives as long as the loader.
	observer: Option<ResizeObserver>,
}

type ContextSlot = Rc<RefCell<Option<LoaderContext>>>;
type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

impl LoaderContext {
	fn relayout(&mut self) -> Result<(), JsValue> {
		if let Some(handle) = self.request.take() {
			self.window.cancel_animation_frame(handle)?;
		}

		let rect = self.container.get_bounding_client_rect();
		self.animator
			.relayout(rect.width(), rect.height(), &mut self.ctx, &mut self.rng);
		Ok(())
	}
}

/// Re-arm the frame callback, then let the animator process the frame.
fn run_frame(context: &ContextSlot, animate: &CallbackSlot) -> Result<(), JsValue> {
	let mut slot = context.borrow_mut();
	let Some(c) = slot.as_mut() else {
		return Ok(());
	};

	if let Some(ref cb) = *animate.borrow() {
		c.request = Some(c.window.request_animation_frame(cb.as_ref().unchecked_ref())?);
	}

	let now = c.performance.now();
	c.animator.frame(now, &mut c.ctx);
	Ok(())
}

fn mount(
	container: HtmlElement,
	canvas: HtmlCanvasElement,
	config: LoaderConfig,
	context: &ContextSlot,
	animate: &CallbackSlot,
	relayout: &CallbackSlot,
) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or("no window")?;
	let document = window.document().ok_or("no document")?;
	let performance = window.performance().ok_or("no performance")?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or("no 2d context")?
		.dyn_into()?;

	*context.borrow_mut() = Some(LoaderContext {
		window,
		performance,
		container: container.clone(),
		ctx,
		animator: Animator::new(config),
		rng: rand::thread_rng(),
		request: None,
		observer: None,
	});

	let (context_anim, animate_inner) = (context.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		if let Err(e) = run_frame(&context_anim, &animate_inner) {
			warn!("pixel-loader: frame failed: {:?}", e);
		}
	}));

	let (context_rl, animate_rl) = (context.clone(), animate.clone());
	*relayout.borrow_mut() = Some(Closure::new(move || {
		let relaid = match context_rl.borrow_mut().as_mut() {
			Some(c) => c.relayout(),
			None => return,
		};
		if let Err(e) = relaid.and_then(|()| run_frame(&context_rl, &animate_rl)) {
			warn!("pixel-loader: relayout failed: {:?}", e);
		}
	}));

	if let Some(ref cb) = *relayout.borrow() {
		let callback: &js_sys::Function = cb.as_ref().unchecked_ref();
		// Observing fires once right away, which performs the first layout.
		let observer = ResizeObserver::new(callback)?;
		observer.observe(&container);
		document.add_event_listener_with_callback("click", callback)?;

		if let Some(ref mut c) = *context.borrow_mut() {
			c.observer = Some(observer);
		}
	}

	Ok(())
}

/// Stop the loop and detach every browser hook installed by [`mount`].
fn unmount(context: &ContextSlot, animate: &CallbackSlot, relayout: &CallbackSlot) {
	let Some(c) = context.borrow_mut().take() else {
		return;
	};

	if let Some(handle) = c.request {
		if let Err(e) = c.window.cancel_animation_frame(handle) {
			warn!("pixel-loader: failed to cancel frame: {:?}", e);
		}
	}
	if let Some(observer) = c.observer {
		observer.disconnect();
	}
	if let (Some(document), Some(cb)) = (c.window.document(), relayout.borrow().as_ref()) {
		if let Err(e) =
			document.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
		{
			warn!("pixel-loader: failed to remove click listener: {:?}", e);
		}
	}

	animate.borrow_mut().take();
	relayout.borrow_mut().take();
}

/// Renders the flickering pixel grid, filling its parent element.
///
/// The grid is rebuilt with fresh colours whenever the container changes
/// size or the user clicks anywhere on the page.
#[component]
pub fn PixelLoader(
	/// Layout and pacing overrides. Defaults reproduce the stock effect.
	#[prop(optional)]
	config: LoaderConfig,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: ContextSlot = Rc::new(RefCell::new(None));
	let animate: CallbackSlot = Rc::new(RefCell::new(None));
	let relayout: CallbackSlot = Rc::new(RefCell::new(None));

	let teardown = StoredValue::new_local((context.clone(), animate.clone(), relayout.clone()));
	on_cleanup(move || {
		teardown.try_with_value(|(context, animate, relayout)| unmount(context, animate, relayout));
	});

	Effect::new(move |_| {
		let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}

		if let Err(e) = mount(
			container.into(),
			canvas,
			config.clone(),
			&context,
			&animate,
			&relayout,
		) {
			warn!("pixel-loader: failed to start: {:?}", e);
		}
	});

	view! {
		<div
			node_ref=container_ref
			class="pixel-loader"
			style="position: relative; width: 100%; height: 100%; overflow: hidden;"
		>
			<canvas
				node_ref=canvas_ref
				class="pixel-loader-canvas"
				style="position: absolute; top: 0; left: 0; display: block;"
			/>
		</div>
	}
}
