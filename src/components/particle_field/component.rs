//! Leptos component wrapping one particle-field canvas.
//!
//! The component measures its container (or the viewport), sizes the
//! canvas, builds the point field, and drives step + render through a
//! [`FrameLoop`]. Resize events rebuild the field for the new extent.
//! Both the loop and the resize listener are released on cleanup, so an
//! unmounted section never paints a detached canvas.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::field::PointField;
use super::render;
use super::scheduler::FrameLoop;

/// Per-canvas seed counter. Deterministic so every page load produces the
/// same scatter for a given mount order.
static FIELD_SEED: AtomicU32 = AtomicU32::new(1);

fn viewport_width(window: &Window) -> f64 {
	window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0)
}

/// Measure the drawing extent: the viewport for fullscreen canvases,
/// otherwise the parent element's rendered size. Returns zeros when the
/// container has no measurable size yet.
fn measure(canvas: &HtmlCanvasElement, window: &Window, fullscreen: bool) -> (f64, f64) {
	if fullscreen {
		let w = viewport_width(window);
		let h = window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0);
		(w, h)
	} else {
		match canvas.parent_element() {
			Some(parent) => (parent.client_width() as f64, parent.client_height() as f64),
			None => (0.0, 0.0),
		}
	}
}

/// Release everything the mount effect wired up: the frame loop, the
/// resize listener, and the field itself.
fn teardown(
	frame_loop: FrameLoop,
	resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	field: Rc<RefCell<Option<PointField>>>,
) -> impl FnOnce() {
	move || {
		frame_loop.stop();
		if let (Some(window), Some(cb)) = (web_sys::window(), resize_cb.borrow().as_ref()) {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		field.borrow_mut().take();
	}
}

/// Renders a decorative particle field on a canvas element.
///
/// The canvas sizes itself to its parent container; set `fullscreen = true`
/// to track the viewport instead. If the container has no size yet (or the
/// 2d context is unavailable) the component stays inert until a resize
/// provides one; it never fails visibly.
#[component]
pub fn ParticleCanvas(
	/// Visual variant for this canvas.
	config: FieldConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = "particle-canvas")] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<PointField>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_loop = FrameLoop::new();

	let (field_init, resize_cb_init, loop_init) =
		(field.clone(), resize_cb.clone(), frame_loop.clone());
	let config_init = config.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		// Decorative only: without a 2d context the component no-ops.
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(obj)) => match obj.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => return,
		};

		let seed = FIELD_SEED.fetch_add(1, Ordering::Relaxed);
		let (w, h) = measure(&canvas, &window, fullscreen);
		if w > 0.0 && h > 0.0 {
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			*field_init.borrow_mut() = Some(PointField::new(
				config_init.clone(),
				w,
				h,
				viewport_width(&window),
				seed,
			));
		}

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		let config_resize = config_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = measure(&canvas_resize, &win, fullscreen);
			if nw <= 0.0 || nh <= 0.0 {
				return;
			}
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);

			let vw = viewport_width(&win);
			let mut slot = field_resize.borrow_mut();
			match slot.as_mut() {
				Some(f) => f.resize(nw, nh, vw),
				// First measurable layout pass after a zero-sized mount.
				None => *slot = Some(PointField::new(config_resize.clone(), nw, nh, vw, seed)),
			}
		}));
		if let Some(cb) = resize_cb_init.borrow().as_ref() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let field_anim = field_init.clone();
		loop_init.start(move || {
			if let Some(f) = field_anim.borrow_mut().as_mut() {
				f.step();
				render::render(f, &ctx);
			}
		});
	});

	// on_cleanup requires a Send + Sync closure even on wasm; none of the
	// canvas state is, so it crosses the bound inside a SendWrapper.
	let cleanup = SendWrapper::new(teardown(frame_loop, resize_cb, field));
	on_cleanup(move || cleanup.take()());

	view! {
		<canvas node_ref=canvas_ref class=class style="display: block; width: 100%; height: 100%;" />
	}
}
