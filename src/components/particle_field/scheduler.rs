//! Frame scheduling for the animation loop.
//!
//! [`FrameLoop`] wraps `requestAnimationFrame` behind an explicit
//! `start`/`stop` pair. `start` is idempotent while the loop runs and
//! `stop` may be called any number of times; a frame the browser already
//! dispatched before `stop` bails out on the phase check instead of
//! painting a torn-down canvas.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Lifecycle of a frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Running,
	Cancelled,
}

impl Phase {
	/// Transition for `start`. Returns the next phase and whether a new
	/// frame callback should be armed.
	fn on_start(self) -> (Self, bool) {
		match self {
			Phase::Idle | Phase::Cancelled => (Phase::Running, true),
			Phase::Running => (Phase::Running, false),
		}
	}

	/// Transition for `stop`.
	fn on_stop(self) -> Self {
		match self {
			Phase::Idle => Phase::Idle,
			Phase::Running | Phase::Cancelled => Phase::Cancelled,
		}
	}
}

struct Inner {
	phase: Phase,
	raf_id: Option<i32>,
	tick: Option<Closure<dyn FnMut()>>,
}

/// Request the next frame for the stored callback.
fn arm(inner: &mut Inner) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(cb) = inner.tick.as_ref() {
		inner.raf_id = window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok();
	}
}

/// A cancellable `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct FrameLoop {
	inner: Rc<RefCell<Inner>>,
}

impl FrameLoop {
	pub fn new() -> Self {
		Self {
			inner: Rc::new(RefCell::new(Inner {
				phase: Phase::Idle,
				raf_id: None,
				tick: None,
			})),
		}
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> Phase {
		self.inner.borrow().phase
	}

	/// Begin invoking `frame` once per animation frame. Calling `start` on
	/// an already-running loop is a no-op.
	pub fn start<F: FnMut() + 'static>(&self, mut frame: F) {
		{
			let mut inner = self.inner.borrow_mut();
			let (next, arm) = inner.phase.on_start();
			inner.phase = next;
			if !arm {
				return;
			}
		}

		let weak = Rc::downgrade(&self.inner);
		let tick = Closure::new(move || {
			let Some(inner_rc) = weak.upgrade() else {
				return;
			};
			if inner_rc.borrow().phase != Phase::Running {
				return;
			}

			frame();

			let mut inner = inner_rc.borrow_mut();
			if inner.phase == Phase::Running {
				arm(&mut inner);
			}
		});

		let mut inner = self.inner.borrow_mut();
		inner.tick = Some(tick);
		arm(&mut inner);
	}

	/// Stop the loop and cancel any pending frame. Safe to call repeatedly.
	pub fn stop(&self) {
		let mut inner = self.inner.borrow_mut();
		inner.phase = inner.phase.on_stop();
		if let Some(id) = inner.raf_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		// The closure stays allocated until the loop is dropped so a frame
		// already in flight has something to return into.
	}
}

impl Default for FrameLoop {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn start_arms_only_from_idle_or_cancelled() {
		assert_eq!(Phase::Idle.on_start(), (Phase::Running, true));
		assert_eq!(Phase::Cancelled.on_start(), (Phase::Running, true));
		assert_eq!(Phase::Running.on_start(), (Phase::Running, false));
	}

	#[test]
	fn stop_is_terminal_and_repeatable() {
		assert_eq!(Phase::Running.on_stop(), Phase::Cancelled);
		assert_eq!(Phase::Cancelled.on_stop(), Phase::Cancelled);
		assert_eq!(Phase::Idle.on_stop(), Phase::Idle);
	}

	#[test]
	fn stopped_loop_never_rearms() {
		// A dispatched frame checks the phase before painting; after stop
		// the phase can only be Cancelled, so the callback returns without
		// re-arming.
		let mut phase = Phase::Idle;
		(phase, _) = phase.on_start();
		phase = phase.on_stop();
		phase = phase.on_stop();
		assert_eq!(phase, Phase::Cancelled);
	}
}
