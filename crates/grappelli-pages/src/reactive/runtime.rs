//! Thread-local reactive runtime
//!
//! Tracks the currently running effect so that signals read during its
//! execution can subscribe it. The observer stack handles effects that
//! create further effects while running.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub(crate) struct EffectInner {
	pub(crate) run: RefCell<Box<dyn FnMut()>>,
	// Re-entrancy guard: an effect that writes a signal it also reads
	// must not recurse into itself.
	pub(crate) running: Cell<bool>,
}

thread_local! {
	static OBSERVERS: RefCell<Vec<Weak<EffectInner>>> = const { RefCell::new(Vec::new()) };
}

/// The effect currently executing, if any.
pub(crate) fn current_observer() -> Option<Weak<EffectInner>> {
	OBSERVERS.with(|stack| stack.borrow().last().cloned())
}

/// Run `effect` with dependency tracking enabled.
pub(crate) fn run_effect(effect: &Rc<EffectInner>) {
	if effect.running.get() {
		return;
	}
	effect.running.set(true);
	OBSERVERS.with(|stack| stack.borrow_mut().push(Rc::downgrade(effect)));
	(effect.run.borrow_mut())();
	OBSERVERS.with(|stack| {
		stack.borrow_mut().pop();
	});
	effect.running.set(false);
}
