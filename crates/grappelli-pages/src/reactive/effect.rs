//! Reactive side effects with automatic dependency tracking

use crate::reactive::runtime::{self, EffectInner};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A side effect that re-runs when its reactive dependencies change.
///
/// Dependencies are tracked automatically: any [`Signal`] read during a
/// run subscribes the effect until its handle is dropped. The closure
/// runs once immediately on construction.
///
/// [`Signal`]: crate::reactive::Signal
///
/// # Examples
///
/// ```
/// use grappelli_pages::reactive::{Effect, Signal};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let name = Signal::new("".to_string());
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let _effect = Effect::new({
/// 	let name = name.clone();
/// 	let seen = Rc::clone(&seen);
/// 	move || seen.borrow_mut().push(name.get())
/// });
///
/// name.set("django".to_string());
/// assert_eq!(*seen.borrow(), vec!["".to_string(), "django".to_string()]);
/// ```
pub struct Effect {
	// Keeps the effect alive; signals only hold weak references
	#[allow(dead_code)]
	inner: Rc<EffectInner>,
}

impl Effect {
	/// Create the effect and run it once immediately
	pub fn new(f: impl FnMut() + 'static) -> Self {
		let inner = Rc::new(EffectInner {
			run: RefCell::new(Box::new(f)),
			running: Cell::new(false),
		});
		runtime::run_effect(&inner);
		Self { inner }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reactive::Signal;
	use serial_test::serial;
	use std::cell::RefCell;
	use std::rc::Rc;

	#[test]
	#[serial]
	fn test_effect_runs_immediately() {
		let called = Rc::new(RefCell::new(false));

		let _effect = Effect::new({
			let called = Rc::clone(&called);
			move || *called.borrow_mut() = true
		});

		assert!(*called.borrow());
	}

	#[test]
	#[serial]
	fn test_effect_reruns_on_signal_change() {
		let count = Signal::new(0);
		let runs = Rc::new(RefCell::new(0));

		let _effect = Effect::new({
			let count = count.clone();
			let runs = Rc::clone(&runs);
			move || {
				let _ = count.get();
				*runs.borrow_mut() += 1;
			}
		});
		assert_eq!(*runs.borrow(), 1);

		count.set(1);
		assert_eq!(*runs.borrow(), 2);

		count.set(2);
		assert_eq!(*runs.borrow(), 3);
	}

	#[test]
	#[serial]
	fn test_dropped_effect_stops_rerunning() {
		let count = Signal::new(0);
		let runs = Rc::new(RefCell::new(0));

		let effect = Effect::new({
			let count = count.clone();
			let runs = Rc::clone(&runs);
			move || {
				let _ = count.get();
				*runs.borrow_mut() += 1;
			}
		});
		drop(effect);

		count.set(1);

		assert_eq!(*runs.borrow(), 1);
	}

	#[test]
	#[serial]
	fn test_effect_tracks_multiple_signals() {
		let a = Signal::new(0);
		let b = Signal::new(0);
		let sums = Rc::new(RefCell::new(Vec::new()));

		let _effect = Effect::new({
			let a = a.clone();
			let b = b.clone();
			let sums = Rc::clone(&sums);
			move || sums.borrow_mut().push(a.get() + b.get())
		});

		a.set(1);
		b.set(2);

		assert_eq!(*sums.borrow(), vec![0, 1, 3]);
	}

	#[test]
	#[serial]
	fn test_effect_writing_its_own_dependency_does_not_recurse() {
		let count = Signal::new(0);

		let _effect = Effect::new({
			let count = count.clone();
			move || {
				let current = count.get();
				if current < 1 {
					count.set(current + 1);
				}
			}
		});

		// The guard stops self-recursion; the write still lands
		assert_eq!(count.get(), 1);
	}
}
