//! Reactive value container

use crate::reactive::runtime::{self, EffectInner};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A single-threaded reactive value.
///
/// Cloning a `Signal` clones the handle, not the value: all clones share
/// the same storage. Reading inside an [`Effect`](crate::reactive::Effect)
/// subscribes that effect; [`set`](Signal::set) and
/// [`update`](Signal::update) re-run subscribed effects.
///
/// # Examples
///
/// ```
/// use grappelli_pages::reactive::Signal;
///
/// let value = Signal::new("".to_string());
/// let shared = value.clone();
///
/// shared.set("django".to_string());
/// assert_eq!(value.get(), "django");
/// ```
pub struct Signal<T> {
	inner: Rc<SignalInner<T>>,
}

struct SignalInner<T> {
	value: RefCell<T>,
	subscribers: RefCell<Vec<Weak<EffectInner>>>,
}

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: Clone> Signal<T> {
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(SignalInner {
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
			}),
		}
	}

	/// Clone out the current value, subscribing the running effect
	pub fn get(&self) -> T {
		self.track();
		self.inner.value.borrow().clone()
	}

	/// Read the current value through a closure without cloning it
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		self.track();
		f(&self.inner.value.borrow())
	}

	/// Replace the value and re-run subscribed effects
	pub fn set(&self, value: T) {
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Mutate the value in place and re-run subscribed effects
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_pages::reactive::Signal;
	///
	/// let count = Signal::new(0);
	/// count.update(|n| *n += 1);
	/// assert_eq!(count.get(), 1);
	/// ```
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.inner.value.borrow_mut());
		self.notify();
	}

	fn track(&self) {
		if let Some(observer) = runtime::current_observer() {
			let mut subscribers = self.inner.subscribers.borrow_mut();
			if !subscribers.iter().any(|existing| existing.ptr_eq(&observer)) {
				subscribers.push(observer);
			}
		}
	}

	fn notify(&self) {
		// Take the current subscriber list; effects that still read this
		// signal re-subscribe while running, dropped effects fall away.
		let subscribers = std::mem::take(&mut *self.inner.subscribers.borrow_mut());
		for weak in subscribers {
			if let Some(effect) = weak.upgrade() {
				runtime::run_effect(&effect);
			}
		}
	}
}
