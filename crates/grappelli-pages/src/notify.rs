//! Transient user notifications
//!
//! A [`Notifier`] is an explicit bounded queue passed to the component
//! that submits — never ambient global state. Messages are
//! fire-and-forget: the rendering host drains the queue and displays
//! each notification for its duration; nothing is acknowledged back.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

const DEFAULT_SUCCESS_DURATION: Duration = Duration::from_secs(2);
const DEFAULT_ERROR_DURATION: Duration = Duration::from_secs(4);

/// Notification severity, which selects the display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Success,
	Error,
}

/// One transient message with a bounded display lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub severity: Severity,
	pub message: String,
	pub duration: Duration,
}

impl Notification {
	/// A success notification with the default display duration
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_pages::notify::{Notification, Severity};
	///
	/// let notice = Notification::success("Submitted Successfully");
	/// assert_eq!(notice.severity, Severity::Success);
	/// ```
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Success,
			message: message.into(),
			duration: DEFAULT_SUCCESS_DURATION,
		}
	}

	/// An error notification with the default display duration
	pub fn error(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			message: message.into(),
			duration: DEFAULT_ERROR_DURATION,
		}
	}

	/// Override the display duration
	pub fn with_duration(mut self, duration: Duration) -> Self {
		self.duration = duration;
		self
	}
}

/// Bounded FIFO queue of pending notifications.
///
/// When the queue is full the oldest entry is discarded; a toast that
/// was never displayed is not worth blocking a submission over.
#[derive(Debug)]
pub struct Notifier {
	queue: RefCell<VecDeque<Notification>>,
	capacity: usize,
}

impl Default for Notifier {
	fn default() -> Self {
		Self::new()
	}
}

impl Notifier {
	const DEFAULT_CAPACITY: usize = 8;

	pub fn new() -> Self {
		Self::with_capacity(Self::DEFAULT_CAPACITY)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			queue: RefCell::new(VecDeque::with_capacity(capacity)),
			capacity,
		}
	}

	/// Enqueue a notification, discarding the oldest when full
	pub fn push(&self, notification: Notification) {
		let mut queue = self.queue.borrow_mut();
		while queue.len() >= self.capacity.max(1) {
			queue.pop_front();
		}
		queue.push_back(notification);
	}

	/// Enqueue a success notification
	pub fn success(&self, message: impl Into<String>) {
		self.push(Notification::success(message));
	}

	/// Enqueue an error notification
	pub fn error(&self, message: impl Into<String>) {
		self.push(Notification::error(message));
	}

	/// Remove and return every pending notification, oldest first
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_pages::notify::Notifier;
	///
	/// let notifier = Notifier::new();
	/// notifier.success("Submitted Successfully");
	///
	/// let pending = notifier.drain();
	/// assert_eq!(pending.len(), 1);
	/// assert!(notifier.is_empty());
	/// ```
	pub fn drain(&self) -> Vec<Notification> {
		self.queue.borrow_mut().drain(..).collect()
	}

	pub fn len(&self) -> usize {
		self.queue.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.queue.borrow().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Notification::success("Submitted Successfully"), Duration::from_secs(2))]
	#[case(Notification::error("Check for errors"), Duration::from_secs(4))]
	fn test_default_durations(#[case] notice: Notification, #[case] expected: Duration) {
		assert_eq!(notice.duration, expected);
	}

	#[test]
	fn test_push_and_drain_preserve_order() {
		let notifier = Notifier::new();

		notifier.success("first");
		notifier.error("second");

		let pending = notifier.drain();
		assert_eq!(pending.len(), 2);
		assert_eq!(pending[0].message, "first");
		assert_eq!(pending[0].severity, Severity::Success);
		assert_eq!(pending[1].message, "second");
		assert_eq!(pending[1].severity, Severity::Error);
	}

	#[test]
	fn test_capacity_discards_oldest() {
		let notifier = Notifier::with_capacity(2);

		notifier.success("one");
		notifier.success("two");
		notifier.success("three");

		let pending = notifier.drain();
		assert_eq!(pending.len(), 2);
		assert_eq!(pending[0].message, "two");
		assert_eq!(pending[1].message, "three");
	}

	#[test]
	fn test_custom_duration() {
		let notice = Notification::error("Check for errors").with_duration(Duration::from_secs(1));

		assert_eq!(notice.duration, Duration::from_secs(1));
	}

	#[test]
	fn test_drain_empties_queue() {
		let notifier = Notifier::new();
		notifier.success("only");

		let _ = notifier.drain();

		assert!(notifier.is_empty());
		assert_eq!(notifier.len(), 0);
	}
}
