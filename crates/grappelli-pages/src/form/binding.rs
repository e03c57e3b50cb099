//! Per-field input bindings
//!
//! A [`FieldBinding`] is what a rendered input is wired to: the current
//! raw text, the displayed error (at most one message at a time), and
//! whether the input is disabled, each behind a [`Signal`] so rendering
//! reacts to changes.

use crate::reactive::Signal;
use grappelli_forms::{FieldPath, FormField, Widget};

/// Input bindings for one field path.
pub struct FieldBinding {
	path: FieldPath,
	label: Option<String>,
	placeholder: Option<String>,
	widget: Widget,
	value: Signal<String>,
	error: Signal<Option<String>>,
	disabled: Signal<bool>,
}

impl FieldBinding {
	pub(crate) fn new(field: &dyn FormField, initial: String, disabled: bool) -> Self {
		Self {
			path: field.path().clone(),
			label: field.label().map(str::to_string),
			placeholder: field.placeholder().map(str::to_string),
			widget: field.widget().clone(),
			value: Signal::new(initial),
			error: Signal::new(None),
			disabled: Signal::new(disabled),
		}
	}

	pub fn path(&self) -> &FieldPath {
		&self.path
	}

	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	pub fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	pub fn widget(&self) -> &Widget {
		&self.widget
	}

	/// Handle to the raw text signal (clones share storage)
	pub fn value(&self) -> Signal<String> {
		self.value.clone()
	}

	/// Handle to the displayed error signal
	pub fn error(&self) -> Signal<Option<String>> {
		self.error.clone()
	}

	/// Handle to the disabled-state signal
	pub fn disabled(&self) -> Signal<bool> {
		self.disabled.clone()
	}
}

/// Render a raw record value as input text.
pub(crate) fn display_value(value: Option<&serde_json::Value>) -> String {
	match value {
		Some(serde_json::Value::String(s)) => s.clone(),
		Some(serde_json::Value::Number(n)) => n.to_string(),
		Some(serde_json::Value::Bool(b)) => b.to_string(),
		_ => String::new(),
	}
}
