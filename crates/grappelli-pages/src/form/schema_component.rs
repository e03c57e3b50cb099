//! Resolver-driven form component
//!
//! In contrast to [`FormComponent`](crate::form::FormComponent), this
//! component performs no per-field validation at all: keystrokes only
//! record values, and a submission attempt evaluates the whole record
//! atomically through the [`Resolver`] — one batch pass, every violation
//! reported simultaneously, no network involved.

use crate::form::binding::{FieldBinding, display_value};
use crate::form::rendering;
use crate::notify::{Notification, Notifier};
use crate::reactive::Signal;
use crate::submit::{SubmitOutcome, SubmitState};
use grappelli_forms::{FieldPath, FormField, Resolver};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

type ValidCallback = Box<dyn Fn(&Value)>;
type InvalidCallback = Box<dyn Fn(&BTreeMap<FieldPath, String>)>;

/// Schema-driven form component: batch validation on submission only.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{FormField, Schema, SchemaField, TextField};
/// use grappelli_pages::form::SchemaFormComponent;
///
/// let fields: Vec<Box<dyn FormField>> =
/// 	vec![Box::new(TextField::new("username").with_label("Username"))];
/// let schema = Schema::new()
/// 	.field(SchemaField::new("username").required("Username is required"));
///
/// let mut component = SchemaFormComponent::new(fields, Box::new(schema));
/// let outcome = component.submit();
/// assert!(!outcome.is_submitted());
/// ```
pub struct SchemaFormComponent {
	fields: Vec<Box<dyn FormField>>,
	resolver: Box<dyn Resolver>,
	data: Value,
	defaults: Value,
	bindings: Vec<FieldBinding>,
	state: Signal<SubmitState>,
	notifier: Notifier,
	success_notice: Option<String>,
	failure_notice: Option<(String, Duration)>,
	on_valid: Option<ValidCallback>,
	on_invalid: Option<InvalidCallback>,
}

impl SchemaFormComponent {
	/// Build the component from its fields and the resolver that
	/// adjudicates the whole record
	pub fn new(fields: Vec<Box<dyn FormField>>, resolver: Box<dyn Resolver>) -> Self {
		let mut defaults = Value::Object(serde_json::Map::new());
		for field in &fields {
			field.path().set(&mut defaults, field.default_value());
		}
		let bindings = fields
			.iter()
			.map(|field| {
				let initial = display_value(field.path().get(&defaults));
				FieldBinding::new(field.as_ref(), initial, false)
			})
			.collect();

		Self {
			fields,
			resolver,
			data: defaults.clone(),
			defaults,
			bindings,
			state: Signal::new(SubmitState::Idle),
			notifier: Notifier::new(),
			success_notice: None,
			failure_notice: None,
			on_valid: None,
			on_invalid: None,
		}
	}

	/// Surface a success notification with this message after each
	/// successful submission
	pub fn with_success_notice(mut self, message: impl Into<String>) -> Self {
		self.success_notice = Some(message.into());
		self
	}

	/// Surface an error notification with this message and display
	/// duration after each rejected submission
	pub fn with_failure_notice(mut self, message: impl Into<String>, duration: Duration) -> Self {
		self.failure_notice = Some((message.into(), duration));
		self
	}

	/// Install the success callback, invoked with the finalized record
	pub fn on_valid(&mut self, callback: impl Fn(&Value) + 'static) {
		self.on_valid = Some(Box::new(callback));
	}

	/// Install the failure callback, invoked with the full
	/// path → message error map
	pub fn on_invalid(&mut self, callback: impl Fn(&BTreeMap<FieldPath, String>) + 'static) {
		self.on_invalid = Some(Box::new(callback));
	}

	pub fn binding(&self, path: &FieldPath) -> Option<&FieldBinding> {
		self.bindings.iter().find(|binding| binding.path() == path)
	}

	pub fn bindings(&self) -> &[FieldBinding] {
		&self.bindings
	}

	pub fn state(&self) -> Signal<SubmitState> {
		self.state.clone()
	}

	pub fn notifier(&self) -> &Notifier {
		&self.notifier
	}

	/// Record a keystroke. No validation runs until submission.
	pub fn change(&mut self, path: impl Into<FieldPath>, raw: impl Into<String>) {
		let path = path.into();
		let raw = raw.into();
		let Some(binding) = self.binding(&path) else {
			return;
		};
		binding.value().set(raw.clone());
		path.set(&mut self.data, Value::String(raw));
	}

	/// Submission attempt: coerce every field, evaluate the whole record
	/// through the resolver in one pass, then run the success or failure
	/// flow. Synchronous — the schema never reaches the network.
	pub fn submit(&mut self) -> SubmitOutcome {
		self.state.set(SubmitState::Validating);

		let mut errors: BTreeMap<FieldPath, String> = BTreeMap::new();
		let mut cleaned = self.defaults.clone();
		for field in &self.fields {
			let raw = field.path().get(&self.data);
			match field.clean(raw) {
				Ok(value) => field.path().set(&mut cleaned, value),
				Err(error) => {
					errors.insert(field.path().clone(), error.to_string());
				}
			}
		}

		if let Err(violations) = self.resolver.resolve(&cleaned) {
			for (path, message) in violations {
				errors.entry(path).or_insert(message);
			}
		}

		if errors.is_empty() {
			self.state.set(SubmitState::SubmitSuccess);
			for binding in &self.bindings {
				binding.error().set(None);
			}
			if let Some(callback) = &self.on_valid {
				callback(&cleaned);
			}
			self.reset();
			if let Some(message) = &self.success_notice {
				self.notifier.push(Notification::success(message.clone()));
			}
			self.state.set(SubmitState::Idle);
			tracing::debug!("schema record submitted");
			SubmitOutcome::Submitted(cleaned)
		} else {
			self.state.set(SubmitState::SubmitError);
			for binding in &self.bindings {
				binding.error().set(errors.get(binding.path()).cloned());
			}
			if let Some(callback) = &self.on_invalid {
				callback(&errors);
			}
			if let Some((message, duration)) = &self.failure_notice {
				self.notifier
					.push(Notification::error(message.clone()).with_duration(*duration));
			}
			self.state.set(SubmitState::Idle);
			tracing::debug!(errors = errors.len(), "schema submission rejected");
			SubmitOutcome::Rejected(errors)
		}
	}

	/// Unconditionally restore the record to its defaults and clear all
	/// error state
	pub fn reset(&mut self) {
		self.data = self.defaults.clone();
		for binding in &self.bindings {
			let initial = display_value(binding.path().get(&self.defaults));
			binding.value().set(initial);
			binding.error().set(None);
		}
	}

	/// Render the form markup: labeled inputs with current values,
	/// inline error text, and a submit control
	pub fn render(&self) -> String {
		rendering::render_form(&self.bindings, false)
	}
}
