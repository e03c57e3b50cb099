//! Rule-driven form component
//!
//! Wraps a [`Form`] with reactive field bindings and the submission
//! lifecycle. Validation follows the blur trigger policy: each field
//! validates its own rules when it loses focus, a changed field
//! re-evaluates the enablement of its dependents, and submission
//! re-validates the whole record — awaiting the remote availability
//! check — before either callback fires.

use crate::form::binding::{FieldBinding, display_value};
use crate::form::rendering;
use crate::notify::{Notification, Notifier};
use crate::reactive::Signal;
use crate::submit::{SubmitOutcome, SubmitState};
use grappelli_forms::{EmailLookup, FieldPath, Form, RecordValidation};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

type ValidCallback = Box<dyn Fn(&serde_json::Value)>;
type InvalidCallback = Box<dyn Fn(&BTreeMap<FieldPath, String>)>;

/// Outcome of one remote availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOutcome {
	/// The lookup returned no matching account
	Available,
	/// The lookup returned a conflicting account
	Conflict,
	/// The lookup itself failed; the failure message is displayed
	Failed,
	/// The field changed while the check was in flight; the response
	/// was discarded and no state was touched
	Discarded,
}

/// An in-flight availability check, tagged with the input value it was
/// issued for.
///
/// The probe holds signal handles rather than the component, so the
/// user can keep editing while the round-trip is pending. On resolution
/// the probe compares its tag against the field's current value and
/// discards the response if they no longer match — a stale response
/// never overwrites a newer validation result.
pub struct RemoteProbe {
	path: FieldPath,
	issued_for: String,
	lookup: Arc<dyn EmailLookup>,
	value: Signal<String>,
	error: Signal<Option<String>>,
	conflict_message: String,
	failure_message: String,
}

impl RemoteProbe {
	/// The input value this check was issued for
	pub fn issued_for(&self) -> &str {
		&self.issued_for
	}

	/// Await the lookup and apply its verdict to the field's error
	/// signal, unless the field has moved on.
	pub async fn resolve(self) -> RemoteOutcome {
		let result = self.lookup.find_by_email(self.issued_for.trim()).await;

		if self.value.get() != self.issued_for {
			tracing::debug!(path = %self.path, "discarding stale availability response");
			return RemoteOutcome::Discarded;
		}

		match result {
			Ok(accounts) if accounts.is_empty() => {
				self.error.set(None);
				RemoteOutcome::Available
			}
			Ok(_) => {
				self.error.set(Some(self.conflict_message));
				RemoteOutcome::Conflict
			}
			Err(error) => {
				tracing::warn!(
					path = %self.path,
					error = %error,
					"email availability lookup failed"
				);
				self.error.set(Some(self.failure_message));
				RemoteOutcome::Failed
			}
		}
	}
}

/// Rule-driven form component.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{Form, RuleSet, StaticEmailLookup, TextField};
/// use grappelli_pages::form::FormComponent;
/// use std::sync::Arc;
///
/// let mut form = Form::new();
/// form.add_field(
/// 	Box::new(TextField::new("username").with_label("Username")),
/// 	RuleSet::new().required("Username is Required"),
/// );
///
/// let mut component = FormComponent::new(form, Arc::new(StaticEmailLookup::new()));
/// component.change("username", "django");
/// assert_eq!(component.validate_field(&"username".into()), None);
/// ```
pub struct FormComponent {
	form: Form,
	lookup: Arc<dyn EmailLookup>,
	bindings: Vec<FieldBinding>,
	state: Signal<SubmitState>,
	notifier: Notifier,
	success_notice: Option<String>,
	failure_notice: Option<(String, Duration)>,
	on_valid: Option<ValidCallback>,
	on_invalid: Option<InvalidCallback>,
}

impl FormComponent {
	/// Build the component, creating one binding per registered field
	/// in registration order
	pub fn new(form: Form, lookup: Arc<dyn EmailLookup>) -> Self {
		let bindings = form
			.fields()
			.map(|field| {
				let initial = display_value(field.path().get(form.defaults()));
				let disabled = !form.is_enabled(field.path());
				FieldBinding::new(field, initial, disabled)
			})
			.collect();

		Self {
			form,
			lookup,
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
	pub fn on_valid(&mut self, callback: impl Fn(&serde_json::Value) + 'static) {
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

	/// Bindings in registration order
	pub fn bindings(&self) -> &[FieldBinding] {
		&self.bindings
	}

	/// Handle to the submission-state signal
	pub fn state(&self) -> Signal<SubmitState> {
		self.state.clone()
	}

	pub fn notifier(&self) -> &Notifier {
		&self.notifier
	}

	pub fn form(&self) -> &Form {
		&self.form
	}

	/// Record a keystroke: sync the raw text into the record and
	/// re-evaluate the enablement of fields that depend on this one.
	/// Input into a disabled field is ignored.
	pub fn change(&mut self, path: impl Into<FieldPath>, raw: impl Into<String>) {
		let path = path.into();
		let raw = raw.into();
		let Some(binding) = self.binding(&path) else {
			return;
		};
		if binding.disabled().get() {
			return;
		}
		binding.value().set(raw.clone());

		if self.form.set_value(&path, serde_json::Value::String(raw)).is_ok() {
			self.refresh_dependents(&path);
		}
	}

	/// Validate one field's synchronous rules and update its error
	/// signal; returns the displayed message, `None` when valid
	pub fn validate_field(&mut self, path: &FieldPath) -> Option<String> {
		let message = match self.form.validate_field(path) {
			Ok(message) => message,
			Err(error) => {
				tracing::debug!(error = %error, "validation requested for unregistered path");
				return None;
			}
		};
		if let Some(binding) = self.binding(path) {
			binding.error().set(message.clone());
		}
		message
	}

	/// Issue the availability check for a field whose rules carry one.
	///
	/// Returns `None` when the field has no remote rule, is disabled, or
	/// is empty. Issue the probe only after [`validate_field`] passed —
	/// the check runs last in the rule order.
	///
	/// [`validate_field`]: FormComponent::validate_field
	pub fn remote_probe(&self, path: &FieldPath) -> Option<RemoteProbe> {
		let binding = self.binding(path)?;
		if binding.disabled().get() {
			return None;
		}
		let remote = self.form.rules(path)?.remote_rule()?;
		let issued_for = binding.value().get();
		if issued_for.trim().is_empty() {
			return None;
		}
		Some(RemoteProbe {
			path: path.clone(),
			issued_for,
			lookup: Arc::clone(&self.lookup),
			value: binding.value(),
			error: binding.error(),
			conflict_message: remote.conflict_message().to_string(),
			failure_message: remote.failure_message().to_string(),
		})
	}

	/// Blur trigger: validate the field's synchronous rules, then await
	/// its availability check if one is configured and the rules passed
	pub async fn blur(&mut self, path: impl Into<FieldPath>) {
		let path = path.into();
		if self.validate_field(&path).is_some() {
			return;
		}
		if let Some(probe) = self.remote_probe(&path) {
			probe.resolve().await;
		}
	}

	/// Submission attempt: full-record validation, then either the
	/// success flow (callback, reset, success notification) or the
	/// failure flow (callback, error notification, state retained).
	pub async fn submit(&mut self) -> SubmitOutcome {
		self.state.set(SubmitState::Validating);
		let validation = self.form.validate_record(self.lookup.as_ref()).await;

		match validation {
			RecordValidation::Valid(record) => {
				self.state.set(SubmitState::SubmitSuccess);
				if let Some(callback) = &self.on_valid {
					callback(&record);
				}
				self.reset();
				if let Some(message) = &self.success_notice {
					self.notifier.push(Notification::success(message.clone()));
				}
				self.state.set(SubmitState::Idle);
				tracing::debug!("registration record submitted");
				SubmitOutcome::Submitted(record)
			}
			RecordValidation::Invalid(errors) => {
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
				tracing::debug!(errors = errors.len(), "submission rejected");
				SubmitOutcome::Rejected(errors)
			}
		}
	}

	/// Unconditionally restore the record to its defaults and clear all
	/// error state, independent of submission state
	pub fn reset(&mut self) {
		self.form.reset();
		for binding in &self.bindings {
			let initial = display_value(binding.path().get(self.form.defaults()));
			binding.value().set(initial);
			binding.error().set(None);
			binding.disabled().set(!self.form.is_enabled(binding.path()));
		}
	}

	/// Render the form markup: labeled inputs with current values,
	/// inline error text, and submit/reset controls
	pub fn render(&self) -> String {
		rendering::render_form(&self.bindings, true)
	}

	fn refresh_dependents(&mut self, changed: &FieldPath) {
		let dependents: Vec<FieldPath> = self
			.form
			.dependents_of(changed)
			.into_iter()
			.cloned()
			.collect();

		for dependent in dependents {
			let enabled = self.form.is_enabled(&dependent);
			if let Some(binding) = self.binding(&dependent) {
				binding.disabled().set(!enabled);
				if !enabled {
					binding.error().set(None);
				}
			}
			if !enabled {
				self.form.clear_error(&dependent);
			}
		}
	}
}
