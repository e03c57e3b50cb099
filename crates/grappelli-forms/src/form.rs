//! The rule-driven form: record tree, per-field and full-record validation
//!
//! ```mermaid
//! flowchart LR
//! 	subgraph Record["Record tree (serde_json)"]
//! 		Raw["raw values<br/>by field path"]
//! 	end
//!
//! 	subgraph Validation["Per field, in registration order"]
//! 		Clean["FormField::clean<br/>(typed coercion)"]
//! 		Sync["RuleSet::evaluate_sync<br/>(required → pattern → checks)"]
//! 		Remote["EmailLookup<br/>(awaited)"]
//! 	end
//!
//! 	Raw --> Clean --> Sync --> Remote
//! 	Remote -->|all valid| Cleaned["finalized record"]
//! 	Remote -->|any failure| Errors["path → message map"]
//! ```

use crate::field::FormField;
use crate::lookup::EmailLookup;
use crate::path::FieldPath;
use crate::rules::RuleSet;
use serde_json::Value;
use std::collections::BTreeMap;

static NULL: Value = Value::Null;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("no field registered at path {0}")]
	UnknownField(FieldPath),
}

pub type FormResult<T> = Result<T, FormError>;

/// Outcome of a full-record validation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValidation {
	/// Every enabled field passed; carries the finalized record
	Valid(Value),
	/// At least one field failed; carries the full path → message map
	Invalid(BTreeMap<FieldPath, String>),
}

impl RecordValidation {
	pub fn is_valid(&self) -> bool {
		matches!(self, RecordValidation::Valid(_))
	}
}

type EnablePredicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

struct Enablement {
	path: FieldPath,
	depends_on: FieldPath,
	predicate: EnablePredicate,
}

/// A form: registered fields with their rule sets, the raw record tree,
/// and the field-path-keyed error state (at most one message per path).
///
/// The record is created from field defaults when the form is built,
/// mutated value-by-value as the user interacts, and restored to the
/// defaults on [`reset`](Form::reset).
///
/// # Examples
///
/// ```
/// use grappelli_forms::{Form, RuleSet, TextField};
/// use serde_json::json;
///
/// let mut form = Form::new();
/// form.add_field(
/// 	Box::new(TextField::new("username")),
/// 	RuleSet::new().required("Username is Required"),
/// );
///
/// let message = form.validate_field(&"username".into()).unwrap();
/// assert_eq!(message.as_deref(), Some("Username is Required"));
///
/// form.set_value(&"username".into(), json!("django")).unwrap();
/// assert_eq!(form.validate_field(&"username".into()).unwrap(), None);
/// assert!(!form.has_errors());
/// ```
pub struct Form {
	fields: Vec<(Box<dyn FormField>, RuleSet)>,
	data: Value,
	defaults: Value,
	errors: BTreeMap<FieldPath, String>,
	enablements: Vec<Enablement>,
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

impl Form {
	/// Create a new empty form
	pub fn new() -> Self {
		Self {
			fields: Vec::new(),
			data: Value::Object(serde_json::Map::new()),
			defaults: Value::Object(serde_json::Map::new()),
			errors: BTreeMap::new(),
			enablements: Vec::new(),
		}
	}

	/// Register a field with its rules; the field's default value is
	/// written into both the defaults snapshot and the live record.
	pub fn add_field(&mut self, field: Box<dyn FormField>, rules: RuleSet) {
		let default = field.default_value();
		field.path().set(&mut self.defaults, default.clone());
		field.path().set(&mut self.data, default);
		self.fields.push((field, rules));
	}

	/// Make `path` enabled only while `predicate` holds for the current
	/// value at `depends_on`. A disabled field is excluded from
	/// validation and contributes its default to the finalized record.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{Form, RuleSet, TextField};
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(TextField::new("channel")), RuleSet::new());
	/// form.add_field(Box::new(TextField::new("social.twitter")), RuleSet::new());
	/// form.enable_when("social.twitter", "channel", |v| {
	/// 	v.as_str().is_some_and(|s| !s.is_empty())
	/// });
	///
	/// assert!(!form.is_enabled(&"social.twitter".into()));
	/// form.set_value(&"channel".into(), json!("my channel")).unwrap();
	/// assert!(form.is_enabled(&"social.twitter".into()));
	/// ```
	pub fn enable_when<F>(
		&mut self,
		path: impl Into<FieldPath>,
		depends_on: impl Into<FieldPath>,
		predicate: F,
	) where
		F: Fn(&Value) -> bool + Send + Sync + 'static,
	{
		self.enablements.push(Enablement {
			path: path.into(),
			depends_on: depends_on.into(),
			predicate: Box::new(predicate),
		});
	}

	/// Whether every enablement condition for `path` currently holds
	pub fn is_enabled(&self, path: &FieldPath) -> bool {
		self.enablements
			.iter()
			.filter(|enablement| &enablement.path == path)
			.all(|enablement| {
				let dependency = enablement.depends_on.get(&self.data).unwrap_or(&NULL);
				(enablement.predicate)(dependency)
			})
	}

	/// Paths whose enablement depends on the value at `path`
	pub fn dependents_of(&self, path: &FieldPath) -> Vec<&FieldPath> {
		self.enablements
			.iter()
			.filter(|enablement| &enablement.depends_on == path)
			.map(|enablement| &enablement.path)
			.collect()
	}

	/// Replace the whole raw record (field defaults remain the reset target)
	pub fn bind(&mut self, record: Value) {
		self.data = record;
	}

	/// Store a raw value at a registered path
	pub fn set_value(&mut self, path: &FieldPath, value: Value) -> FormResult<()> {
		if self.field(path).is_none() {
			return Err(FormError::UnknownField(path.clone()));
		}
		path.set(&mut self.data, value);
		Ok(())
	}

	/// The raw value currently stored at `path`
	pub fn value(&self, path: &FieldPath) -> Option<&Value> {
		path.get(&self.data)
	}

	pub fn raw_record(&self) -> &Value {
		&self.data
	}

	pub fn defaults(&self) -> &Value {
		&self.defaults
	}

	pub fn field(&self, path: &FieldPath) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|(field, _)| field.path() == path)
			.map(|(field, _)| field.as_ref())
	}

	pub fn rules(&self, path: &FieldPath) -> Option<&RuleSet> {
		self.fields
			.iter()
			.find(|(field, _)| field.path() == path)
			.map(|(_, rules)| rules)
	}

	pub fn fields(&self) -> impl Iterator<Item = &dyn FormField> {
		self.fields.iter().map(|(field, _)| field.as_ref())
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Validate one field's synchronous rules (the blur trigger path).
	///
	/// Returns the displayed message, `None` when the field is valid, and
	/// records/clears the path's entry in the error map. A disabled field
	/// always validates clean.
	pub fn validate_field(&mut self, path: &FieldPath) -> FormResult<Option<String>> {
		let index = self
			.fields
			.iter()
			.position(|(field, _)| field.path() == path)
			.ok_or_else(|| FormError::UnknownField(path.clone()))?;

		if !self.is_enabled(path) {
			self.errors.remove(path);
			return Ok(None);
		}

		let (field, rules) = &self.fields[index];
		let raw = path.get(&self.data);
		let outcome = match field.clean(raw) {
			Ok(cleaned) => rules.evaluate_sync(field.as_ref(), &cleaned),
			Err(error) => Err(error),
		};

		match outcome {
			Ok(()) => {
				self.errors.remove(path);
				Ok(None)
			}
			Err(error) => {
				let message = error.to_string();
				self.errors.insert(path.clone(), message.clone());
				Ok(Some(message))
			}
		}
	}

	/// Validate the whole record: coercion and synchronous rules for
	/// every enabled field, then the remote availability check for fields
	/// that carry one (awaited — submission cannot complete around it).
	///
	/// On success the finalized record is returned with disabled fields
	/// replaced by their defaults. On failure the full path → message map
	/// is returned and also retained on the form.
	pub async fn validate_record(&mut self, lookup: &dyn EmailLookup) -> RecordValidation {
		let mut errors: BTreeMap<FieldPath, String> = BTreeMap::new();
		let mut finalized = self.defaults.clone();

		for (field, rules) in &self.fields {
			let path = field.path();
			if !self.is_enabled(path) {
				continue;
			}

			let raw = path.get(&self.data);
			let cleaned = match field.clean(raw) {
				Ok(cleaned) => cleaned,
				Err(error) => {
					errors.insert(path.clone(), error.to_string());
					continue;
				}
			};

			if let Err(error) = rules.evaluate_sync(field.as_ref(), &cleaned) {
				errors.insert(path.clone(), error.to_string());
				continue;
			}

			if let Some(remote) = rules.remote_rule()
				&& !field.is_empty(&cleaned)
				&& let Some(email) = cleaned.as_str()
			{
				match lookup.find_by_email(email).await {
					Ok(accounts) if accounts.is_empty() => {}
					Ok(_) => {
						errors.insert(path.clone(), remote.conflict_message().to_string());
						continue;
					}
					Err(error) => {
						tracing::warn!(
							path = %path,
							error = %error,
							"email availability lookup failed"
						);
						errors.insert(path.clone(), remote.failure_message().to_string());
						continue;
					}
				}
			}

			path.set(&mut finalized, cleaned);
		}

		self.errors = errors.clone();
		if errors.is_empty() {
			RecordValidation::Valid(finalized)
		} else {
			RecordValidation::Invalid(errors)
		}
	}

	/// Record an error message for `path` (used by component layers that
	/// resolve asynchronous checks outside `validate_record`)
	pub fn add_error(&mut self, path: &FieldPath, message: impl Into<String>) {
		self.errors.insert(path.clone(), message.into());
	}

	/// Clear the error recorded for `path`, if any
	pub fn clear_error(&mut self, path: &FieldPath) {
		self.errors.remove(path);
	}

	pub fn errors(&self) -> &BTreeMap<FieldPath, String> {
		&self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	/// Restore the record to its defaults and clear all error state,
	/// independent of submission state
	pub fn reset(&mut self) {
		self.data = self.defaults.clone();
		self.errors.clear();
	}
}
