//! Batch schema validation
//!
//! A [`Schema`] describes constraints for the whole record declaratively
//! and validates it atomically in one pass: every field is checked, all
//! violations are reported simultaneously, and no network is involved.
//! This is the counterpart to the incremental, per-field evaluation in
//! [`crate::form`] — the two deliberately do not share a trigger policy.
//!
//! The [`Resolver`] trait is the adapter seam: it translates a schema's
//! result into the field-path-to-message error map the component layer
//! consumes.

use crate::path::FieldPath;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

// Well-formedness only; deliverability is a remote concern.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Constraints for one top-level field of the schema.
///
/// Within a field the first violated constraint provides the message:
/// an empty value reports the `required` message, a present but
/// malformed value reports the `email` message.
#[derive(Debug, Clone)]
pub struct SchemaField {
	path: FieldPath,
	required: Option<String>,
	email: Option<String>,
}

impl SchemaField {
	pub fn new(path: impl Into<FieldPath>) -> Self {
		Self {
			path: path.into(),
			required: None,
			email: None,
		}
	}

	/// Reject empty values with `message`
	pub fn required(mut self, message: impl Into<String>) -> Self {
		self.required = Some(message.into());
		self
	}

	/// Reject malformed email addresses with `message`
	pub fn email(mut self, message: impl Into<String>) -> Self {
		self.email = Some(message.into());
		self
	}

	pub fn path(&self) -> &FieldPath {
		&self.path
	}

	/// First violated message for the value at this field's path, if any
	fn violation(&self, record: &Value) -> Option<String> {
		let text = self
			.path
			.get(record)
			.and_then(Value::as_str)
			.unwrap_or("")
			.trim();

		if text.is_empty() {
			return self.required.clone();
		}

		if let Some(message) = &self.email
			&& !EMAIL_REGEX.is_match(text)
		{
			return Some(message.clone());
		}

		None
	}
}

/// A declarative schema over the whole record.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{Schema, SchemaField};
/// use serde_json::json;
///
/// let schema = Schema::new()
/// 	.field(SchemaField::new("username").required("Username is required"))
/// 	.field(
/// 		SchemaField::new("email")
/// 			.email("Format not valid")
/// 			.required("Email is required"),
/// 	);
///
/// let errors = schema.validate(&json!({"username": "", "email": "not-an-email"}));
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
	fields: Vec<SchemaField>,
}

impl Schema {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a field's constraints to the schema
	pub fn field(mut self, field: SchemaField) -> Self {
		self.fields.push(field);
		self
	}

	pub fn fields(&self) -> &[SchemaField] {
		&self.fields
	}

	/// Validate the whole record in one pass.
	///
	/// Every field is evaluated — violations do not short-circuit across
	/// fields — and the returned map carries the first violated message
	/// per field path. An empty map means the record is valid.
	pub fn validate(&self, record: &Value) -> BTreeMap<FieldPath, String> {
		let mut errors = BTreeMap::new();
		for field in &self.fields {
			if let Some(message) = field.violation(record) {
				errors.insert(field.path().clone(), message);
			}
		}
		errors
	}
}

/// Adapter translating a declarative schema's validation result into the
/// field-path-to-message error map the component layer consumes.
pub trait Resolver: Send + Sync {
	/// `Ok(())` when the record satisfies the schema, otherwise the full
	/// violation map
	fn resolve(&self, record: &Value) -> Result<(), BTreeMap<FieldPath, String>>;
}

impl Resolver for Schema {
	fn resolve(&self, record: &Value) -> Result<(), BTreeMap<FieldPath, String>> {
		let errors = self.validate(record);
		if errors.is_empty() { Ok(()) } else { Err(errors) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn profile_schema() -> Schema {
		Schema::new()
			.field(SchemaField::new("username").required("Username is required"))
			.field(
				SchemaField::new("email")
					.email("Format not valid")
					.required("Email is required"),
			)
			.field(SchemaField::new("channel").required("Channel is required"))
	}

	#[test]
	fn test_all_violations_reported_in_one_pass() {
		// Arrange
		let schema = profile_schema();
		let record = json!({"username": "", "email": "", "channel": ""});

		// Act
		let errors = schema.validate(&record);

		// Assert: three simultaneous messages, one pass
		assert_eq!(errors.len(), 3);
		assert_eq!(errors[&FieldPath::from("username")], "Username is required");
		assert_eq!(errors[&FieldPath::from("email")], "Email is required");
		assert_eq!(errors[&FieldPath::from("channel")], "Channel is required");
	}

	#[test]
	fn test_required_message_wins_for_empty_email() {
		let schema = profile_schema();

		let errors = schema.validate(&json!({"username": "u", "email": "", "channel": "c"}));

		assert_eq!(errors[&FieldPath::from("email")], "Email is required");
	}

	#[rstest]
	#[case("not-an-email")]
	#[case("user@")]
	#[case("@example.com")]
	#[case("user example@example.com")]
	fn test_malformed_email_reports_format_message(#[case] email: &str) {
		let schema = profile_schema();

		let errors = schema.validate(&json!({"username": "u", "email": email, "channel": "c"}));

		assert_eq!(errors[&FieldPath::from("email")], "Format not valid");
	}

	#[test]
	fn test_valid_record_resolves_clean() {
		let schema = profile_schema();
		let record = json!({
			"username": "django",
			"email": "django@example.com",
			"channel": "hot club"
		});

		assert!(schema.validate(&record).is_empty());
		assert!(schema.resolve(&record).is_ok());
	}

	#[test]
	fn test_missing_values_count_as_empty() {
		let schema = profile_schema();

		let errors = schema.validate(&json!({}));

		assert_eq!(errors.len(), 3);
	}
}
