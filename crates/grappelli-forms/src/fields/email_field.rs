//! Email field

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::path::FieldPath;

/// Email address field.
///
/// Coercion trims the raw input like [`TextField`](super::TextField);
/// well-formedness is enforced by the pattern rule attached to the field,
/// not by coercion, so a malformed address reaches the rules with its
/// configured message intact.
#[derive(Debug, Clone)]
pub struct EmailField {
	pub path: FieldPath,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	widget: Widget,
}

impl EmailField {
	/// Create a new EmailField at the given path
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{EmailField, FormField, Widget};
	///
	/// let field = EmailField::new("email");
	/// assert_eq!(field.widget(), &Widget::EmailInput);
	/// ```
	pub fn new(path: impl Into<FieldPath>) -> Self {
		Self {
			path: path.into(),
			label: None,
			placeholder: None,
			widget: Widget::EmailInput,
		}
	}

	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the input placeholder for the field
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}
}

impl FormField for EmailField {
	fn path(&self) -> &FieldPath {
		&self.path
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn default_value(&self) -> serde_json::Value {
		serde_json::Value::String(String::new())
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		match value {
			None | Some(serde_json::Value::Null) => Ok(self.default_value()),
			Some(serde_json::Value::String(s)) => {
				Ok(serde_json::Value::String(s.trim().to_string()))
			}
			Some(_) => Err(FieldError::Invalid("Value must be a string".to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_email_field_trims_input() {
		let field = EmailField::new("email");

		let cleaned = field.clean(Some(&json!(" user@example.com "))).unwrap();

		assert_eq!(cleaned, json!("user@example.com"));
	}

	#[test]
	fn test_email_field_does_not_judge_format() {
		// Format is the pattern rule's job; coercion passes it through
		let field = EmailField::new("email");

		assert_eq!(
			field.clean(Some(&json!("not-an-email"))).unwrap(),
			json!("not-an-email")
		);
	}

	#[test]
	fn test_email_field_empty_is_default() {
		let field = EmailField::new("email");

		let cleaned = field.clean(None).unwrap();

		assert!(field.is_empty(&cleaned));
	}
}
