//! Integer field parsed from raw text input

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::path::FieldPath;

/// Whole-number field coerced from raw text at validation time.
///
/// Unparseable input never fails coercion: it resolves to the `Null`
/// sentinel, which counts as empty and trips the `required` rule with
/// that rule's configured message. The field's numeric default (normally
/// zero) also counts as empty, so an untouched field does not satisfy
/// `required`.
#[derive(Debug, Clone)]
pub struct IntegerField {
	pub path: FieldPath,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	widget: Widget,
	default: i64,
}

impl IntegerField {
	/// Create a new IntegerField at the given path
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{FormField, IntegerField};
	/// use serde_json::json;
	///
	/// let field = IntegerField::new("age");
	/// assert_eq!(field.default_value(), json!(0));
	/// ```
	pub fn new(path: impl Into<FieldPath>) -> Self {
		Self {
			path: path.into(),
			label: None,
			placeholder: None,
			widget: Widget::NumberInput,
			default: 0,
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

	/// Set the default value for the field
	pub fn with_default(mut self, default: i64) -> Self {
		self.default = default;
		self
	}
}

impl FormField for IntegerField {
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
		serde_json::json!(self.default)
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		match value {
			None | Some(serde_json::Value::Null) => Ok(serde_json::Value::Null),
			Some(serde_json::Value::String(s)) => {
				let s = s.trim();
				if s.is_empty() {
					return Ok(serde_json::Value::Null);
				}
				match s.parse::<i64>() {
					Ok(n) => Ok(serde_json::json!(n)),
					// Sentinel: unparseable text trips `required` downstream
					Err(_) => Ok(serde_json::Value::Null),
				}
			}
			Some(serde_json::Value::Number(n)) => match n.as_i64() {
				Some(i) => Ok(serde_json::json!(i)),
				None => Ok(serde_json::Value::Null),
			},
			Some(_) => Err(FieldError::Invalid(
				"Value must be a number or numeric text".to_string(),
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!("18"), json!(18))]
	#[case(json!("  42  "), json!(42))]
	#[case(json!(-3), json!(-3))]
	fn test_integer_field_parses_numbers(
		#[case] raw: serde_json::Value,
		#[case] expected: serde_json::Value,
	) {
		// Arrange
		let field = IntegerField::new("age");

		// Act
		let cleaned = field.clean(Some(&raw)).unwrap();

		// Assert
		assert_eq!(cleaned, expected);
	}

	#[rstest]
	#[case(json!("abc"))]
	#[case(json!("18.5"))]
	#[case(json!(""))]
	#[case(json!(null))]
	fn test_integer_field_sentinel_for_unparseable(#[case] raw: serde_json::Value) {
		let field = IntegerField::new("age");

		let cleaned = field.clean(Some(&raw)).unwrap();

		assert_eq!(cleaned, serde_json::Value::Null);
		assert!(field.is_empty(&cleaned));
	}

	#[test]
	fn test_integer_field_default_counts_as_empty() {
		let field = IntegerField::new("age");

		assert!(field.is_empty(&json!(0)));
		assert!(!field.is_empty(&json!(18)));
	}

	#[test]
	fn test_integer_field_rejects_impossible_shapes() {
		let field = IntegerField::new("age");

		assert!(field.clean(Some(&json!(["nested"]))).is_err());
	}

	proptest! {
		#[test]
		fn test_integer_field_never_panics_on_text(input in ".*") {
			// Any raw text either parses or resolves to the sentinel
			let field = IntegerField::new("age");
			let cleaned = field.clean(Some(&json!(input))).unwrap();
			prop_assert!(cleaned.is_null() || cleaned.is_i64());
		}
	}
}
