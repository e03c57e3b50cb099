//! Date field parsed from raw text input

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::path::FieldPath;
use chrono::{Datelike, NaiveDate};

/// Calendar-date field coerced from raw text at validation time.
///
/// The canonical representation is an ISO-8601 string (`%Y-%m-%d`).
/// Unparseable input resolves to the `Null` sentinel rather than an
/// error, so it trips the `required` rule with that rule's configured
/// message. The configured default date also counts as empty — a form
/// left on its initial date does not satisfy `required`.
pub struct DateField {
	pub path: FieldPath,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	widget: Widget,
	default: Option<NaiveDate>,
	input_formats: Vec<String>,
}

impl DateField {
	/// Create a new DateField at the given path
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{DateField, FormField};
	/// use serde_json::json;
	///
	/// let field = DateField::new("date_of_birth");
	/// let cleaned = field.clean(Some(&json!("2001-07-15"))).unwrap();
	/// assert_eq!(cleaned, json!("2001-07-15"));
	/// ```
	pub fn new(path: impl Into<FieldPath>) -> Self {
		Self {
			path: path.into(),
			label: None,
			placeholder: None,
			widget: Widget::DateInput,
			default: None,
			input_formats: vec![
				"%Y-%m-%d".to_string(), // 2025-01-15
				"%m/%d/%Y".to_string(), // 01/15/2025
			],
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

	/// Set the default date written into the record when the form is built
	pub fn with_default(mut self, default: NaiveDate) -> Self {
		self.default = Some(default);
		self
	}

	fn parse_date(&self, s: &str) -> Option<NaiveDate> {
		for format in &self.input_formats {
			if let Ok(date) = NaiveDate::parse_from_str(s, format) {
				// Reject years outside the 4-digit range to prevent
				// ambiguous 2-digit year interpretations.
				if !(1000..=9999).contains(&date.year()) {
					continue;
				}
				return Some(date);
			}
		}
		None
	}
}

impl FormField for DateField {
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
		match self.default {
			Some(date) => serde_json::json!(date.format("%Y-%m-%d").to_string()),
			None => serde_json::Value::Null,
		}
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		match value {
			None | Some(serde_json::Value::Null) => Ok(serde_json::Value::Null),
			Some(serde_json::Value::String(s)) => {
				let s = s.trim();
				if s.is_empty() {
					return Ok(serde_json::Value::Null);
				}
				match self.parse_date(s) {
					Some(date) => Ok(serde_json::json!(date.format("%Y-%m-%d").to_string())),
					// Sentinel: unparseable text trips `required` downstream
					None => Ok(serde_json::Value::Null),
				}
			}
			Some(_) => Err(FieldError::Invalid(
				"Value must be a date string".to_string(),
			)),
		}
	}
}
