//! Field trait, error taxonomy, and rendering metadata

use crate::path::FieldPath;
use serde::{Deserialize, Serialize};

/// Field-scoped validation error.
///
/// Every variant carries the user-facing message configured on the rule
/// that failed; `Display` renders exactly that message. All variants are
/// recoverable — validation never aborts the surrounding flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// A required field was empty or still held its default value
	#[error("{0}")]
	Required(String),
	/// The value did not match the configured pattern
	#[error("{0}")]
	Format(String),
	/// A synchronous business-rule check rejected the value
	#[error("{0}")]
	Rule(String),
	/// The remote lookup found a conflicting record
	#[error("{0}")]
	Duplicate(String),
	/// The remote lookup itself failed; surfaced, never swallowed
	#[error("{0}")]
	RemoteCheck(String),
	/// A batch schema constraint was violated
	#[error("{0}")]
	Schema(String),
	/// The raw value had an unexpected JSON shape for this field
	#[error("{0}")]
	Invalid(String),
}

impl FieldError {
	/// The configured message, without the error kind.
	pub fn message(&self) -> &str {
		match self {
			FieldError::Required(message)
			| FieldError::Format(message)
			| FieldError::Rule(message)
			| FieldError::Duplicate(message)
			| FieldError::RemoteCheck(message)
			| FieldError::Schema(message)
			| FieldError::Invalid(message) => message,
		}
	}

	/// The error kind, independent of the message.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::field::{ErrorKind, FieldError};
	///
	/// let error = FieldError::Required("Username is Required".to_string());
	/// assert_eq!(error.kind(), ErrorKind::Required);
	/// assert_eq!(error.to_string(), "Username is Required");
	/// ```
	pub fn kind(&self) -> ErrorKind {
		match self {
			FieldError::Required(_) => ErrorKind::Required,
			FieldError::Format(_) => ErrorKind::Format,
			FieldError::Rule(_) => ErrorKind::Rule,
			FieldError::Duplicate(_) => ErrorKind::Duplicate,
			FieldError::RemoteCheck(_) => ErrorKind::RemoteCheck,
			FieldError::Schema(_) => ErrorKind::Schema,
			FieldError::Invalid(_) => ErrorKind::Invalid,
		}
	}
}

/// Discriminant of [`FieldError`], used when tests and callers care about
/// the failure class rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Required,
	Format,
	Rule,
	Duplicate,
	RemoteCheck,
	Schema,
	Invalid,
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Widget type used to render a field's input element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
	TextInput,
	EmailInput,
	NumberInput,
	DateInput,
	HiddenInput,
}

impl Widget {
	/// The HTML `type` attribute for this widget.
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::TextInput => "text",
			Widget::EmailInput => "email",
			Widget::NumberInput => "number",
			Widget::DateInput => "date",
			Widget::HiddenInput => "hidden",
		}
	}
}

/// A form field: the typed coercion step plus rendering metadata.
///
/// `clean` turns the raw value stored in the record tree into the field's
/// canonical representation. Coercion of unparseable numeric/date text
/// must not fail — it resolves to the `Null` sentinel, which the
/// `required` rule then rejects. `clean` only errors when the raw value
/// has an impossible JSON shape for the field (e.g. an object where a
/// string is expected).
pub trait FormField: Send + Sync {
	/// Path of this field within the record tree
	fn path(&self) -> &FieldPath;

	/// Human-readable label, if configured
	fn label(&self) -> Option<&str>;

	/// Input placeholder, if configured
	fn placeholder(&self) -> Option<&str>;

	/// Widget used to render this field
	fn widget(&self) -> &Widget;

	/// Default value written into the record when the form is built
	fn default_value(&self) -> serde_json::Value;

	/// Coerce the raw record value into the field's canonical form
	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;

	/// Whether a cleaned value counts as empty for the `required` rule.
	///
	/// The default treats the `Null` sentinel and the field's default
	/// value as empty, which is what makes "must be a non-default parsed
	/// value" hold for numeric and date fields.
	fn is_empty(&self, cleaned: &serde_json::Value) -> bool {
		cleaned.is_null() || *cleaned == self.default_value()
	}
}

/// Escape text for use inside an HTML element body.
///
/// # Examples
///
/// ```
/// use grappelli_forms::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			other => escaped.push(other),
		}
	}
	escaped
}

/// Escape text for use inside an HTML attribute value.
///
/// # Examples
///
/// ```
/// use grappelli_forms::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"say "hi""#), "say &quot;hi&quot;");
/// ```
pub fn escape_attribute(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			other => escaped.push(other),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldError::Required("Username is Required".into()), ErrorKind::Required)]
	#[case(FieldError::Format("Invalid email format".into()), ErrorKind::Format)]
	#[case(FieldError::Rule("Must be above 18 years".into()), ErrorKind::Rule)]
	#[case(FieldError::Duplicate("Email already exists".into()), ErrorKind::Duplicate)]
	#[case(
		FieldError::RemoteCheck("Unable to verify email address".into()),
		ErrorKind::RemoteCheck
	)]
	fn test_error_kind_matches_variant(#[case] error: FieldError, #[case] kind: ErrorKind) {
		assert_eq!(error.kind(), kind);
	}

	#[test]
	fn test_display_is_the_configured_message() {
		let error = FieldError::Duplicate("Email already exists".to_string());

		assert_eq!(error.to_string(), "Email already exists");
		assert_eq!(error.message(), "Email already exists");
	}

	#[rstest]
	#[case(Widget::TextInput, "text")]
	#[case(Widget::EmailInput, "email")]
	#[case(Widget::NumberInput, "number")]
	#[case(Widget::DateInput, "date")]
	#[case(Widget::HiddenInput, "hidden")]
	fn test_widget_input_type(#[case] widget: Widget, #[case] expected: &str) {
		assert_eq!(widget.input_type(), expected);
	}

	#[test]
	fn test_escape_html_leaves_plain_text_alone() {
		assert_eq!(escape_html("plain text"), "plain text");
	}

	#[test]
	fn test_escape_attribute_covers_quotes() {
		assert_eq!(
			escape_attribute(r#"<a href="x">'y'</a>"#),
			"&lt;a href=&quot;x&quot;&gt;&#x27;y&#x27;&lt;/a&gt;"
		);
	}
}
