//! Text field for single-line string input

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::path::FieldPath;

/// Free-text field. Input is trimmed unless stripping is disabled; the
/// empty string is the default (and therefore "empty") value.
#[derive(Debug, Clone)]
pub struct TextField {
	pub path: FieldPath,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub widget: Widget,
	pub strip: bool,
}

impl TextField {
	/// Create a new TextField at the given path
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{FormField, TextField};
	///
	/// let field = TextField::new("username");
	/// assert_eq!(field.path().to_string(), "username");
	/// assert!(field.strip);
	/// ```
	pub fn new(path: impl Into<FieldPath>) -> Self {
		Self {
			path: path.into(),
			label: None,
			placeholder: None,
			widget: Widget::TextInput,
			strip: true,
		}
	}

	/// Set the label for the field
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::TextField;
	///
	/// let field = TextField::new("username").with_label("Username");
	/// assert_eq!(field.label, Some("Username".to_string()));
	/// ```
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the input placeholder for the field
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::TextField;
	///
	/// let field = TextField::new("username").with_placeholder("Enter registered username");
	/// assert_eq!(field.placeholder, Some("Enter registered username".to_string()));
	/// ```
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Set the widget for the field
	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	/// Disable whitespace stripping for the field
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::TextField;
	///
	/// let field = TextField::new("bio").no_strip();
	/// assert!(!field.strip);
	/// ```
	pub fn no_strip(mut self) -> Self {
		self.strip = false;
		self
	}
}

impl FormField for TextField {
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
				let s = if self.strip { s.trim() } else { s.as_str() };
				Ok(serde_json::Value::String(s.to_string()))
			}
			Some(_) => Err(FieldError::Invalid("Value must be a string".to_string())),
		}
	}
}
