//! HTML rendering of form markup
//!
//! String-based rendering: each field becomes a labeled input with its
//! current value, placeholder, disabled state, and inline error text.
//! All user-controlled text is escaped.

use crate::form::binding::FieldBinding;
use grappelli_forms::{escape_attribute, escape_html};

pub(crate) fn render_form(bindings: &[FieldBinding], include_reset: bool) -> String {
	let mut html = String::from("<form novalidate>\n");
	for binding in bindings {
		html.push_str(&render_field(binding));
	}
	html.push_str("\t<button type=\"submit\">Submit</button>\n");
	if include_reset {
		html.push_str("\t<button type=\"reset\">Reset</button>\n");
	}
	html.push_str("</form>\n");
	html
}

fn render_field(binding: &FieldBinding) -> String {
	let name = binding.path().to_string();
	let mut html = String::from("\t<div class=\"form-control\">\n");

	if let Some(label) = binding.label() {
		html.push_str(&format!(
			"\t\t<label for=\"{}\">{}</label>\n",
			escape_attribute(&name),
			escape_html(label)
		));
	}

	let mut input = format!(
		"\t\t<input type=\"{}\" id=\"{}\" name=\"{}\" value=\"{}\"",
		binding.widget().input_type(),
		escape_attribute(&name),
		escape_attribute(&name),
		escape_attribute(&binding.value().get())
	);
	if let Some(placeholder) = binding.placeholder() {
		input.push_str(&format!(
			" placeholder=\"{}\"",
			escape_attribute(placeholder)
		));
	}
	if binding.disabled().get() {
		input.push_str(" disabled");
	}
	input.push_str(" />\n");
	html.push_str(&input);

	if let Some(message) = binding.error().get() {
		html.push_str(&format!(
			"\t\t<p class=\"error\">{}</p>\n",
			escape_html(&message)
		));
	}

	html.push_str("\t</div>\n");
	html
}

#[cfg(test)]
mod tests {
	use super::*;
	use grappelli_forms::{FormField, TextField, Widget};
	use serial_test::serial;

	fn binding_for(field: &dyn FormField, value: &str) -> FieldBinding {
		FieldBinding::new(field, value.to_string(), false)
	}

	#[test]
	#[serial]
	fn test_render_labeled_input_with_value() {
		let field = TextField::new("username")
			.with_label("Username")
			.with_placeholder("Enter registered username");
		let binding = binding_for(&field, "django");

		let html = render_form(std::slice::from_ref(&binding), true);

		assert!(html.contains("<label for=\"username\">Username</label>"));
		assert!(html.contains("type=\"text\""));
		assert!(html.contains("value=\"django\""));
		assert!(html.contains("placeholder=\"Enter registered username\""));
		assert!(html.contains("<button type=\"submit\">Submit</button>"));
		assert!(html.contains("<button type=\"reset\">Reset</button>"));
	}

	#[test]
	#[serial]
	fn test_render_inline_error() {
		let field = TextField::new("username").with_label("Username");
		let binding = binding_for(&field, "");
		binding.error().set(Some("Username is Required".to_string()));

		let html = render_form(std::slice::from_ref(&binding), true);

		assert!(html.contains("<p class=\"error\">Username is Required</p>"));
	}

	#[test]
	#[serial]
	fn test_render_disabled_input() {
		let field = TextField::new("social.twitter").with_label("Twitter");
		let binding = FieldBinding::new(&field, String::new(), true);

		let html = render_form(std::slice::from_ref(&binding), true);

		assert!(html.contains(" disabled"));
	}

	#[test]
	#[serial]
	fn test_render_escapes_user_text() {
		let field = TextField::new("username").with_label("Username");
		let binding = binding_for(&field, "<script>\"x\"</script>");

		let html = render_form(std::slice::from_ref(&binding), false);

		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
		assert!(!html.contains("<button type=\"reset\">"));
	}

	#[test]
	#[serial]
	fn test_render_email_widget_type() {
		let field = TextField::new("email").with_widget(Widget::EmailInput);
		let binding = binding_for(&field, "");

		let html = render_form(std::slice::from_ref(&binding), true);

		assert!(html.contains("type=\"email\""));
	}
}
