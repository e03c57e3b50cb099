//! The schema-driven profile form

use crate::form::SchemaFormComponent;
use grappelli_forms::{EmailField, FormField, Schema, SchemaField, TextField};
use std::time::Duration;

/// Build the profile form: username, email, and channel, validated
/// atomically against a declarative schema on submission.
///
/// There is no per-field trigger and no network: one batch pass reports
/// every violated field simultaneously.
///
/// # Examples
///
/// ```
/// use grappelli_pages::registration::profile_form;
///
/// let mut form = profile_form();
/// let outcome = form.submit();
///
/// // All three fields are empty: three simultaneous messages
/// assert!(!outcome.is_submitted());
/// ```
pub fn profile_form() -> SchemaFormComponent {
	let fields: Vec<Box<dyn FormField>> = vec![
		Box::new(
			TextField::new("username")
				.with_label("Username")
				.with_placeholder("Enter your username"),
		),
		Box::new(
			EmailField::new("email")
				.with_label("Email")
				.with_placeholder("Enter your email"),
		),
		Box::new(
			TextField::new("channel")
				.with_label("Channel")
				.with_placeholder("Enter your channel"),
		),
	];

	let schema = Schema::new()
		.field(SchemaField::new("username").required("Username is required"))
		.field(
			SchemaField::new("email")
				.email("Format not valid")
				.required("Email is required"),
		)
		.field(SchemaField::new("channel").required("Channel is required"));

	SchemaFormComponent::new(fields, Box::new(schema))
		.with_success_notice("Submitted Successfully")
		.with_failure_notice("Check for errors", Duration::from_secs(1))
}
