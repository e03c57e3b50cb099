//! The manual-rules registration form

use crate::form::FormComponent;
use grappelli_forms::{
	DateField, EmailField, EmailLookup, Form, IntegerField, RuleSet, TextField,
};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

// Accepts the printable address characters ahead of a dotted domain.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
		.expect("EMAIL_PATTERN: invalid regex pattern")
});

/// Build the registration form with its full inline rule set.
///
/// Validation triggers on blur per field; the availability `lookup` is
/// consulted for the email field after its synchronous rules pass, and
/// again — awaited — on every submission attempt. The twitter handle is
/// enabled only while a channel name is present; while disabled it is
/// excluded from validation and from the finalized record.
///
/// # Examples
///
/// ```
/// use grappelli_forms::StaticEmailLookup;
/// use grappelli_pages::registration::registration_form;
/// use std::sync::Arc;
///
/// let mut form = registration_form(Arc::new(StaticEmailLookup::new()));
/// form.change("username", "django");
/// assert_eq!(form.validate_field(&"username".into()), None);
/// ```
pub fn registration_form(lookup: Arc<dyn EmailLookup>) -> FormComponent {
	let mut form = Form::new();

	form.add_field(
		Box::new(
			TextField::new("username")
				.with_label("Username")
				.with_placeholder("Enter registered username"),
		),
		RuleSet::new().required("Username is Required"),
	);

	form.add_field(
		Box::new(
			EmailField::new("email")
				.with_label("Email")
				.with_placeholder("Enter registered email ID"),
		),
		RuleSet::new()
			.required("Email address is Required")
			.pattern(EMAIL_PATTERN.clone(), "Invalid email format")
			.check("Enter a different email address", |value| {
				value.as_str() != Some("admin@example.com")
			})
			.check("This domain is not supported", |value| {
				value.as_str().is_none_or(|s| !s.ends_with("baddomain.com"))
			})
			.remote("Email already exists", "Unable to verify email address"),
	);

	form.add_field(
		Box::new(
			TextField::new("channel")
				.with_label("Channel")
				.with_placeholder("Enter channel name"),
		),
		RuleSet::new().required("Channel is Required"),
	);

	form.add_field(
		Box::new(
			TextField::new("social.twitter")
				.with_label("Twitter")
				.with_placeholder("Enter twitter username"),
		),
		RuleSet::new(),
	);

	form.add_field(
		Box::new(
			TextField::new("social.facebook")
				.with_label("Facebook")
				.with_placeholder("Enter facebook username"),
		),
		RuleSet::new(),
	);

	form.add_field(
		Box::new(
			TextField::new("phone_numbers.0")
				.with_label("Primary Phone Number")
				.with_placeholder("Enter primary phone number"),
		),
		RuleSet::new().required("Primary phone number is required"),
	);

	form.add_field(
		Box::new(
			TextField::new("phone_numbers.1")
				.with_label("Secondary Phone Number")
				.with_placeholder("Enter secondary phone number"),
		),
		RuleSet::new(),
	);

	form.add_field(
		Box::new(IntegerField::new("age").with_label("Age")),
		RuleSet::new()
			.required("Age is Required")
			.check("Must be above 18 years", |value| {
				value.as_i64().is_none_or(|age| age >= 18)
			})
			.check("Must be below 100 years", |value| {
				value.as_i64().is_none_or(|age| age < 100)
			}),
	);

	form.add_field(
		Box::new(
			DateField::new("date_of_birth")
				.with_label("Date of Birth")
				.with_default(chrono::Local::now().date_naive()),
		),
		RuleSet::new().required("Date of Birth is Required"),
	);

	form.enable_when("social.twitter", "channel", |value| {
		value.as_str().is_some_and(|channel| !channel.is_empty())
	});

	FormComponent::new(form, lookup)
		.with_success_notice("Submitted Successfully")
		.with_failure_notice("Check for errors", Duration::from_secs(1))
}
