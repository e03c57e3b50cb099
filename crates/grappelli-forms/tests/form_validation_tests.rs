//! Full-record validation tests
//!
//! Exercises the engine against a registration-shaped form: rule
//! ordering, sentinel coercion, cross-field enablement, and the remote
//! availability check.

use async_trait::async_trait;
use grappelli_forms::lookup::{AccountRecord, EmailLookup, LookupError};
use grappelli_forms::{
	DateField, EmailField, FieldPath, Form, IntegerField, RecordValidation, RuleSet,
	StaticEmailLookup, TextField,
};
use regex::Regex;
use rstest::rstest;
use serde_json::json;

fn email_pattern() -> Regex {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
}

/// A lookup whose backing service is unreachable.
struct UnreachableLookup;

#[async_trait]
impl EmailLookup for UnreachableLookup {
	async fn find_by_email(&self, _email: &str) -> Result<Vec<AccountRecord>, LookupError> {
		Err(LookupError::Status(503))
	}
}

fn registration_form() -> Form {
	let mut form = Form::new();
	form.add_field(
		Box::new(TextField::new("username")),
		RuleSet::new().required("Username is Required"),
	);
	form.add_field(
		Box::new(EmailField::new("email")),
		RuleSet::new()
			.required("Email address is Required")
			.pattern(email_pattern(), "Invalid email format")
			.check("Enter a different email address", |v| {
				v.as_str() != Some("admin@example.com")
			})
			.check("This domain is not supported", |v| {
				v.as_str().is_none_or(|s| !s.ends_with("baddomain.com"))
			})
			.remote("Email already exists", "Unable to verify email address"),
	);
	form.add_field(
		Box::new(TextField::new("channel")),
		RuleSet::new().required("Channel is Required"),
	);
	form.add_field(Box::new(TextField::new("social.twitter")), RuleSet::new());
	form.add_field(Box::new(TextField::new("social.facebook")), RuleSet::new());
	form.add_field(
		Box::new(TextField::new("phone_numbers.0")),
		RuleSet::new().required("Primary phone number is required"),
	);
	form.add_field(Box::new(TextField::new("phone_numbers.1")), RuleSet::new());
	form.add_field(
		Box::new(IntegerField::new("age")),
		RuleSet::new()
			.required("Age is Required")
			.check("Must be above 18 years", |v| {
				v.as_i64().is_none_or(|n| n >= 18)
			})
			.check("Must be below 100 years", |v| {
				v.as_i64().is_none_or(|n| n < 100)
			}),
	);
	form.add_field(
		Box::new(DateField::new("date_of_birth")),
		RuleSet::new().required("Date of Birth is Required"),
	);
	form.enable_when("social.twitter", "channel", |v| {
		v.as_str().is_some_and(|s| !s.is_empty())
	});
	form
}

fn fill_valid(form: &mut Form) {
	let values = [
		("username", "django"),
		("email", "django@example.com"),
		("channel", "hot club"),
		("social.twitter", "@django"),
		("social.facebook", "django.r"),
		("phone_numbers.0", "555-0100"),
		("phone_numbers.1", ""),
		("age", "26"),
		("date_of_birth", "1990-01-23"),
	];
	for (path, value) in values {
		form.set_value(&path.into(), json!(value)).expect(path);
	}
}

#[rstest]
#[case("username", "Username is Required")]
#[case("email", "Email address is Required")]
#[case("channel", "Channel is Required")]
#[case("phone_numbers.0", "Primary phone number is required")]
#[case("age", "Age is Required")]
#[case("date_of_birth", "Date of Birth is Required")]
#[tokio::test]
async fn test_each_required_field_blocks_with_its_message(
	#[case] path: &str,
	#[case] message: &str,
) {
	// Arrange: a fully valid record with one field reverted to default
	let mut form = registration_form();
	fill_valid(&mut form);
	let path = FieldPath::from(path);
	let default = path.get(form.defaults()).cloned().unwrap_or(json!(null));
	form.set_value(&path, default).unwrap();

	// Act
	let validation = form.validate_record(&StaticEmailLookup::new()).await;

	// Assert: exactly the configured message, exactly one failing field
	let RecordValidation::Invalid(errors) = validation else {
		panic!("expected invalid record");
	};
	assert_eq!(errors.len(), 1);
	assert_eq!(errors[&path], message);
}

#[rstest]
#[case("admin@example.com", "Enter a different email address")]
#[case("someone@baddomain.com", "This domain is not supported")]
#[case("nested@sub.baddomain.com", "This domain is not supported")]
#[case("not-an-email", "Invalid email format")]
#[tokio::test]
async fn test_email_business_rules(#[case] email: &str, #[case] message: &str) {
	let mut form = registration_form();
	fill_valid(&mut form);
	form.set_value(&"email".into(), json!(email)).unwrap();

	let validation = form.validate_record(&StaticEmailLookup::new()).await;

	let RecordValidation::Invalid(errors) = validation else {
		panic!("expected invalid record");
	};
	assert_eq!(errors[&FieldPath::from("email")], message);
}

#[rstest]
#[case("17", Some("Must be above 18 years"))]
#[case("100", Some("Must be below 100 years"))]
#[case("117", Some("Must be below 100 years"))]
#[case("18", None)]
#[case("99", None)]
#[tokio::test]
async fn test_age_bounds(#[case] age: &str, #[case] expected: Option<&str>) {
	let mut form = registration_form();
	fill_valid(&mut form);
	form.set_value(&"age".into(), json!(age)).unwrap();

	let validation = form.validate_record(&StaticEmailLookup::new()).await;

	match expected {
		Some(message) => {
			let RecordValidation::Invalid(errors) = validation else {
				panic!("expected invalid record");
			};
			assert_eq!(errors[&FieldPath::from("age")], message);
		}
		None => assert!(validation.is_valid()),
	}
}

#[rstest]
#[case("age", "not a number", "Age is Required")]
#[case("date_of_birth", "02/30/2025", "Date of Birth is Required")]
#[tokio::test]
async fn test_unparseable_input_trips_required_without_crashing(
	#[case] path: &str,
	#[case] raw: &str,
	#[case] message: &str,
) {
	let mut form = registration_form();
	fill_valid(&mut form);
	let path = FieldPath::from(path);
	form.set_value(&path, json!(raw)).unwrap();

	let validation = form.validate_record(&StaticEmailLookup::new()).await;

	let RecordValidation::Invalid(errors) = validation else {
		panic!("expected invalid record");
	};
	assert_eq!(errors[&path], message);
}

#[tokio::test]
async fn test_taken_email_fails_with_duplicate_message() {
	let mut form = registration_form();
	fill_valid(&mut form);
	let lookup = StaticEmailLookup::with_taken(["django@example.com"]);

	let validation = form.validate_record(&lookup).await;

	let RecordValidation::Invalid(errors) = validation else {
		panic!("expected invalid record");
	};
	assert_eq!(errors[&FieldPath::from("email")], "Email already exists");
}

#[tokio::test]
async fn test_available_email_passes_remote_check() {
	let mut form = registration_form();
	fill_valid(&mut form);
	let lookup = StaticEmailLookup::with_taken(["other@example.com"]);

	let validation = form.validate_record(&lookup).await;

	assert!(validation.is_valid());
}

#[tokio::test]
async fn test_lookup_failure_surfaces_remote_check_message() {
	let mut form = registration_form();
	fill_valid(&mut form);

	let validation = form.validate_record(&UnreachableLookup).await;

	let RecordValidation::Invalid(errors) = validation else {
		panic!("expected invalid record");
	};
	assert_eq!(
		errors[&FieldPath::from("email")],
		"Unable to verify email address"
	);
}

#[tokio::test]
async fn test_remote_check_not_reached_when_sync_rules_fail() {
	// A lookup failure would surface its message; with a sync failure in
	// front, the lookup must never run.
	let mut form = registration_form();
	fill_valid(&mut form);
	form.set_value(&"email".into(), json!("admin@example.com")).unwrap();

	let validation = form.validate_record(&UnreachableLookup).await;

	let RecordValidation::Invalid(errors) = validation else {
		panic!("expected invalid record");
	};
	assert_eq!(
		errors[&FieldPath::from("email")],
		"Enter a different email address"
	);
}

#[tokio::test]
async fn test_twitter_entered_while_channel_empty_is_not_submitted() {
	let mut form = registration_form();
	fill_valid(&mut form);
	form.set_value(&"channel".into(), json!("")).unwrap();
	form.set_value(&"social.twitter".into(), json!("@ignored")).unwrap();

	let validation = form.validate_record(&StaticEmailLookup::new()).await;

	// Channel is required, so the record is invalid — but twitter must
	// not contribute an error of its own.
	let RecordValidation::Invalid(errors) = validation else {
		panic!("expected invalid record");
	};
	assert_eq!(errors.len(), 1);
	assert!(errors.contains_key(&FieldPath::from("channel")));
}

#[tokio::test]
async fn test_finalized_record_shape() {
	let mut form = registration_form();
	fill_valid(&mut form);

	let validation = form.validate_record(&StaticEmailLookup::new()).await;

	let RecordValidation::Valid(record) = validation else {
		panic!("expected valid record");
	};
	assert_eq!(
		record,
		json!({
			"username": "django",
			"email": "django@example.com",
			"channel": "hot club",
			"social": {"twitter": "@django", "facebook": "django.r"},
			"phone_numbers": ["555-0100", ""],
			"age": 26,
			"date_of_birth": "1990-01-23"
		})
	);
}

#[tokio::test]
async fn test_reset_restores_defaults_and_clears_errors() {
	let mut form = registration_form();
	let _ = form.validate_record(&StaticEmailLookup::new()).await;
	assert!(form.has_errors());

	form.reset();

	assert_eq!(form.raw_record(), form.defaults());
	assert!(!form.has_errors());
	assert_eq!(
		FieldPath::from("phone_numbers").get(form.raw_record()),
		Some(&json!(["", ""]))
	);
}
