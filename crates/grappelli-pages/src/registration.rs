//! The registration forms
//!
//! Two independent, non-interacting components over the same engine:
//!
//! - [`manual::registration_form`] — the full registration form with
//!   per-field rules attached inline: required fields, the email
//!   pattern and business rules, the awaited availability check, nested
//!   social handles, the two-position phone number list, and the age
//!   and date-of-birth coercions.
//! - [`schema::profile_form`] — the reduced profile form (username,
//!   email, channel) validated atomically through a declarative schema.

pub mod manual;
pub mod schema;

pub use manual::registration_form;
pub use schema::profile_form;

use serde::{Deserialize, Serialize};

/// Nested social handles of the registration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialHandles {
	pub twitter: String,
	pub facebook: String,
}

/// The finalized registration record passed to the success callback of
/// the manual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
	pub username: String,
	pub email: String,
	pub channel: String,
	pub social: SocialHandles,
	pub phone_numbers: [String; 2],
	pub age: i64,
	pub date_of_birth: chrono::NaiveDate,
}

impl RegistrationRecord {
	/// Deserialize a finalized record tree into the typed form
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_pages::registration::RegistrationRecord;
	/// use serde_json::json;
	///
	/// let record = RegistrationRecord::from_record(&json!({
	/// 	"username": "django",
	/// 	"email": "django@example.com",
	/// 	"channel": "hot club",
	/// 	"social": {"twitter": "@django", "facebook": ""},
	/// 	"phone_numbers": ["555-0100", ""],
	/// 	"age": 26,
	/// 	"date_of_birth": "1990-01-23"
	/// }))
	/// .unwrap();
	/// assert_eq!(record.username, "django");
	/// assert_eq!(record.age, 26);
	/// ```
	pub fn from_record(record: &serde_json::Value) -> Result<Self, serde_json::Error> {
		serde_json::from_value(record.clone())
	}
}

/// The finalized profile record passed to the success callback of the
/// schema form — a strict subset of [`RegistrationRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationProfile {
	pub username: String,
	pub email: String,
	pub channel: String,
}

impl RegistrationProfile {
	/// Deserialize a finalized record tree into the typed form
	pub fn from_record(record: &serde_json::Value) -> Result<Self, serde_json::Error> {
		serde_json::from_value(record.clone())
	}
}
