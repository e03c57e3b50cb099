//! Declarative per-field validation rules
//!
//! A [`RuleSet`] attaches validation to one field path as data. Rules are
//! evaluated in a fixed order, first failure wins for display:
//!
//! 1. `required` — the cleaned value must be non-empty (for numeric and
//!    date fields, a non-default parsed value)
//! 2. `pattern` — the value must match a regular expression
//! 3. `check` — ordered synchronous business-rule closures
//! 4. `remote` — at most one asynchronous availability check, awaited by
//!    the form layer after the synchronous rules pass

use crate::field::{FieldError, FormField};
use regex::Regex;

type CheckFn = Box<dyn Fn(&serde_json::Value) -> bool + Send + Sync>;

/// A synchronous business-rule check: the closure returns `true` when the
/// cleaned value is acceptable.
pub struct CheckRule {
	message: String,
	test: CheckFn,
}

impl CheckRule {
	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn accepts(&self, cleaned: &serde_json::Value) -> bool {
		(self.test)(cleaned)
	}
}

/// A regular-expression constraint on string values.
#[derive(Debug, Clone)]
pub struct PatternRule {
	pattern: Regex,
	message: String,
}

impl PatternRule {
	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn matches(&self, value: &str) -> bool {
		self.pattern.is_match(value)
	}
}

/// The asynchronous availability check attached to a field.
///
/// Carries two configured messages: one for a conflicting record found by
/// the lookup, one for a lookup that failed outright (surfaced, never
/// silently ignored).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRule {
	conflict_message: String,
	failure_message: String,
}

impl RemoteRule {
	pub fn conflict_message(&self) -> &str {
		&self.conflict_message
	}

	pub fn failure_message(&self) -> &str {
		&self.failure_message
	}
}

/// Ordered validation rules for one field path.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{RuleSet, TextField};
/// use serde_json::json;
///
/// let field = TextField::new("username");
/// let rules = RuleSet::new().required("Username is Required");
///
/// let error = rules.evaluate_sync(&field, &json!("")).unwrap_err();
/// assert_eq!(error.to_string(), "Username is Required");
/// assert!(rules.evaluate_sync(&field, &json!("django")).is_ok());
/// ```
#[derive(Default)]
pub struct RuleSet {
	required: Option<String>,
	pattern: Option<PatternRule>,
	checks: Vec<CheckRule>,
	remote: Option<RemoteRule>,
}

impl RuleSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Require a non-empty (non-default for numeric/date fields) value
	pub fn required(mut self, message: impl Into<String>) -> Self {
		self.required = Some(message.into());
		self
	}

	/// Require string values to match `pattern`
	pub fn pattern(mut self, pattern: Regex, message: impl Into<String>) -> Self {
		self.pattern = Some(PatternRule {
			pattern,
			message: message.into(),
		});
		self
	}

	/// Add an ordered synchronous check; the closure returns `true` for
	/// acceptable values
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{IntegerField, RuleSet};
	/// use serde_json::json;
	///
	/// let field = IntegerField::new("age");
	/// let rules = RuleSet::new()
	/// 	.required("Age is Required")
	/// 	.check("Must be above 18 years", |v| v.as_i64().is_none_or(|n| n >= 18));
	///
	/// let error = rules.evaluate_sync(&field, &json!(17)).unwrap_err();
	/// assert_eq!(error.to_string(), "Must be above 18 years");
	/// ```
	pub fn check<F>(mut self, message: impl Into<String>, test: F) -> Self
	where
		F: Fn(&serde_json::Value) -> bool + Send + Sync + 'static,
	{
		self.checks.push(CheckRule {
			message: message.into(),
			test: Box::new(test),
		});
		self
	}

	/// Attach the asynchronous availability check with its conflict and
	/// lookup-failure messages
	pub fn remote(
		mut self,
		conflict_message: impl Into<String>,
		failure_message: impl Into<String>,
	) -> Self {
		self.remote = Some(RemoteRule {
			conflict_message: conflict_message.into(),
			failure_message: failure_message.into(),
		});
		self
	}

	pub fn is_required(&self) -> bool {
		self.required.is_some()
	}

	pub fn remote_rule(&self) -> Option<&RemoteRule> {
		self.remote.as_ref()
	}

	/// Evaluate the synchronous rules (required, pattern, checks) against
	/// a cleaned value, in fixed order, stopping at the first failure.
	///
	/// An empty value on a field without a `required` rule passes: the
	/// pattern and checks only apply to values the user actually entered.
	pub fn evaluate_sync(
		&self,
		field: &dyn FormField,
		cleaned: &serde_json::Value,
	) -> Result<(), FieldError> {
		if field.is_empty(cleaned) {
			if let Some(message) = &self.required {
				return Err(FieldError::Required(message.clone()));
			}
			return Ok(());
		}

		if let Some(pattern) = &self.pattern
			&& let Some(s) = cleaned.as_str()
			&& !pattern.matches(s)
		{
			return Err(FieldError::Format(pattern.message().to_string()));
		}

		for check in &self.checks {
			if !check.accepts(cleaned) {
				return Err(FieldError::Rule(check.message().to_string()));
			}
		}

		Ok(())
	}
}
