//! Submission state machine and outcome types

use grappelli_forms::FieldPath;
use std::collections::BTreeMap;

/// Submission lifecycle of a form component.
///
/// Every submission walks `Idle -> Validating -> {SubmitSuccess,
/// SubmitError} -> Idle`; the terminal states are observable on the
/// component's state signal before it settles back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
	#[default]
	Idle,
	Validating,
	SubmitSuccess,
	SubmitError,
}

/// What a submission attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// The record validated; carries the finalized record passed to the
	/// success callback (the form has been reset)
	Submitted(serde_json::Value),
	/// Validation failed; carries the full path → message map passed to
	/// the failure callback (entered values and errors are retained)
	Rejected(BTreeMap<FieldPath, String>),
}

impl SubmitOutcome {
	pub fn is_submitted(&self) -> bool {
		matches!(self, SubmitOutcome::Submitted(_))
	}
}
