//! # Grappelli
//!
//! A form-state and client-side validation toolkit for Rust. Grappelli
//! pairs a declarative validation engine with single-threaded reactive
//! form components, in the spirit of the JavaScript form-state libraries
//! but with a typed, trait-based core.
//!
//! ## Crates
//!
//! - `grappelli-forms` (feature `forms`) — field coercion, dot/index
//!   field paths, per-field rule sets, batch schema validation, and the
//!   remote email-availability lookup boundary
//! - `grappelli-pages` (feature `pages`) — Signal/Effect reactivity,
//!   the rule-driven and schema-driven form components, the submission
//!   state machine, and the transient-notification queue
//!
//! ## Quick Example
//!
//! ```
//! use grappelli::forms::StaticEmailLookup;
//! use grappelli::pages::registration::registration_form;
//! use std::sync::Arc;
//!
//! let mut form = registration_form(Arc::new(StaticEmailLookup::new()));
//! form.change("username", "django");
//! assert_eq!(form.validate_field(&"username".into()), None);
//! ```

#[cfg(feature = "forms")]
pub use grappelli_forms as forms;

#[cfg(feature = "pages")]
pub use grappelli_pages as pages;

/// Commonly used types, re-exported in one place.
#[cfg(feature = "pages")]
pub mod prelude {
	pub use crate::forms::{
		EmailLookup, FieldPath, Form, HttpEmailLookup, RecordValidation, RuleSet, Schema,
		SchemaField, StaticEmailLookup,
	};
	pub use crate::pages::{
		FormComponent, Notification, Notifier, SchemaFormComponent, Severity, Signal,
		SubmitOutcome, SubmitState,
	};
	pub use crate::pages::registration::{
		RegistrationProfile, RegistrationRecord, profile_form, registration_form,
	};
}
