//! Grappelli Pages — client-side form components
//!
//! Single-threaded, event-driven form components over the
//! `grappelli-forms` engine:
//!
//! - [`reactive`]: fine-grained Signal/Effect reactivity
//! - [`form`](mod@form): the rule-driven and the schema-driven components
//! - [`registration`]: the two concrete registration forms
//! - [`submit`]: the `Idle -> Validating -> {SubmitSuccess, SubmitError}
//!   -> Idle` submission lifecycle
//! - [`notify`]: the explicit transient-notification queue
//!
//! ## Example
//!
//! ```
//! use grappelli_forms::StaticEmailLookup;
//! use grappelli_pages::registration::registration_form;
//! use std::sync::Arc;
//!
//! let mut form = registration_form(Arc::new(StaticEmailLookup::new()));
//!
//! form.change("username", "django");
//! form.change("email", "django@example.com");
//!
//! // Blur validates the field that lost focus
//! assert_eq!(form.validate_field(&"username".into()), None);
//! ```

pub mod form;
pub mod notify;
pub mod reactive;
pub mod registration;
pub mod submit;

pub use form::{FieldBinding, FormComponent, RemoteOutcome, RemoteProbe, SchemaFormComponent};
pub use notify::{Notification, Notifier, Severity};
pub use reactive::{Effect, Signal};
pub use submit::{SubmitOutcome, SubmitState};
