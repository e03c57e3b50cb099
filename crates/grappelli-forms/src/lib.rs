//! Form state and validation for Grappelli
//!
//! This crate provides the form-processing engine behind the Grappelli
//! registration components:
//! - Typed field coercion with sentinel handling for unparseable input
//! - Declarative per-field rule sets (required, pattern, ordered business
//!   rules, one asynchronous availability check) evaluated in fixed order
//! - Dot/index field paths over a nested record tree
//! - Batch schema validation through a resolver adapter
//! - The remote email-availability lookup boundary

pub mod field;
pub mod fields;
pub mod form;
pub mod lookup;
pub mod path;
pub mod rules;
pub mod schema;

pub use field::{
	ErrorKind, FieldError, FieldResult, FormField, Widget, escape_attribute, escape_html,
};
pub use fields::{DateField, EmailField, IntegerField, TextField};
pub use form::{Form, FormError, FormResult, RecordValidation};
pub use lookup::{AccountRecord, EmailLookup, HttpEmailLookup, LookupError, StaticEmailLookup};
pub use path::{FieldPath, Segment};
pub use rules::{CheckRule, PatternRule, RemoteRule, RuleSet};
pub use schema::{Resolver, Schema, SchemaField};
