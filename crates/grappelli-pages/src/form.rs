//! Form components
//!
//! Two independent components over the `grappelli-forms` engine:
//!
//! - [`FormComponent`] — rule-driven, validates incrementally per field
//!   on blur and re-validates the whole record (including the awaited
//!   remote availability check) on submission.
//! - [`SchemaFormComponent`] — resolver-driven, validates the whole
//!   record in one batch pass on submission only.

pub mod binding;
pub mod component;
pub mod schema_component;

pub(crate) mod rendering;

pub use binding::FieldBinding;
pub use component::{FormComponent, RemoteOutcome, RemoteProbe};
pub use schema_component::SchemaFormComponent;
