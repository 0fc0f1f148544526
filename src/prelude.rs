//! Convenient re-exports for common scrub usage.
//!
//! ```
//! use scrub::prelude::*;
//! ```

// ============================================================================
// Engine
// ============================================================================

/// Types that describe their validation rules.
pub use crate::form::Validated;

/// One named unit of validation. Implement it for custom field kinds.
pub use crate::form::Field;

/// Ordered list of fields for one pass.
pub use crate::form::Form;

/// Run a value's form and collect every failure.
pub use crate::form::validate;

/// Same as `validate`, as a stillwater `Validation`.
pub use crate::form::validation;

/// Build a `Form` from a list of fields.
pub use crate::form;

// ============================================================================
// Field kinds
// ============================================================================

pub use crate::fields::{
    Float64Field, Int64Field, NestedField, NestedListField, ScalarField, StringField,
};

// ============================================================================
// Errors and reporting
// ============================================================================

pub use crate::error::{FieldError, FieldErrorCode, FieldErrors, FormValidation, LeafCode};

/// Pretty print options and edge helpers.
pub use crate::pretty::{ColorOption, ReportOptions, ValidationExt};

/// Result type with error accumulation.
pub use stillwater::Validation;

/// `FieldErrors` implements this to concatenate forests.
pub use stillwater::Semigroup;
