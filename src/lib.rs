//! Scrub: form-style validation for nested values.
//!
//! A type describes what to check by building a [`Form`], an ordered list of
//! named fields each carrying its own rules. [`validate`] runs the form and
//! returns every failure as one [`FieldErrors`] tree that mirrors the shape of
//! the value: nested values and list elements show up as `multi` nodes
//! wrapping their own failures.
//!
//! # Core Concepts
//!
//! - **Aggregation across fields**: every field of a form is checked, and all
//!   failures are reported in field order
//! - **Short-circuit within a field**: a field reports only its first failing
//!   rule, in the order rules were added
//! - **Recursion**: [`NestedField`] and [`NestedListField`] validate
//!   sub-values with the same engine
//! - **Plain data out**: the error tree can be described, pretty printed or
//!   serialized to JSON
//!
//! # Quick Start
//!
//! ```
//! use scrub::prelude::*;
//!
//! struct Employee {
//!     name: String,
//!     salary: f64,
//! }
//!
//! impl Validated for Employee {
//!     fn form(&self) -> Form<'_> {
//!         form![
//!             StringField::new("name", &self.name).required(),
//!             Float64Field::new("salary", self.salary).min(38000.0),
//!         ]
//!     }
//! }
//!
//! struct Company {
//!     name: String,
//!     established: i64,
//!     employees: Vec<Employee>,
//! }
//!
//! impl Validated for Company {
//!     fn form(&self) -> Form<'_> {
//!         form![
//!             StringField::new("name", &self.name).required(),
//!             Int64Field::new("established", self.established).between(1900, 2015),
//!             NestedListField::new("employees", &self.employees),
//!         ]
//!     }
//! }
//!
//! let company = Company {
//!     name: "Pear".into(),
//!     established: 2016,
//!     employees: vec![Employee { name: String::new(), salary: 50000.0 }],
//! };
//!
//! let errors = validate(&company);
//! assert_eq!(
//!     errors.describe(),
//!     "* [max] established - The value of this field must be between 1900 and 2015\n\
//!      * [multi] employees\n\
//!      *   [multi] employees.0\n\
//!      *     [required] name - This field is required"
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`prelude`]: Convenient re-exports for common usage
//! - [`form`](mod@form): [`Validated`], [`Field`], [`Form`] and the engine entry points
//! - [`fields`]: The built-in field kinds
//! - [`error`]: [`FieldError`], [`FieldErrors`] and their renderings
//! - [`pretty`]: Colorized terminal output
//!
//! # Stillwater Integration
//!
//! | Type | Usage |
//! |------|-------|
//! | `Validation<T, E>` | [`validation`] returns `Validation<(), FieldErrors>` |
//! | `Semigroup` | Combining forests from separate passes |

pub mod error;
pub mod fields;
pub mod form;
pub mod prelude;
pub mod pretty;

pub use error::{
    ErrorShapeError, FieldError, FieldErrorCode, FieldErrors, FormValidation, FormValidationExt,
    LeafCode, ParseCodeError,
};
pub use fields::{
    Check, Float64Field, Int64Field, NestedField, NestedListField, Numeric, ScalarField,
    StringField,
};
pub use form::{validate, validation, Field, Form, Validated};
pub use pretty::{ColorOption, ReportOptions, ValidationExt};

// Re-export stillwater types that are commonly used
pub use stillwater::{Semigroup, Validation};
