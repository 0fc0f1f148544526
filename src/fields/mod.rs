//! Built-in field kinds.
//!
//! - [`ScalarField`]: one scalar value (strings, integers, floats)
//! - [`NestedField`]: one optional nested [`Validated`](crate::Validated) value
//! - [`NestedListField`]: an ordered list of nested values
//!
//! Every kind keeps an ordered list of [`Check`]s. A check sees the field's
//! name and value and reports at most one [`FieldError`]; the field reports
//! the first failing check in registration order.

mod nested;
mod nested_list;
mod scalar;

pub use nested::NestedField;
pub use nested_list::NestedListField;
pub use scalar::{Float64Field, Int64Field, Numeric, ScalarField, StringField};

use crate::error::FieldError;

/// One registered rule for a field holding a `T`.
pub type Check<'a, T> = Box<dyn Fn(&str, &T) -> Option<FieldError> + 'a>;

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required";
pub(crate) const INVALID_MESSAGE: &str = "The value of this field is invalid";

/// Run checks in order, stopping at the first failure.
pub(crate) fn first_failure<T: ?Sized>(
    checks: &[Check<'_, T>],
    name: &str,
    value: &T,
) -> Option<FieldError> {
    checks.iter().find_map(|check| check(name, value))
}
