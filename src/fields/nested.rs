use std::fmt;

use super::{first_failure, Check, INVALID_MESSAGE, REQUIRED_MESSAGE};
use crate::error::{FieldError, LeafCode};
use crate::form::{validate, Field, Validated};

/// A field holding one optional nested value with its own form.
///
/// The field's own checks run first and act as guards: if one fails, its
/// error is returned and the nested value is not visited. Otherwise the
/// nested value is validated and any failures come back wrapped in a single
/// `multi` error keyed by the field name.
pub struct NestedField<'a, V: ?Sized> {
    name: String,
    value: Option<&'a V>,
    checks: Vec<Check<'a, Option<&'a V>>>,
}

impl<'a, V: Validated + ?Sized> NestedField<'a, V> {
    /// Create a field with no checks. `None` is skipped unless
    /// [`required`](Self::required) is added.
    pub fn new(name: impl Into<String>, value: Option<&'a V>) -> Self {
        Self {
            name: name.into(),
            value,
            checks: Vec::new(),
        }
    }

    /// Create a field for a value that is always present.
    pub fn of(name: impl Into<String>, value: &'a V) -> Self {
        Self::new(name, Some(value))
    }

    /// The field name used as the error key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an arbitrary check.
    pub fn check(
        mut self,
        check: impl Fn(&str, &Option<&'a V>) -> Option<FieldError> + 'a,
    ) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Fail with `required` when the value is absent.
    pub fn required(self) -> Self {
        self.check(|name, value| {
            value
                .is_none()
                .then(|| FieldError::new(LeafCode::Required, name, REQUIRED_MESSAGE))
        })
    }

    /// Fail with `custom` when `predicate` rejects the value.
    pub fn custom(self, predicate: impl Fn(Option<&V>) -> bool + 'a) -> Self {
        self.check(move |name, value| {
            (!predicate(*value))
                .then(|| FieldError::new(LeafCode::Custom, name, INVALID_MESSAGE))
        })
    }
}

impl<V: Validated + ?Sized> Field for NestedField<'_, V> {
    fn validate(&self) -> Option<FieldError> {
        if let Some(error) = first_failure(&self.checks, &self.name, &self.value) {
            return Some(error);
        }
        self.value
            .and_then(|value| validate(value).wrap(self.name.as_str()))
    }
}

impl<V: ?Sized> fmt::Debug for NestedField<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedField")
            .field("name", &self.name)
            .field("present", &self.value.is_some())
            .field("checks", &self.checks.len())
            .finish()
    }
}
