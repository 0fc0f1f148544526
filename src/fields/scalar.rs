//! Scalar fields: one value, an ordered list of checks.

use std::fmt;

use regex::Regex;

use super::{first_failure, Check, INVALID_MESSAGE, REQUIRED_MESSAGE};
use crate::error::{FieldError, LeafCode};
use crate::form::Field;

/// A field holding one scalar value.
///
/// Builder methods append checks; [`Field::validate`] reports the first one
/// that fails, in the order they were added. Only one failure is ever
/// reported per scalar field.
///
/// ```
/// use scrub::{Field, FieldErrorCode, StringField};
///
/// let field = StringField::new("title", "").required().min_length(3);
/// let error = field.validate().unwrap();
/// assert_eq!(error.code(), FieldErrorCode::Required);
/// ```
pub struct ScalarField<'a, T> {
    name: String,
    value: T,
    checks: Vec<Check<'a, T>>,
}

/// A string field borrowing its value.
pub type StringField<'a> = ScalarField<'a, &'a str>;

/// A 64-bit integer field.
pub type Int64Field<'a> = ScalarField<'a, i64>;

/// A 64-bit float field.
pub type Float64Field<'a> = ScalarField<'a, f64>;

impl<'a, T> ScalarField<'a, T> {
    /// Create a field with no checks.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
            checks: Vec::new(),
        }
    }

    /// The field name used as the error key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value under validation.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of registered checks.
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Register an arbitrary check.
    pub fn check(mut self, check: impl Fn(&str, &T) -> Option<FieldError> + 'a) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Fail with `custom` when `predicate` rejects the value.
    pub fn custom(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.check(move |name, value| {
            (!predicate(value))
                .then(|| FieldError::new(LeafCode::Custom, name, INVALID_MESSAGE))
        })
    }
}

impl<'a> ScalarField<'a, &'a str> {
    /// Fail with `required` when the value is blank after trimming.
    pub fn required(self) -> Self {
        self.check(|name, value| {
            value
                .trim()
                .is_empty()
                .then(|| FieldError::new(LeafCode::Required, name, REQUIRED_MESSAGE))
        })
    }

    /// Fail with `minlength` when the value has fewer than `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        let msg = format!("The value must be at least {} characters long", min);
        self.check(move |name, value| {
            (value.chars().count() < min)
                .then(|| FieldError::new(LeafCode::MinLength, name, msg.as_str()))
        })
    }

    /// Fail with `maxlength` when the value has more than `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        let msg = format!("The value must be at most {} characters long", max);
        self.check(move |name, value| {
            (value.chars().count() > max)
                .then(|| FieldError::new(LeafCode::MaxLength, name, msg.as_str()))
        })
    }

    /// Fail with `invalid` when the value does not match `pattern`.
    ///
    /// `Regex` clones share their compiled program, so passing a clone of a
    /// static pattern is cheap.
    pub fn matches(self, pattern: Regex) -> Self {
        self.check(move |name, value| {
            (!pattern.is_match(value))
                .then(|| FieldError::new(LeafCode::Invalid, name, INVALID_MESSAGE))
        })
    }
}

/// Numbers that support bound checks.
pub trait Numeric: PartialOrd + Copy + fmt::Display {}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(impl Numeric for $t {})*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<'a, T: Numeric + 'a> ScalarField<'a, T> {
    /// Fail with `min` when the value is below `min`.
    pub fn min(self, min: T) -> Self {
        let msg = format!("The value of this field must be at least {}", min);
        self.check(move |name, value| {
            (*value < min).then(|| FieldError::new(LeafCode::Min, name, msg.as_str()))
        })
    }

    /// Fail with `max` when the value is above `max`.
    pub fn max(self, max: T) -> Self {
        let msg = format!("The value of this field must be at most {}", max);
        self.check(move |name, value| {
            (*value > max).then(|| FieldError::new(LeafCode::Max, name, msg.as_str()))
        })
    }

    /// Fail when the value is outside `[low, high]`: `min` if below `low`,
    /// otherwise `max` if above `high`.
    pub fn between(self, low: T, high: T) -> Self {
        let msg = format!(
            "The value of this field must be between {} and {}",
            low, high
        );
        self.check(move |name, value| {
            if *value < low {
                Some(FieldError::new(LeafCode::Min, name, msg.as_str()))
            } else if *value > high {
                Some(FieldError::new(LeafCode::Max, name, msg.as_str()))
            } else {
                None
            }
        })
    }
}

impl<T> Field for ScalarField<'_, T> {
    fn validate(&self) -> Option<FieldError> {
        first_failure(&self.checks, &self.name, &self.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ScalarField<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarField")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("checks", &self.checks.len())
            .finish()
    }
}
