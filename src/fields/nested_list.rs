use std::fmt;

use super::{first_failure, Check};
use crate::error::{FieldError, FieldErrors, LeafCode};
use crate::form::{validate, Field, Validated};

/// A field holding an ordered list of nested values.
///
/// Validation visits every element first. Each failing element contributes
/// one `multi` error keyed `<name>.<index>`, and together they are wrapped in
/// a `multi` error keyed by the field name. The list's own checks
/// (`min_length`, `max_length`, `custom`) run only when every element passed,
/// so a list never reports element failures and a length violation in the
/// same pass.
///
/// ```
/// use scrub::{form, Field, Form, NestedListField, StringField, Validated};
///
/// struct Tag(&'static str);
///
/// impl Validated for Tag {
///     fn form(&self) -> Form<'_> {
///         form![StringField::new("tag", self.0).required()]
///     }
/// }
///
/// let tags = vec![Tag("a"), Tag(""), Tag("c")];
/// let error = NestedListField::new("tags", &tags).max_length(2).validate().unwrap();
/// assert_eq!(
///     error.meta().describe(),
///     "* [multi] tags.1\n*   [required] tag - This field is required"
/// );
/// ```
pub struct NestedListField<'a, V: ?Sized> {
    name: String,
    values: Vec<&'a V>,
    checks: Vec<Check<'a, [&'a V]>>,
}

impl<'a, V: Validated + ?Sized> NestedListField<'a, V> {
    /// Create a field over any sequence of borrowed values.
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = &'a V>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
            checks: Vec::new(),
        }
    }

    /// The field name used as the error key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Register an arbitrary list-level check.
    pub fn check(mut self, check: impl Fn(&str, &[&'a V]) -> Option<FieldError> + 'a) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Fail with `minlength` when the list has fewer than `min` elements.
    pub fn min_length(self, min: usize) -> Self {
        let msg = format!("At least {} entries in the list are required", min);
        self.check(move |name, values| {
            (values.len() < min)
                .then(|| FieldError::new(LeafCode::MinLength, name, msg.as_str()))
        })
    }

    /// Fail with `maxlength` when the list has more than `max` elements.
    pub fn max_length(self, max: usize) -> Self {
        let msg = format!("At most {} entries in the list are required", max);
        self.check(move |name, values| {
            (values.len() > max)
                .then(|| FieldError::new(LeafCode::MaxLength, name, msg.as_str()))
        })
    }

    /// Fail with `custom` and the given message when `predicate` rejects the
    /// whole list.
    pub fn custom(
        self,
        predicate: impl Fn(&[&V]) -> bool + 'a,
        message: impl Into<String>,
    ) -> Self {
        let msg = message.into();
        self.check(move |name, values| {
            (!predicate(values))
                .then(|| FieldError::new(LeafCode::Custom, name, msg.as_str()))
        })
    }

    /// Validate every element, returning one `multi` error per failing
    /// element in index order.
    pub fn validate_all(&self) -> FieldErrors {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, value)| validate(*value).wrap(format!("{}.{}", self.name, i)))
            .collect()
    }
}

impl<V: Validated + ?Sized> Field for NestedListField<'_, V> {
    fn validate(&self) -> Option<FieldError> {
        if let Some(error) = self.validate_all().wrap(self.name.as_str()) {
            return Some(error);
        }
        first_failure(&self.checks, &self.name, self.values.as_slice())
    }
}

impl<V: ?Sized> fmt::Debug for NestedListField<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedListField")
            .field("name", &self.name)
            .field("len", &self.values.len())
            .field("checks", &self.checks.len())
            .finish()
    }
}
