//! The form engine.
//!
//! A type opts into validation by implementing [`Validated`]: it builds a
//! fresh [`Form`] (an ordered list of [`Field`]s, each already loaded with its
//! checks) every time it is asked. [`validate`] runs every field of that form
//! and collects the failures in field order. Sibling fields never stop each
//! other; short-circuiting only happens inside one field's own check list.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{FieldError, FieldErrors, FormValidation};

/// A named unit of validation.
///
/// The built-in kinds live in [`crate::fields`]. Implement this trait to add
/// a new kind; any `Field` can be placed in a [`Form`].
pub trait Field {
    /// Run this field's checks, returning the failure to report, if any.
    fn validate(&self) -> Option<FieldError>;
}

impl<F> Field for F
where
    F: Fn() -> Option<FieldError>,
{
    fn validate(&self) -> Option<FieldError> {
        self()
    }
}

/// Types that describe their own validation rules as a [`Form`].
///
/// # Example
///
/// ```
/// use scrub::{form, validate, Form, Int64Field, StringField, Validated};
///
/// struct Account {
///     handle: String,
///     age: i64,
/// }
///
/// impl Validated for Account {
///     fn form(&self) -> Form<'_> {
///         form![
///             StringField::new("handle", &self.handle).required().max_length(16),
///             Int64Field::new("age", self.age).between(13, 130),
///         ]
///     }
/// }
///
/// let errors = validate(&Account { handle: String::new(), age: 7 });
/// assert_eq!(
///     errors.describe(),
///     "* [required] handle - This field is required\n\
///      * [min] age - The value of this field must be between 13 and 130"
/// );
/// ```
pub trait Validated {
    /// Build the fields to check for this value, in report order.
    fn form(&self) -> Form<'_>;
}

impl<T: Validated + ?Sized> Validated for &T {
    fn form(&self) -> Form<'_> {
        (**self).form()
    }
}

impl<T: Validated + ?Sized> Validated for Box<T> {
    fn form(&self) -> Form<'_> {
        (**self).form()
    }
}

impl<T: Validated + ?Sized> Validated for Rc<T> {
    fn form(&self) -> Form<'_> {
        (**self).form()
    }
}

impl<T: Validated + ?Sized> Validated for Arc<T> {
    fn form(&self) -> Form<'_> {
        (**self).form()
    }
}

/// An ordered list of fields for one validation pass.
///
/// Forms borrow from the value that built them and are discarded after the
/// pass; nothing is cached between calls.
#[derive(Default)]
pub struct Form<'a> {
    fields: Vec<Box<dyn Field + 'a>>,
}

impl<'a> Form<'a> {
    /// Create an empty form.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field, builder style.
    pub fn with(mut self, field: impl Field + 'a) -> Self {
        self.push(field);
        self
    }

    /// Append a field.
    pub fn push(&mut self, field: impl Field + 'a) {
        self.fields.push(Box::new(field));
    }

    /// Append an already boxed field.
    pub fn push_boxed(&mut self, field: Box<dyn Field + 'a>) {
        self.fields.push(field);
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate every field in order and collect the failures.
    pub fn validate(&self) -> FieldErrors {
        let errors: FieldErrors = self
            .fields
            .iter()
            .filter_map(|field| field.validate())
            .inspect(|error| trace!(key = error.key(), code = %error.code(), "field failed"))
            .collect();

        debug!(
            fields = self.fields.len(),
            failures = errors.len(),
            "form validated"
        );
        errors
    }
}

impl fmt::Debug for Form<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields.len())
            .finish()
    }
}

impl<'a> FromIterator<Box<dyn Field + 'a>> for Form<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Field + 'a>>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<Box<dyn Field + 'a>> for Form<'a> {
    fn extend<I: IntoIterator<Item = Box<dyn Field + 'a>>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

/// Build a [`Form`] from a list of fields, keeping their order.
///
/// ```
/// use scrub::{form, Float64Field, Form, StringField};
///
/// let name = "Ada";
/// let f: Form<'_> = form![
///     StringField::new("name", name).required(),
///     Float64Field::new("owns", 0.5).between(0.25, 0.75),
/// ];
/// assert_eq!(f.len(), 2);
/// ```
#[macro_export]
macro_rules! form {
    () => {
        $crate::Form::new()
    };
    ($($field:expr),+ $(,)?) => {{
        let mut form = $crate::Form::new();
        $(form.push($field);)+
        form
    }};
}

/// Validate a value by running every field of its form.
///
/// Returns an empty forest when nothing failed. This is the single recursive
/// entry point: nested and list fields call it on their sub-values.
pub fn validate<V: Validated + ?Sized>(value: &V) -> FieldErrors {
    value.form().validate()
}

/// Validate a value and convert the outcome to a stillwater `Validation`.
///
/// ```
/// use scrub::{form, validation, Form, StringField, Validated};
///
/// struct Tag(String);
///
/// impl Validated for Tag {
///     fn form(&self) -> Form<'_> {
///         form![StringField::new("tag", &self.0).required()]
///     }
/// }
///
/// assert!(validation(&Tag("rust".into())).is_success());
/// assert!(validation(&Tag(" ".into())).is_failure());
/// ```
pub fn validation<V: Validated + ?Sized>(value: &V) -> FormValidation<()> {
    validate(value).into_validation()
}
