//! Error types for the scrub validation engine.
//!
//! A validation pass produces a [`FieldErrors`] forest. Each node is a
//! [`FieldError`]: either a leaf reporting one failed rule, or a `multi` node
//! wrapping the failures of a nested value or list element. The forest
//! integrates with stillwater's `Validation` type through the `Semigroup`
//! trait, so forests from independent passes can be accumulated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stillwater::{Semigroup, Validation};
use thiserror::Error;

/// The reason a field failed validation.
///
/// This is a closed vocabulary; consumers may match on the wire strings
/// returned by [`FieldErrorCode::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldErrorCode {
    /// A value that must be present is empty or absent
    Required,
    /// A value does not match its expected format
    Invalid,
    /// A value or list is shorter than its lower bound
    MinLength,
    /// A value or list is longer than its upper bound
    MaxLength,
    /// A number is below its lower bound
    Min,
    /// A number is above its upper bound
    Max,
    /// Structural node wrapping the failures of a nested value
    Multi,
    /// A caller-supplied predicate rejected the value
    Custom,
}

impl FieldErrorCode {
    /// All codes, in declaration order.
    pub const ALL: [FieldErrorCode; 8] = [
        FieldErrorCode::Required,
        FieldErrorCode::Invalid,
        FieldErrorCode::MinLength,
        FieldErrorCode::MaxLength,
        FieldErrorCode::Min,
        FieldErrorCode::Max,
        FieldErrorCode::Multi,
        FieldErrorCode::Custom,
    ];

    /// The wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorCode::Required => "required",
            FieldErrorCode::Invalid => "invalid",
            FieldErrorCode::MinLength => "minlength",
            FieldErrorCode::MaxLength => "maxlength",
            FieldErrorCode::Min => "min",
            FieldErrorCode::Max => "max",
            FieldErrorCode::Multi => "multi",
            FieldErrorCode::Custom => "custom",
        }
    }
}

impl fmt::Display for FieldErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The codes a leaf error may carry: every [`FieldErrorCode`] except
/// [`FieldErrorCode::Multi`].
///
/// [`FieldError::new`] takes this type, so a leaf can never be built with the
/// structural code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafCode {
    Required,
    Invalid,
    MinLength,
    MaxLength,
    Min,
    Max,
    Custom,
}

impl From<LeafCode> for FieldErrorCode {
    fn from(code: LeafCode) -> Self {
        match code {
            LeafCode::Required => FieldErrorCode::Required,
            LeafCode::Invalid => FieldErrorCode::Invalid,
            LeafCode::MinLength => FieldErrorCode::MinLength,
            LeafCode::MaxLength => FieldErrorCode::MaxLength,
            LeafCode::Min => FieldErrorCode::Min,
            LeafCode::Max => FieldErrorCode::Max,
            LeafCode::Custom => FieldErrorCode::Custom,
        }
    }
}

impl FieldErrorCode {
    /// The leaf form of this code, or `None` for [`FieldErrorCode::Multi`].
    pub fn leaf(self) -> Option<LeafCode> {
        match self {
            FieldErrorCode::Required => Some(LeafCode::Required),
            FieldErrorCode::Invalid => Some(LeafCode::Invalid),
            FieldErrorCode::MinLength => Some(LeafCode::MinLength),
            FieldErrorCode::MaxLength => Some(LeafCode::MaxLength),
            FieldErrorCode::Min => Some(LeafCode::Min),
            FieldErrorCode::Max => Some(LeafCode::Max),
            FieldErrorCode::Multi => None,
            FieldErrorCode::Custom => Some(LeafCode::Custom),
        }
    }
}

impl fmt::Display for LeafCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldErrorCode::from(*self).fmt(f)
    }
}

/// Returned when parsing a string that is not one of the known error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field error code '{0}'")]
pub struct ParseCodeError(pub String);

impl FromStr for FieldErrorCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseCodeError(s.to_string()))
    }
}

/// A deserialized error whose shape breaks the leaf/multi invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorShapeError {
    /// A `multi` node arrived without children
    #[error("multi error '{key}' has no children")]
    EmptyMulti { key: String },
    /// A leaf node arrived carrying children
    #[error("{code} error '{key}' must not carry children")]
    LeafWithChildren { code: FieldErrorCode, key: String },
}

/// One validation failure.
///
/// `meta` is non-empty exactly when the code is [`FieldErrorCode::Multi`];
/// leaves never carry children. The fields are private so the invariant
/// holds for every value built through the constructors or deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldError")]
pub struct FieldError {
    code: FieldErrorCode,
    key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    detail: String,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    meta: FieldErrors,
}

#[derive(Deserialize)]
struct RawFieldError {
    code: FieldErrorCode,
    key: String,
    #[serde(default)]
    detail: String,
    #[serde(default)]
    meta: FieldErrors,
}

impl TryFrom<RawFieldError> for FieldError {
    type Error = ErrorShapeError;

    fn try_from(raw: RawFieldError) -> Result<Self, Self::Error> {
        match raw.code.leaf() {
            None => raw
                .meta
                .wrap(raw.key.as_str())
                .ok_or(ErrorShapeError::EmptyMulti { key: raw.key }),
            Some(code) if raw.meta.is_empty() => Ok(FieldError::new(code, raw.key, raw.detail)),
            Some(_) => Err(ErrorShapeError::LeafWithChildren {
                code: raw.code,
                key: raw.key,
            }),
        }
    }
}

impl FieldError {
    /// Create a leaf error.
    ///
    /// Structural nodes are built with [`FieldError::multi`] instead.
    pub fn new(code: LeafCode, key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
            detail: detail.into(),
            meta: FieldErrors::new(),
        }
    }

    /// Create a `multi` node wrapping the failures of a nested value.
    ///
    /// Returns `None` when `children` is empty: a nested value with no
    /// failures is not reported.
    pub fn multi(key: impl Into<String>, children: FieldErrors) -> Option<Self> {
        (!children.is_empty()).then(|| Self {
            code: FieldErrorCode::Multi,
            key: key.into(),
            detail: String::new(),
            meta: children,
        })
    }

    /// The failure code.
    pub fn code(&self) -> FieldErrorCode {
        self.code
    }

    /// The name of the failing field, or `<list>.<index>` for list elements.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The human-readable message, if there is one after trimming.
    pub fn detail(&self) -> Option<&str> {
        let trimmed = self.detail.trim_matches(' ');
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Child failures of a `multi` node; empty for leaves.
    pub fn meta(&self) -> &FieldErrors {
        &self.meta
    }

    /// Check if this is a structural `multi` node.
    pub fn is_multi(&self) -> bool {
        self.code == FieldErrorCode::Multi
    }

    /// Render as `[<code>] <key>`, followed by ` - <detail>` when there is one.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.key)?;
        if let Some(detail) = self.detail() {
            write!(f, " - {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

/// An ordered forest of validation failures.
///
/// Order follows field declaration order, and list index order for list
/// elements. An empty forest means the value is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a forest holding a single error.
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    /// Number of top-level errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no errors at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an error at the end.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// The first top-level error, if any.
    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    /// Iterate over top-level errors.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Get all top-level errors as a slice.
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Wrap this forest in a `multi` node named `key`.
    ///
    /// Returns `None` when the forest is empty, so nothing is reported for a
    /// nested value that passed.
    pub fn wrap(self, key: impl Into<String>) -> Option<FieldError> {
        FieldError::multi(key, self)
    }

    /// Find a node by following a dotted chain of keys through `multi` nodes.
    ///
    /// Keys may contain dots themselves (`employees.2`), so each level tries
    /// every key that covers whole segments of `path`: an exact match first,
    /// then the remaining candidates longest key first, descending into a
    /// candidate's children and moving on to the next one when nothing below
    /// matches. Among equal keys, the earliest in the forest wins.
    pub fn find(&self, path: &str) -> Option<&FieldError> {
        if let Some(exact) = self.iter().find(|e| e.key == path) {
            return Some(exact);
        }
        let mut candidates: Vec<(&FieldError, &str)> = self
            .iter()
            .filter_map(|e| {
                path.strip_prefix(e.key.as_str())
                    .and_then(|rest| rest.strip_prefix('.'))
                    .map(|rest| (e, rest))
            })
            .collect();
        candidates.sort_by_key(|(e, _)| std::cmp::Reverse(e.key.len()));
        candidates
            .into_iter()
            .find_map(|(e, rest)| e.meta.find(rest))
    }

    /// Depth-first, pre-order list of leaf errors with the keys of the
    /// `multi` nodes enclosing each one.
    pub fn leaves(&self) -> Vec<(Vec<&str>, &FieldError)> {
        let mut out = Vec::new();
        collect_leaves(self, &mut Vec::new(), &mut out);
        out
    }

    /// Count every leaf in the forest.
    pub fn leaf_count(&self) -> usize {
        self.iter()
            .map(|e| if e.is_multi() { e.meta.leaf_count() } else { 1 })
            .sum()
    }

    /// Top-level rendering: one [`FieldError::render`] per line, no recursion.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render the whole forest, one node per line, indented two spaces per
    /// nesting level:
    ///
    /// ```text
    /// * [max] established - The value of this field must be between 1900 and 2015
    /// * [multi] president
    /// *   [min] owns - The value of this field must be between 0.25 and 0.75
    /// ```
    pub fn describe(&self) -> String {
        let mut lines = Vec::new();
        for error in self.iter() {
            describe_into(error, 0, &mut lines);
        }
        lines.join("\n")
    }

    /// Serialize the forest as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Convert into a stillwater validation: `Success(())` when empty.
    pub fn into_validation(self) -> FormValidation<()> {
        if self.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(self)
        }
    }
}

fn describe_into(error: &FieldError, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!("* {}{}", "  ".repeat(depth), error));
    for child in error.meta.iter() {
        describe_into(child, depth + 1, lines);
    }
}

fn collect_leaves<'e>(
    errors: &'e FieldErrors,
    trail: &mut Vec<&'e str>,
    out: &mut Vec<(Vec<&'e str>, &'e FieldError)>,
) {
    for error in errors.iter() {
        if error.is_multi() {
            trail.push(&error.key);
            collect_leaves(&error.meta, trail, out);
            trail.pop();
        } else {
            out.push((trail.clone(), error));
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self::single(error)
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<FieldError> for FieldErrors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The stillwater validation result for a form.
///
/// `Failure` always holds a non-empty forest when produced by this crate.
pub type FormValidation<T> = Validation<T, FieldErrors>;

/// Extension trait for creating failing validations easily.
pub trait FormValidationExt<T> {
    /// Create a failing validation with a single error.
    fn fail_with(error: FieldError) -> FormValidation<T>;
}

impl<T> FormValidationExt<T> for FormValidation<T> {
    fn fail_with(error: FieldError) -> FormValidation<T> {
        Validation::Failure(FieldErrors::single(error))
    }
}
