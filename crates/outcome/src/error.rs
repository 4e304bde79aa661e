//! Error records and usage faults
//!
//! Two unrelated things live here:
//!
//! - [`ErrorValue`] is domain data. A failed [`Outcome`](crate::Outcome)
//!   carries zero or more of them. They are returned, never raised.
//! - [`OutcomeError`] is a usage fault: reading an outcome through the
//!   accessor for the shape it does not have, or building a failure tagged
//!   as success. Callers propagate it with `?`; nothing in this crate
//!   recovers from it.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! cost no allocation.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR VALUE
// ============================================================================

/// An immutable error record.
///
/// Equality is structural over all four fields; `cause` compares by its own
/// equality, recursively.
///
/// # Examples
///
/// ```rust
/// use nebula_outcome::ErrorValue;
///
/// let root = ErrorValue::new("io", "disk unavailable");
/// let error = ErrorValue::new("save_failed", "Could not save profile")
///     .with_field("profile.avatar")
///     .with_cause(root.clone());
///
/// assert_eq!(error.code(), "save_failed");
/// assert_eq!(error.field(), Some("profile.avatar"));
/// assert_eq!(error.cause(), Some(&root));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorValue {
    message: Cow<'static, str>,
    code: Cow<'static, str>,
    field: Option<Cow<'static, str>>,
    cause: Option<Box<ErrorValue>>,
}

impl ErrorValue {
    /// Creates an error with a code and message.
    ///
    /// The code is an application-defined tag: `"min_length"`,
    /// `"user.duplicate_email"`, whatever the caller compares against.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            field: None,
            cause: None,
        }
    }

    /// Sets the field locator, e.g. `"user.email"` or `"items[0].name"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Chains an underlying error for diagnostics.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: ErrorValue) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Application-defined code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Field locator, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Underlying error, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&ErrorValue> {
        self.cause.as_deref()
    }

    /// Iterates this error followed by its chain of causes.
    pub fn chain(&self) -> impl Iterator<Item = &ErrorValue> {
        std::iter::successors(Some(self), |error| error.cause())
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}: {}", self.code, field, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ErrorValue {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

// ============================================================================
// USAGE FAULTS
// ============================================================================

/// Which of the two shapes an outcome has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `Outcome::Success`
    Success,
    /// `Outcome::Failure`
    Failure,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Failure => f.write_str("failure"),
        }
    }
}

/// Faults raised by misusing an outcome.
///
/// These indicate a bug in the calling code path and are never produced by
/// composition itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// An accessor for one shape was called on the other.
    #[error("pattern mismatch: expected {expected} outcome, found {found}")]
    PatternMismatch {
        /// Shape the accessor requires.
        expected: Shape,
        /// Shape the outcome actually has.
        found: Shape,
    },

    /// A failure was constructed with [`ResultClass::Success`](crate::ResultClass::Success).
    #[error("a failed outcome cannot be classified as success")]
    SuccessClassOnFailure,
}

impl OutcomeError {
    pub(crate) const fn expected_success() -> Self {
        Self::PatternMismatch {
            expected: Shape::Success,
            found: Shape::Failure,
        }
    }

    pub(crate) const fn expected_failure() -> Self {
        Self::PatternMismatch {
            expected: Shape::Failure,
            found: Shape::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[test]
    fn equality_covers_every_field() {
        let base = ErrorValue::new("code", "message");

        assert_eq!(base, ErrorValue::new("code", "message"));
        assert_ne!(base, ErrorValue::new("other", "message"));
        assert_ne!(base, ErrorValue::new("code", "other"));
        assert_ne!(base, base.clone().with_field("name"));
        assert_ne!(base, base.clone().with_cause(ErrorValue::new("root", "x")));
    }

    #[test]
    fn cause_compares_recursively() {
        let a = ErrorValue::new("outer", "m").with_cause(ErrorValue::new("inner", "a"));
        let b = ErrorValue::new("outer", "m").with_cause(ErrorValue::new("inner", "b"));
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn display_includes_field_when_present() {
        let plain = ErrorValue::new("required", "This field is required");
        assert_eq!(plain.to_string(), "[required] This field is required");

        let located = plain.with_field("email");
        assert_eq!(located.to_string(), "[required] email: This field is required");
    }

    #[test]
    fn source_exposes_cause() {
        let error = ErrorValue::new("outer", "wrapped").with_cause(ErrorValue::new("io", "disk"));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("[io] disk"));
        assert!(ErrorValue::new("leaf", "no cause").source().is_none());
    }

    #[test]
    fn chain_walks_causes_in_order() {
        let error = ErrorValue::new("a", "1")
            .with_cause(ErrorValue::new("b", "2").with_cause(ErrorValue::new("c", "3")));
        let codes: Vec<_> = error.chain().map(ErrorValue::code).collect();
        assert_eq!(codes, vec!["a", "b", "c"]);
    }

    #[test]
    fn pattern_mismatch_message() {
        assert_eq!(
            OutcomeError::expected_success().to_string(),
            "pattern mismatch: expected success outcome, found failure"
        );
    }
}
