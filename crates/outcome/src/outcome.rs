//! The [`Outcome`] type and its synchronous composition.
//!
//! An outcome is either `Success(value)` or `Failure(Failure)`, never both.
//! Composition consumes the receiver and returns a new outcome; nothing is
//! mutated in place. Use [`Outcome::by_ref`] to compose from a shared
//! instance without giving it up.
//!
//! # Propagation rules
//!
//! | operation | left fails | right fails | both fail |
//! |-----------|-----------|-------------|-----------|
//! | [`map`](Outcome::map) | left passes through, `f` not called | n/a | n/a |
//! | [`bind`](Outcome::bind) | left passes through, `f` not called | `f`'s failure returned | n/a |
//! | [`apply`](Outcome::apply) | left passes through | right passes through | **right** passes through, left discarded |
//!
//! `bind` is left-biased: the first failure short-circuits everything after
//! it. `apply` with two failures is right-biased: the function container's
//! errors and class surface and the value container's errors are dropped,
//! not accumulated.

use std::fmt;

use crate::class::ResultClass;
use crate::error::{ErrorValue, OutcomeError};

// ============================================================================
// FAILURE PAYLOAD
// ============================================================================

/// Payload of a failed outcome: the error records and their classification.
///
/// `errors` may be empty. `class` is never [`ResultClass::Success`] when the
/// failure was built through the checked constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{class} failure with {} error(s)", .errors.len())]
pub struct Failure {
    errors: Vec<ErrorValue>,
    class: ResultClass,
}

impl Failure {
    /// Builds a failure, rejecting the success classification.
    pub fn new(
        errors: impl IntoIterator<Item = ErrorValue>,
        class: ResultClass,
    ) -> Result<Self, OutcomeError> {
        if class.is_success() {
            return Err(OutcomeError::SuccessClassOnFailure);
        }
        Ok(Self::new_unchecked(errors, class))
    }

    pub(crate) fn new_unchecked(
        errors: impl IntoIterator<Item = ErrorValue>,
        class: ResultClass,
    ) -> Self {
        debug_assert!(
            class.is_failure(),
            "a failed outcome cannot be classified as success"
        );
        Self {
            errors: errors.into_iter().collect(),
            class,
        }
    }

    /// The error records, possibly empty.
    #[must_use]
    pub fn errors(&self) -> &[ErrorValue] {
        &self.errors
    }

    /// The failure classification.
    #[must_use]
    pub fn class(&self) -> ResultClass {
        self.class
    }

    /// Splits into the error records and the classification.
    pub fn into_parts(self) -> (Vec<ErrorValue>, ResultClass) {
        (self.errors, self.class)
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Either a successful value or a classified set of domain errors.
///
/// # Examples
///
/// ```rust
/// use nebula_outcome::{ErrorValue, Outcome, ResultClass};
///
/// fn parse_port(raw: &str) -> Outcome<u16> {
///     match raw.parse() {
///         Ok(port) => Outcome::ok(port),
///         Err(_) => Outcome::with_error(
///             ErrorValue::new("invalid_port", "not a port number").with_field("port"),
///             ResultClass::BadRequest,
///         ),
///     }
/// }
///
/// let doubled = parse_port("4000").map(|port| u32::from(port) * 2);
/// assert_eq!(doubled, Outcome::ok(8000));
///
/// let failed = parse_port("http").map(|port| u32::from(port) * 2);
/// assert_eq!(failed.class(), ResultClass::BadRequest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome may be a failure, which should be handled"]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Failure(Failure),
}

impl<T> Outcome<T> {
    // ------------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------------

    /// Wraps a value as a success.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Same as [`Outcome::ok`]; the applicative unit.
    #[inline]
    pub fn pure(value: T) -> Self {
        Self::Success(value)
    }

    /// Builds a failure from a sequence of errors.
    ///
    /// Passing [`ResultClass::Success`] is a caller bug: it trips a debug
    /// assertion and is otherwise unspecified. Use
    /// [`try_with_errors`](Self::try_with_errors) when the class is not
    /// statically known to be a failure category.
    pub fn with_errors(errors: impl IntoIterator<Item = ErrorValue>, class: ResultClass) -> Self {
        Self::Failure(Failure::new_unchecked(errors, class))
    }

    /// Builds a failure from a single error.
    pub fn with_error(error: ErrorValue, class: ResultClass) -> Self {
        Self::with_errors([error], class)
    }

    /// Checked form of [`with_errors`](Self::with_errors).
    pub fn try_with_errors(
        errors: impl IntoIterator<Item = ErrorValue>,
        class: ResultClass,
    ) -> Result<Self, OutcomeError> {
        Failure::new(errors, class).map(Self::Failure)
    }

    /// Checked form of [`with_error`](Self::with_error).
    pub fn try_with_error(error: ErrorValue, class: ResultClass) -> Result<Self, OutcomeError> {
        Self::try_with_errors([error], class)
    }

    /// Succeeds with `value()` when `condition` holds, fails otherwise.
    ///
    /// `value` is only called on the success path.
    ///
    /// ```rust
    /// use nebula_outcome::{ErrorValue, Outcome, ResultClass};
    ///
    /// let denied: Outcome<u32> = Outcome::ok_if(
    ///     false,
    ///     || unreachable!("never evaluated"),
    ///     [ErrorValue::new("too_young", "must be 18+")],
    ///     ResultClass::BadRequest,
    /// );
    /// assert!(!denied.is_success());
    /// ```
    pub fn ok_if<F>(
        condition: bool,
        value: F,
        errors: impl IntoIterator<Item = ErrorValue>,
        class: ResultClass,
    ) -> Self
    where
        F: FnOnce() -> T,
    {
        if condition {
            Self::Success(value())
        } else {
            Self::with_errors(errors, class)
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns `true` for `Success`.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// [`ResultClass::Success`] on success, the failure's class otherwise.
    #[must_use]
    pub fn class(&self) -> ResultClass {
        match self {
            Self::Success(_) => ResultClass::Success,
            Self::Failure(failure) => failure.class,
        }
    }

    /// Borrows the contained value.
    ///
    /// Calling this on a failure is a usage fault.
    pub fn value(&self) -> Result<&T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(OutcomeError::expected_success()),
        }
    }

    /// Takes the contained value.
    pub fn into_value(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(OutcomeError::expected_success()),
        }
    }

    /// The error records; empty on success.
    #[must_use]
    pub fn errors(&self) -> &[ErrorValue] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(failure) => &failure.errors,
        }
    }

    /// Borrows the failure payload, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Takes the failure payload. Calling this on a success is a usage fault.
    pub fn into_failure(self) -> Result<Failure, OutcomeError> {
        match self {
            Self::Success(_) => Err(OutcomeError::expected_failure()),
            Self::Failure(failure) => Ok(failure),
        }
    }

    /// Converts into an `Option`, dropping any failure.
    pub fn ok_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into a std `Result` so the failure can travel through `?`.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Borrows the value, producing a new outcome over `&T`.
    ///
    /// The failure payload is cloned; the original outcome is left intact.
    pub fn by_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure.clone()),
        }
    }

    /// Eliminates both shapes into a single value.
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Failure) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    // ------------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------------

    /// Transforms the contained value.
    ///
    /// On failure the errors and class pass through unchanged and `f` is
    /// never called.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Applies a wrapped function to the contained value.
    ///
    /// | `self` | `function` | result |
    /// |---|---|---|
    /// | `Success(v)` | `Success(f)` | `Success(f(v))` |
    /// | `Failure(e1)` | `Success(f)` | `Failure(e1)` |
    /// | `Success(v)` | `Failure(e2)` | `Failure(e2)` |
    /// | `Failure(e1)` | `Failure(e2)` | `Failure(e2)` |
    ///
    /// When both sides have failed, the function container wins and `self`'s
    /// errors are discarded.
    ///
    /// ```rust
    /// use nebula_outcome::{ErrorValue, Outcome, ResultClass};
    ///
    /// let stale: Outcome<i32> =
    ///     Outcome::with_error(ErrorValue::new("stale", "row changed"), ResultClass::EditConflict);
    /// let rejected: Outcome<fn(i32) -> i32> =
    ///     Outcome::with_error(ErrorValue::new("bad", "rejected"), ResultClass::BadRequest);
    ///
    /// let result = stale.apply(rejected);
    /// assert_eq!(result.class(), ResultClass::BadRequest);
    /// assert_eq!(result.errors()[0].code(), "bad");
    /// ```
    pub fn apply<U, F>(self, function: Outcome<F>) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match (self, function) {
            (Self::Success(value), Outcome::Success(f)) => Outcome::Success(f(value)),
            (Self::Failure(failure), Outcome::Success(_)) => Outcome::Failure(failure),
            (Self::Success(_), Outcome::Failure(failure)) => Outcome::Failure(failure),
            (Self::Failure(discarded), Outcome::Failure(failure)) => {
                tracing::debug!(
                    discarded_class = %discarded.class,
                    discarded_errors = discarded.errors.len(),
                    kept_class = %failure.class,
                    "apply: both operands failed, keeping the function side"
                );
                Outcome::Failure(failure)
            }
        }
    }

    /// Chains a computation that itself produces an outcome.
    ///
    /// On success the result of `f` is returned as is. On failure `f` is
    /// never called and the failure passes through unchanged.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(failure) => {
                tracing::trace!(class = %failure.class, "bind: short-circuit on failure");
                Outcome::Failure(failure)
            }
        }
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "success({value})"),
            Self::Failure(failure) => {
                write!(f, "{failure}")?;
                for error in &failure.errors {
                    write!(f, "; {error}")?;
                }
                Ok(())
            }
        }
    }
}

/// Collects successes; the first failure is returned and the rest of the
/// iterator is not consumed.
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(f) => {
                    failure = Some(f);
                    None
                }
            })
            .collect();

        match failure {
            Some(failure) => Self::Failure(failure),
            None => Self::Success(collected),
        }
    }
}
