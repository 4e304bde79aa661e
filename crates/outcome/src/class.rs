//! Classification tags attached to outcomes.
//!
//! A [`ResultClass`] is descriptive metadata only. Composition never looks at
//! it beyond threading it through unchanged; callers assign and read meaning
//! (for example, mapping [`ResultClass::NotFound`] to an HTTP 404 at the edge).

use std::fmt;

/// Closed set of outcome categories.
///
/// Exactly one variant, [`ResultClass::Success`], marks success. Every other
/// variant is a failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResultClass {
    /// The operation succeeded.
    Success,
    /// Input was malformed or violated a precondition.
    BadRequest,
    /// The addressed entity does not exist.
    NotFound,
    /// An entity with the same identity is already present.
    AlreadyExists,
    /// A concurrent edit invalidated the caller's view (stale version).
    EditConflict,
    /// Stored data conflicts with the requested change.
    DataConflict,
}

impl ResultClass {
    /// Every category, success first.
    pub const ALL: [Self; 6] = [
        Self::Success,
        Self::BadRequest,
        Self::NotFound,
        Self::AlreadyExists,
        Self::EditConflict,
        Self::DataConflict,
    ];

    /// Returns `true` for the success marker.
    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for any failure category.
    #[inline]
    #[must_use]
    pub const fn is_failure(self) -> bool {
        !self.is_success()
    }

    /// Stable snake_case name, suitable for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::EditConflict => "edit_conflict",
            Self::DataConflict => "data_conflict",
        }
    }
}

impl fmt::Display for ResultClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_is_success() {
        let successes: Vec<_> = ResultClass::ALL
            .iter()
            .filter(|class| class.is_success())
            .collect();
        assert_eq!(successes, vec![&ResultClass::Success]);
    }

    #[test]
    fn failure_is_complement_of_success() {
        for class in ResultClass::ALL {
            assert_ne!(class.is_success(), class.is_failure(), "{class}");
        }
    }

    #[test]
    fn display_uses_snake_case_name() {
        assert_eq!(ResultClass::EditConflict.to_string(), "edit_conflict");
        assert_eq!(ResultClass::NotFound.to_string(), "not_found");
    }
}
