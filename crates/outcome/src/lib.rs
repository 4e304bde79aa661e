//! # nebula-outcome
//!
//! A composable success/failure type for domain operations.
//!
//! An [`Outcome<T>`] is either a value or a classified set of
//! [`ErrorValue`]s. It composes through three law-governed contracts
//! ([`map`](Outcome::map), [`apply`](Outcome::apply), [`bind`](Outcome::bind)),
//! an asynchronous mirror of each, and a comprehension adapter for
//! multi-step pipelines.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_outcome::prelude::*;
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     match raw.parse() {
//!         Ok(age) => Outcome::ok(age),
//!         Err(_) => Outcome::with_error(
//!             ErrorValue::new("invalid_age", "age must be a number").with_field("age"),
//!             ResultClass::BadRequest,
//!         ),
//!     }
//! }
//!
//! fn check_adult(age: u8) -> Outcome<u8> {
//!     Outcome::ok_if(
//!         age >= 18,
//!         || age,
//!         [ErrorValue::new("too_young", "must be 18+").with_field("age")],
//!         ResultClass::BadRequest,
//!     )
//! }
//!
//! assert_eq!(parse_age("42").bind(check_adult), Outcome::ok(42));
//! assert_eq!(parse_age("12").bind(check_adult).errors()[0].code(), "too_young");
//! ```
//!
//! ## Propagation
//!
//! - `map` and `bind` never call their function on a failure; the failure
//!   passes through unchanged. The first failure in a bind chain wins.
//! - `apply` with both sides failed keeps the **function side's** failure
//!   and drops the value side's errors. Errors are not accumulated.
//! - Async producers that fault through their own channel are not turned
//!   into failures; see [`asynchronous`].
//!
//! ## Features
//!
//! - `async` (default): the asynchronous mirror, [`OutcomeFutureExt`], and
//!   [`comprehend_async!`].

pub mod class;
pub mod comprehension;
pub mod contracts;
pub mod error;
mod macros;
pub mod outcome;
pub mod prelude;

#[cfg(feature = "async")]
pub mod asynchronous;

pub use class::ResultClass;
pub use error::{ErrorValue, OutcomeError, Shape};
pub use outcome::{Failure, Outcome};

#[cfg(feature = "async")]
pub use asynchronous::{BoxOutcomeFuture, OutcomeFutureExt};
