//! Prelude module for convenient imports.
//!
//! ```rust
//! use nebula_outcome::prelude::*;
//!
//! let doubled = Outcome::ok(21).map(|x| x * 2);
//! assert_eq!(doubled, Outcome::ok(42));
//! ```

pub use crate::class::ResultClass;
pub use crate::comprehension::{Comprehension, select, select_many};
pub use crate::contracts::{Applicative, Container, Functor, Monad, compose, lift2, then};
pub use crate::error::{ErrorValue, OutcomeError};
pub use crate::outcome::{Failure, Outcome};
pub use crate::comprehend;

#[cfg(feature = "async")]
pub use crate::asynchronous::{BoxOutcomeFuture, OutcomeFutureExt};
#[cfg(feature = "async")]
pub use crate::comprehension::{select_async, select_many_async};
#[cfg(feature = "async")]
pub use crate::comprehend_async;
