//! Comprehension macros
//!
//! - [`comprehend!`]: sequential pipeline over any type implementing the
//!   composition contracts
//! - [`comprehend_async!`]: the same notation where each source is a future
//!   resolving to an [`Outcome`](crate::Outcome)
//!
//! # Grammar
//!
//! ```text
//! from <pat> in <expr>;     bind the next value
//! let <pat> = <expr>;       plain binding, no effect
//! select <expr>             final projection
//! ```
//!
//! Each `from` clause becomes a nested `bind`; a `from` directly followed by
//! `select` becomes a `map`. A `select` after a `let` lifts its value with
//! `pure`.
//! Evaluation stops at the first failing clause, and later clauses are never
//! evaluated.

// ============================================================================
// SYNC
// ============================================================================

/// Multi-clause composition over bind/map.
///
/// ```rust
/// use nebula_outcome::{comprehend, ErrorValue, Outcome, ResultClass};
///
/// fn find_user(id: u32) -> Outcome<String> {
///     Outcome::ok_if(id == 7, || "ada".to_owned(), [ErrorValue::new("missing", "no such user")], ResultClass::NotFound)
/// }
///
/// let greeting = comprehend! {
///     from id in Outcome::ok(7);
///     from name in find_user(id);
///     let upper = name.to_uppercase();
///     select format!("{id}:{upper}")
/// };
/// assert_eq!(greeting, Outcome::ok("7:ADA".to_owned()));
/// ```
#[macro_export]
macro_rules! comprehend {
    (from $pat:pat in $source:expr ; select $body:expr $(;)?) => {
        $crate::comprehension::select($source, move |$pat| $body)
    };
    (from $pat:pat in $source:expr ; $($rest:tt)+) => {
        $crate::contracts::Monad::bind($source, move |$pat| $crate::comprehend!($($rest)+))
    };
    (let $pat:pat = $value:expr ; $($rest:tt)+) => {{
        let $pat = $value;
        $crate::comprehend!($($rest)+)
    }};
    (select $body:expr $(;)?) => {
        $crate::contracts::Applicative::pure($body)
    };
}

// ============================================================================
// ASYNC
// ============================================================================

/// Multi-clause composition over `bind_async`/`map`.
///
/// Every `from` source must be a future (or `IntoFuture`) resolving to an
/// [`Outcome`](crate::Outcome). The whole comprehension is itself a future
/// and does nothing until awaited.
///
/// ```rust
/// use nebula_outcome::{comprehend_async, Outcome};
///
/// async fn load(n: i32) -> Outcome<i32> {
///     Outcome::ok(n * 2)
/// }
///
/// # futures::executor::block_on(async {
/// let total = comprehend_async! {
///     from a in load(1);
///     from b in load(a);
///     select a + b
/// }
/// .await;
/// assert_eq!(total, Outcome::ok(6));
/// # });
/// ```
#[cfg(feature = "async")]
#[macro_export]
macro_rules! comprehend_async {
    (from $pat:pat in $source:expr ; select $body:expr $(;)?) => {
        async move { $crate::Outcome::map(($source).await, move |$pat| $body) }
    };
    (from $pat:pat in $source:expr ; $($rest:tt)+) => {
        async move {
            $crate::Outcome::bind_async(($source).await, move |$pat| {
                $crate::comprehend_async!($($rest)+)
            })
            .await
        }
    };
    (let $pat:pat = $value:expr ; $($rest:tt)+) => {
        async move {
            let $pat = $value;
            $crate::comprehend_async!($($rest)+).await
        }
    };
    (select $body:expr $(;)?) => {
        async move { $crate::Outcome::pure($body) }
    };
}
