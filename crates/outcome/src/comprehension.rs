//! Comprehension adapter
//!
//! `select` and `select_many` are the two building blocks of a sequential
//! "for each intermediate value, continue" pipeline:
//!
//! - `select(source, f)` is `source.map(f)`;
//! - `select_many(source, f, combine)` is
//!   `source.bind(|x| f(&x).map(|y| combine(x, y)))`.
//!
//! They add no propagation rules of their own. Because a multi-clause
//! pipeline nests `bind`, the first failing clause's errors and class surface
//! and no later clause is evaluated.
//!
//! The [`comprehend!`](crate::comprehend) and
//! [`comprehend_async!`](crate::comprehend_async) macros provide the
//! multi-clause notation on top of these.
//!
//! The synchronous forms are generic over the
//! [composition contracts](crate::contracts), so any conforming effect type
//! can be used, not just [`Outcome`].

use crate::contracts::{Container, Functor, Monad};
#[cfg(feature = "async")]
use crate::outcome::Outcome;
#[cfg(feature = "async")]
use std::future::Future;

/// Projects the contained value. Equivalent to `source.map(f)`.
pub fn select<M, U, F>(source: M, f: F) -> M::Rebind<U>
where
    M: Functor,
    F: FnOnce(M::Value) -> U,
{
    source.map(f)
}

/// Binds a dependent step and combines both values.
///
/// `f` sees the first value by reference; `combine` receives it by value
/// together with the second value.
///
/// ```rust
/// use nebula_outcome::comprehension::select_many;
/// use nebula_outcome::Outcome;
///
/// let pair = select_many(Outcome::ok(2), |x| Outcome::ok(x * 10), |x, y| (x, y));
/// assert_eq!(pair, Outcome::ok((2, 20)));
/// ```
pub fn select_many<M, U, V, F, C>(source: M, f: F, combine: C) -> M::Rebind<V>
where
    M: Monad,
    M::Rebind<U>: Functor<Rebind<V> = M::Rebind<V>>,
    F: FnOnce(&M::Value) -> M::Rebind<U>,
    C: FnOnce(M::Value, U) -> V,
{
    source.bind(move |value| {
        let next = f(&value);
        next.map(move |inner| combine(value, inner))
    })
}

/// Method form of [`select`] and [`select_many`] for every conforming type.
pub trait Comprehension: Functor + Monad + Sized {
    /// See [`select`].
    fn select<U, F>(self, f: F) -> <Self as Container>::Rebind<U>
    where
        F: FnOnce(<Self as Container>::Value) -> U,
    {
        select(self, f)
    }

    /// See [`select_many`].
    fn select_many<U, V, F, C>(self, f: F, combine: C) -> <Self as Container>::Rebind<V>
    where
        <Self as Container>::Rebind<U>: Functor<Rebind<V> = <Self as Container>::Rebind<V>>,
        F: FnOnce(&<Self as Container>::Value) -> <Self as Container>::Rebind<U>,
        C: FnOnce(<Self as Container>::Value, U) -> V,
    {
        select_many(self, f, combine)
    }
}

impl<M> Comprehension for M where M: Functor + Monad {}

// ============================================================================
// ASYNC FORMS
// ============================================================================

/// Async form of [`select`]: `source.map_async(f)`.
#[cfg(feature = "async")]
pub async fn select_async<T, U, F, Fut>(source: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = U>,
{
    source.map_async(f).await
}

/// Async form of [`select_many`]: the dependent step is an async producer,
/// `combine` stays synchronous.
#[cfg(feature = "async")]
pub async fn select_many_async<T, U, V, F, Fut, C>(
    source: Outcome<T>,
    f: F,
    combine: C,
) -> Outcome<V>
where
    F: FnOnce(&T) -> Fut,
    Fut: Future<Output = Outcome<U>>,
    C: FnOnce(T, U) -> V,
{
    source
        .bind_async(move |value| async move {
            let next = f(&value).await;
            next.map(move |inner| combine(value, inner))
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorValue, Outcome, ResultClass};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn failed<T>(code: &'static str, class: ResultClass) -> Outcome<T> {
        Outcome::with_error(ErrorValue::new(code, "failed"), class)
    }

    #[test]
    fn select_is_map() {
        assert_eq!(select(Outcome::ok(4), |x| x + 1), Outcome::ok(4).map(|x| x + 1));
        assert_eq!(Outcome::ok(4).select(|x| x * 2), Outcome::ok(8));
    }

    #[test]
    fn select_many_is_bind_then_map() {
        let f = |x: &i32| Outcome::ok(*x + 1);
        let combine = |x: i32, y: i32| x * y;

        let adapted = select_many(Outcome::ok(3), f, combine);
        let manual = Outcome::ok(3).bind(|x| f(&x).map(|y| combine(x, y)));
        assert_eq!(adapted, manual);
        assert_eq!(adapted, Outcome::ok(12));
    }

    #[test]
    fn select_many_skips_step_after_failed_source() {
        let calls = Cell::new(0);
        let source: Outcome<i32> = failed("source", ResultClass::NotFound);
        let result = source.select_many(
            |x| {
                calls.set(calls.get() + 1);
                Outcome::ok(*x)
            },
            |x, y| x + y,
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(result, failed("source", ResultClass::NotFound));
    }

    #[test]
    fn select_many_surfaces_step_failure() {
        let result = select_many(
            Outcome::ok(1),
            |_| failed::<i32>("step", ResultClass::AlreadyExists),
            |x, y| x + y,
        );
        assert_eq!(result, failed("step", ResultClass::AlreadyExists));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn select_many_async_matches_sync() {
        let sync = select_many(Outcome::ok(5), |x| Outcome::ok(*x * 2), |x, y| x + y);
        let asynchronous = select_many_async(
            Outcome::ok(5),
            |x| {
                let doubled = *x * 2;
                async move { Outcome::ok(doubled) }
            },
            |x, y| x + y,
        )
        .await;
        assert_eq!(asynchronous, sync);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn select_async_skips_producer_on_failure() {
        let calls = Cell::new(0);
        let source: Outcome<i32> = failed("e", ResultClass::BadRequest);
        let result = select_async(source, |x| {
            calls.set(calls.get() + 1);
            async move { x }
        })
        .await;
        assert_eq!(calls.get(), 0);
        assert_eq!(result, failed("e", ResultClass::BadRequest));
    }
}
