//! Asynchronous mirror of pure/map/apply/bind
//!
//! Every operation here behaves exactly like its synchronous counterpart in
//! [`outcome`](crate::outcome), except that the producer returns a future
//! which is awaited before the resulting success is built:
//!
//! - a producer is never called on a failure branch;
//! - `apply_async` keeps the function side's failure when both sides failed;
//! - `bind_async` short-circuits on the first failure.
//!
//! Futures are lazy, so nothing runs until the returned future is polled. In
//! a chain of async binds each producer starts only after the previous step
//! has resolved to a success.
//!
//! # Fault channel
//!
//! A producer that fails through its own channel (a `Result` output, or a
//! panic) is not folded into an [`Outcome`] failure. Use
//! [`try_map_async`](Outcome::try_map_async) /
//! [`try_bind_async`](Outcome::try_bind_async): the producer's `Err` comes
//! back as the outer `Err`, and the caller decides how to classify it.

use std::future::{Future, IntoFuture};

use futures::future::{BoxFuture, FutureExt};

use crate::outcome::{Failure, Outcome};

/// Boxed, `Send` future resolving to an outcome.
pub type BoxOutcomeFuture<'a, T> = BoxFuture<'a, Outcome<T>>;

impl<T> Outcome<T> {
    /// Awaits `producer` and wraps its value as a success.
    pub async fn pure_async<P>(producer: P) -> Self
    where
        P: IntoFuture<Output = T>,
    {
        Self::Success(producer.await)
    }

    /// Async counterpart of [`map`](Self::map).
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Async counterpart of [`apply`](Self::apply).
    ///
    /// `function` holds an async function. It runs only when both sides
    /// succeeded; with two failures the function side's failure is returned.
    pub async fn apply_async<U, F, Fut>(self, function: Outcome<F>) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.apply(function) {
            Outcome::Success(pending) => Outcome::Success(pending.await),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Async counterpart of [`bind`](Self::bind).
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(failure) => {
                tracing::trace!(class = %failure.class(), "bind_async: short-circuit on failure");
                Outcome::Failure(failure)
            }
        }
    }

    /// Like [`map_async`](Self::map_async) for a producer with its own fault
    /// channel. The producer's `Err` is returned unchanged.
    pub async fn try_map_async<U, E, F, Fut>(self, f: F) -> Result<Outcome<U>, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Self::Success(value) => f(value).await.map(Outcome::Success),
            Self::Failure(failure) => Ok(Outcome::Failure(failure)),
        }
    }

    /// Like [`bind_async`](Self::bind_async) for a producer with its own fault
    /// channel. The producer's `Err` is returned unchanged.
    pub async fn try_bind_async<U, E, F, Fut>(self, f: F) -> Result<Outcome<U>, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<Outcome<U>, E>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(failure) => Ok(Outcome::Failure(failure)),
        }
    }
}

// ============================================================================
// FUTURE EXTENSIONS
// ============================================================================

/// Composition on futures that resolve to an outcome.
///
/// Lets a chain of async steps read left to right:
///
/// ```rust
/// use nebula_outcome::{Outcome, OutcomeFutureExt};
///
/// # futures::executor::block_on(async {
/// let total = async { Outcome::ok(2) }
///     .map_ok(|n| n + 1)
///     .bind_ok_async(|n| async move { Outcome::ok(n * 10) })
///     .await;
/// assert_eq!(total, Outcome::ok(30));
/// # });
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Maps the success value once the outcome resolves.
    fn map_ok<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Binds a synchronous continuation once the outcome resolves.
    fn bind_ok<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.bind(f) }
    }

    /// Maps with an async producer once the outcome resolves.
    fn map_ok_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Binds an async continuation once the outcome resolves.
    fn bind_ok_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.bind_async(f).await }
    }

    /// Resolves to a std `Result` so the failure can travel through `?`.
    fn into_result(self) -> impl Future<Output = Result<T, Failure>> {
        async move { self.await.into_result() }
    }

    /// Erases the future's type.
    fn boxed_outcome<'a>(self) -> BoxOutcomeFuture<'a, T>
    where
        Self: Send + 'a,
    {
        self.boxed()
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorValue, ResultClass};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn failed<T>(code: &'static str, class: ResultClass) -> Outcome<T> {
        Outcome::with_error(ErrorValue::new(code, "failed"), class)
    }

    #[tokio::test]
    async fn pure_async_awaits_producer() {
        let outcome = Outcome::pure_async(async { 41 + 1 }).await;
        assert_eq!(outcome, Outcome::ok(42));
    }

    #[tokio::test]
    async fn map_async_matches_sync_map() {
        let sync = Outcome::ok(3).map(|x| x * 7);
        let asynchronous = Outcome::ok(3).map_async(|x| async move { x * 7 }).await;
        assert_eq!(asynchronous, sync);
    }

    #[tokio::test]
    async fn producers_never_run_on_failure() {
        let calls = AtomicUsize::new(0);
        let source: Outcome<i32> = failed("e", ResultClass::NotFound);

        let mapped = source
            .clone()
            .map_async(|x| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { x }
            })
            .await;
        let bound = source
            .clone()
            .bind_async(|x| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Outcome::ok(x) }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(mapped, source);
        assert_eq!(bound, source);
    }

    #[tokio::test]
    async fn apply_async_keeps_function_side_on_double_failure() {
        let value: Outcome<i32> = failed("left", ResultClass::EditConflict);
        let function: Outcome<fn(i32) -> std::future::Ready<i32>> =
            failed("right", ResultClass::BadRequest);
        assert_eq!(
            value.apply_async(function).await,
            failed("right", ResultClass::BadRequest)
        );
    }

    #[tokio::test]
    async fn apply_async_runs_function_on_success() {
        let function = Outcome::ok(|x: i32| async move { x + 1 });
        assert_eq!(Outcome::ok(1).apply_async(function).await, Outcome::ok(2));
    }

    #[tokio::test]
    async fn try_map_async_returns_producer_fault_unchanged() {
        let result: Result<Outcome<i32>, &str> = Outcome::ok(1)
            .try_map_async(|_| async { Err("connection reset") })
            .await;
        assert_eq!(result, Err("connection reset"));
    }

    #[tokio::test]
    async fn try_bind_async_skips_producer_on_failure() {
        let calls = AtomicUsize::new(0);
        let source: Outcome<i32> = failed("e", ResultClass::DataConflict);
        let result: Result<Outcome<i32>, &str> = source
            .try_bind_async(|x| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Ok(Outcome::ok(x)) }
            })
            .await;
        assert_eq!(result, Ok(failed("e", ResultClass::DataConflict)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn future_chain_stops_at_first_failure() {
        let calls = AtomicUsize::new(0);
        let result = async { Outcome::ok(1) }
            .bind_ok(|_| failed::<i32>("stop", ResultClass::BadRequest))
            .map_ok_async(|x| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { x + 1 }
            })
            .await;

        assert_eq!(result, failed("stop", ResultClass::BadRequest));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn boxed_outcome_erases_type() {
        let futures: Vec<BoxOutcomeFuture<'_, i32>> = vec![
            async { Outcome::ok(1) }.boxed_outcome(),
            Outcome::ok(2)
                .map_async(|x| async move { x * 2 })
                .boxed_outcome(),
        ];
        let mut values = Vec::new();
        for future in futures {
            values.push(future.await);
        }
        assert_eq!(values, vec![Outcome::ok(1), Outcome::ok(4)]);
    }
}
