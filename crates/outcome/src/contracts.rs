//! Composition contracts: map, apply, bind
//!
//! Three independent capabilities over a single-slot container. Each is
//! law-governed; any type implementing them can be driven by the
//! [comprehension adapter](crate::comprehension).
//!
//! Rust has no higher-kinded types, so [`Container::Rebind`] names "the same
//! container over another value type". For [`Outcome<T>`], `Rebind<U>` is
//! `Outcome<U>`.
//!
//! # Laws
//!
//! For any conforming `m`:
//!
//! - functor identity: `m.map(|x| x) == m`
//! - functor composition: `m.map(|x| g(f(x))) == m.map(f).map(g)`
//! - applicative identity: `pure(a).apply(pure(f)) == pure(f(a))`
//! - left identity: `pure(a).bind(f) == f(a)`
//! - associativity: `m.bind(|x| f(x).bind(g)) == m.bind(f).bind(g)`

use crate::outcome::Outcome;

/// A container holding at most one value of type [`Value`](Container::Value).
pub trait Container {
    /// The contained value type.
    type Value;

    /// The same container shape over `U`.
    type Rebind<U>: Container<Value = U>;
}

/// Transform the contained value.
pub trait Functor: Container {
    /// Applies `f` to the contained value, if any.
    fn map<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> U;
}

/// Combine a contained value with a contained function.
pub trait Applicative: Container {
    /// Lifts a plain value into the container.
    fn pure(value: Self::Value) -> Self;

    /// Applies the function held by `function` to the value held by `self`.
    fn apply<U, F>(self, function: Self::Rebind<F>) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> U;
}

/// Chain a dependent computation.
pub trait Monad: Container {
    /// Feeds the contained value to `f` and returns its container unwrapped.
    fn bind<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> Self::Rebind<U>;
}

// ============================================================================
// OUTCOME
// ============================================================================

impl<T> Container for Outcome<T> {
    type Value = T;
    type Rebind<U> = Outcome<U>;
}

impl<T> Functor for Outcome<T> {
    #[inline]
    fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome::map(self, f)
    }
}

impl<T> Applicative for Outcome<T> {
    #[inline]
    fn pure(value: T) -> Self {
        Outcome::pure(value)
    }

    #[inline]
    fn apply<U, F>(self, function: Outcome<F>) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome::apply(self, function)
    }
}

impl<T> Monad for Outcome<T> {
    #[inline]
    fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        Outcome::bind(self, f)
    }
}

// ============================================================================
// CHAINING HELPERS
// ============================================================================

/// Runs `next` after `first` succeeds, discarding `first`'s value.
///
/// `next` is built lazily, so nothing is constructed once `first` fails.
pub fn then<M, U, N>(first: M, next: N) -> M::Rebind<U>
where
    M: Monad,
    N: FnOnce() -> M::Rebind<U>,
{
    first.bind(move |_| next())
}

/// Left-to-right composition of two outcome-producing steps.
///
/// ```rust
/// use nebula_outcome::contracts::compose;
/// use nebula_outcome::{ErrorValue, Outcome, ResultClass};
///
/// let parse = |raw: &str| match raw.parse::<i32>() {
///     Ok(n) => Outcome::ok(n),
///     Err(_) => Outcome::with_error(ErrorValue::new("nan", "not a number"), ResultClass::BadRequest),
/// };
/// let halve = |n: i32| Outcome::ok_if(n % 2 == 0, || n / 2, [], ResultClass::BadRequest);
///
/// let parse_and_halve = compose(parse, halve);
/// assert_eq!(parse_and_halve("8"), Outcome::ok(4));
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Outcome<C>
where
    F: Fn(A) -> Outcome<B>,
    G: Fn(B) -> Outcome<C>,
{
    move |input| f(input).bind(&g)
}

/// Lifts a two-argument function over two outcomes using `apply`.
///
/// `b` becomes the function container, so when both `a` and `b` fail, `b`'s
/// failure surfaces and `a`'s errors are dropped.
pub fn lift2<A, B, R, F>(f: F, a: Outcome<A>, b: Outcome<B>) -> Outcome<R>
where
    F: FnOnce(A, B) -> R,
{
    a.apply(b.map(move |y| move |x| f(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorValue, ResultClass};
    use pretty_assertions::assert_eq;

    fn failed<T>(code: &'static str, class: ResultClass) -> Outcome<T> {
        Outcome::with_error(ErrorValue::new(code, "failed"), class)
    }

    fn double_generic<M>(m: M) -> M::Rebind<i32>
    where
        M: Functor<Value = i32>,
    {
        m.map(|x| x * 2)
    }

    #[test]
    fn generic_code_drives_outcome_through_contracts() {
        assert_eq!(double_generic(Outcome::ok(21)), Outcome::ok(42));
        assert_eq!(
            double_generic(failed::<i32>("e", ResultClass::NotFound)),
            failed("e", ResultClass::NotFound)
        );
    }

    #[test]
    fn then_does_not_build_next_after_failure() {
        let first: Outcome<()> = failed("first", ResultClass::BadRequest);
        let result: Outcome<i32> = then(first, || panic!("next must not be built"));
        assert_eq!(result, failed("first", ResultClass::BadRequest));
    }

    #[test]
    fn then_returns_next_after_success() {
        let result = then(Outcome::ok("ignored"), || Outcome::ok(9));
        assert_eq!(result, Outcome::ok(9));
    }

    #[test]
    fn compose_short_circuits_second_step() {
        let first = |x: i32| -> Outcome<i32> {
            Outcome::ok_if(x > 0, || x, [], ResultClass::BadRequest)
        };
        let second = |_: i32| -> Outcome<i32> { panic!("second step must not run") };
        let pipeline = compose(first, second);
        assert_eq!(pipeline(-1).class(), ResultClass::BadRequest);
    }

    #[test]
    fn lift2_combines_successes() {
        assert_eq!(
            lift2(|a: i32, b: i32| a + b, Outcome::ok(2), Outcome::ok(3)),
            Outcome::ok(5)
        );
    }

    #[test]
    fn lift2_keeps_second_failure_when_both_fail() {
        let result = lift2(
            |a: i32, b: i32| a + b,
            failed("a", ResultClass::EditConflict),
            failed("b", ResultClass::NotFound),
        );
        assert_eq!(result, failed("b", ResultClass::NotFound));
    }
}
