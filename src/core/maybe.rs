//! The optional-value instantiation: `Some` or `None`.
//!
//! `Maybe` is a two-tag union representing presence or absence. Absence is
//! data, not an error: every combinator except the `expect`/`unwrap` family
//! is total and never panics.

use crate::core::outcome::Outcome;
use crate::core::union::{Tag, TaggedUnion};
use crate::core::variant::Variant;
use serde::{Deserialize, Serialize};

/// The closed tag set of [`Maybe`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MaybeTag {
    Some,
    None,
}

impl Tag for MaybeTag {
    const ALL: &'static [Self] = &[Self::Some, Self::None];

    fn name(&self) -> &'static str {
        match self {
            Self::Some => "Some",
            Self::None => "None",
        }
    }
}

/// An optional value: either `Some` with a payload, or `None` with nothing.
///
/// The variants are public, so a native `match` over a `Maybe` is the
/// exhaustive match operation - the compiler rejects a partial arm set.
///
/// # Example
///
/// ```rust
/// use sumwise::core::Maybe;
///
/// let present = Maybe::some(5);
/// assert_eq!(present.map(|n| n * 2).unwrap(), 10);
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.unwrap_or(7), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    Some(Variant<T>),
    None,
}

impl<T> Maybe<T> {
    /// Construct the present arm.
    pub fn some(value: T) -> Self {
        Maybe::Some(Variant::new(value))
    }

    /// Construct the absent arm.
    pub fn none() -> Self {
        Maybe::None
    }

    /// `Some(value)` if the predicate accepts it, else `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumwise::core::Maybe;
    ///
    /// assert!(Maybe::when(12, |n| *n > 10).is_some());
    /// assert!(Maybe::when(3, |n: &i32| *n > 10).is_none());
    /// ```
    pub fn when<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Maybe::some(value)
        } else {
            Maybe::None
        }
    }

    /// Whether the active tag is `Some`.
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Whether the active tag is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// `true` only when present and the predicate accepts the payload.
    /// The predicate is not evaluated for `None`.
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(v) => predicate(v.value()),
            Maybe::None => false,
        }
    }

    /// Return the payload, or panic with the given message on `None`.
    ///
    /// This is the deliberate escape hatch for the case where absence is a
    /// programmer error rather than a data condition. It is the only part
    /// of the surface that panics.
    pub fn expect(self, message: &str) -> T {
        match self {
            Maybe::Some(v) => v.into_inner(),
            Maybe::None => panic!("{}", message),
        }
    }

    /// Return the payload, or panic with a default message on `None`.
    pub fn unwrap(self) -> T {
        self.expect("called `Maybe::unwrap()` on a `None` value")
    }

    /// Return the payload, or the given default on `None`. Never panics.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(v) => v.into_inner(),
            Maybe::None => default,
        }
    }

    /// Return the payload, or compute a default on `None`. Never panics.
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(v) => v.into_inner(),
            Maybe::None => default(),
        }
    }

    /// Transform the `Some` payload; `None` propagates unchanged.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => Maybe::Some(v.map(f)),
            Maybe::None => Maybe::None,
        }
    }

    /// Total transform: one handler per tag, no panic possible.
    ///
    /// This is the method form of the exhaustive match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumwise::core::Maybe;
    ///
    /// let label = Maybe::some(3).map_or_else(|| "nothing".into(), |n| format!("got {n}"));
    /// assert_eq!(label, "got 3");
    /// ```
    pub fn map_or_else<U, D, F>(self, none_arm: D, some_arm: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => some_arm(v.into_inner()),
            Maybe::None => none_arm(),
        }
    }

    /// Convert to [`Outcome`], using the given error for `None`.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(v) => Outcome::Ok(v),
            Maybe::None => Outcome::Err(Variant::new(error)),
        }
    }

    /// Convert to [`Outcome`], computing the error only on `None`.
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(v) => Outcome::Ok(v),
            Maybe::None => Outcome::Err(Variant::new(error())),
        }
    }

    /// Return `other` if self is `Some`, else propagate `None`.
    ///
    /// `other` is eagerly evaluated at the call site; use [`Maybe::and_then`]
    /// when the alternative is costly to build.
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(_) => other,
            Maybe::None => Maybe::None,
        }
    }

    /// Monadic bind: `f` runs only when self is `Some`.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(v) => f(v.into_inner()),
            Maybe::None => Maybe::None,
        }
    }

    /// Keep `Some` only when the predicate accepts the payload.
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(v) => {
                if predicate(v.value()) {
                    Maybe::Some(v)
                } else {
                    Maybe::None
                }
            }
            Maybe::None => Maybe::None,
        }
    }

    /// Borrowing view: `Maybe<&T>` over the same arm.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(v) => Maybe::some(v.value()),
            Maybe::None => Maybe::None,
        }
    }

    /// Bridge to the standard library's optional type.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(v) => Some(v.into_inner()),
            Maybe::None => None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> TaggedUnion for Maybe<T> {
    type Tag = MaybeTag;

    fn tag(&self) -> MaybeTag {
        match self {
            Maybe::Some(_) => MaybeTag::Some,
            Maybe::None => MaybeTag::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn some_round_trips_payload() {
        assert_eq!(Maybe::some(41).unwrap(), 41);
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on a `None` value")]
    fn unwrap_on_none_panics() {
        Maybe::<i32>::none().unwrap();
    }

    #[test]
    #[should_panic(expected = "missing configuration")]
    fn expect_carries_caller_message() {
        Maybe::<i32>::none().expect("missing configuration");
    }

    #[test]
    fn unwrap_or_substitutes_on_none() {
        assert_eq!(Maybe::<i32>::none().unwrap_or(7), 7);
        assert_eq!(Maybe::some(1).unwrap_or(7), 1);
    }

    #[test]
    fn unwrap_or_else_computes_only_on_none() {
        let called = Cell::new(false);

        let out = Maybe::some(1).unwrap_or_else(|| {
            called.set(true);
            9
        });

        assert_eq!(out, 1);
        assert!(!called.get());
    }

    #[test]
    fn map_transforms_some_and_skips_none() {
        assert_eq!(Maybe::some(5).map(|n| n * 2).unwrap(), 10);
        assert!(Maybe::<i32>::none().map(|n| n * 2).is_none());
    }

    #[test]
    fn map_or_else_invokes_exactly_one_arm() {
        let some_calls = Cell::new(0u32);
        let none_calls = Cell::new(0u32);

        Maybe::some(1).map_or_else(
            || none_calls.set(none_calls.get() + 1),
            |_| some_calls.set(some_calls.get() + 1),
        );

        assert_eq!((some_calls.get(), none_calls.get()), (1, 0));
    }

    #[test]
    fn ok_or_converts_both_arms() {
        assert_eq!(Maybe::some(5).ok_or("gone").unwrap(), 5);
        assert_eq!(Maybe::<i32>::none().ok_or("gone").unwrap_err(), "gone");
    }

    #[test]
    fn ok_or_else_computes_error_lazily() {
        let called = Cell::new(false);

        let out = Maybe::some(5).ok_or_else(|| {
            called.set(true);
            "gone"
        });

        assert!(out.is_ok());
        assert!(!called.get());
    }

    #[test]
    fn and_propagates_none() {
        assert_eq!(Maybe::some(1).and(Maybe::some("x")).unwrap(), "x");
        assert!(Maybe::<i32>::none().and(Maybe::some("x")).is_none());
    }

    #[test]
    fn and_then_is_left_identity() {
        let f = |n: i32| Maybe::some(n + 1);

        assert_eq!(Maybe::some(4).and_then(f), f(4));
        assert_eq!(Maybe::<i32>::none().and_then(f), Maybe::none());
    }

    #[test]
    fn and_then_never_runs_on_none() {
        let called = Cell::new(false);

        let out = Maybe::<i32>::none().and_then(|n| {
            called.set(true);
            Maybe::some(n)
        });

        assert!(out.is_none());
        assert!(!called.get());
    }

    #[test]
    fn filter_drops_rejected_payloads() {
        assert_eq!(Maybe::some(4).filter(|n| n % 2 == 0).unwrap(), 4);
        assert!(Maybe::some(3).filter(|n| n % 2 == 0).is_none());
        assert!(Maybe::<i32>::none().filter(|_| true).is_none());
    }

    #[test]
    fn is_some_and_short_circuits() {
        let evaluated = Cell::new(false);

        let hit = Maybe::<i32>::none().is_some_and(|_| {
            evaluated.set(true);
            true
        });

        assert!(!hit);
        assert!(!evaluated.get());
        assert!(Maybe::some(2).is_some_and(|n| *n == 2));
    }

    #[test]
    fn when_applies_the_predicate() {
        assert!(Maybe::when("value", |s| !s.is_empty()).is_some());
        assert!(Maybe::when("", |s: &&str| !s.is_empty()).is_none());
    }

    #[test]
    fn tag_reflects_the_active_arm() {
        assert!(Maybe::some(1).is(MaybeTag::Some));
        assert!(!Maybe::some(1).is(MaybeTag::None));
        assert!(Maybe::<i32>::none().is(MaybeTag::None));
    }

    #[test]
    fn option_bridge_round_trips() {
        assert_eq!(Maybe::from(Some(3)).unwrap(), 3);
        assert_eq!(Maybe::some(3).into_option(), Some(3));
        assert_eq!(Maybe::<i32>::from(None).into_option(), None);
    }

    #[test]
    fn maybe_serializes_round_trip() {
        let m = Maybe::some(11);
        let json = serde_json::to_string(&m).unwrap();
        let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
