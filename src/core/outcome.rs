//! The fallible-result instantiation: `Ok` or `Err`.
//!
//! `Outcome` carries a typed failure as data. The success and error payload
//! types are independent. Failures never propagate by panicking; the
//! `expect`/`unwrap` family is the sole, deliberate panicking surface, for
//! asserting invariants that are programmer errors when broken.

use crate::core::maybe::Maybe;
use crate::core::union::{Tag, TaggedUnion};
use crate::core::variant::Variant;
use serde::{Deserialize, Serialize};

/// The closed tag set of [`Outcome`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OutcomeTag {
    Ok,
    Err,
}

impl Tag for OutcomeTag {
    const ALL: &'static [Self] = &[Self::Ok, Self::Err];

    fn name(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::Err => "Err",
        }
    }
}

/// Success with a value, or failure with a typed error.
///
/// The variants are public, so a native `match` is the exhaustive match.
/// Constructors live at module level to keep the `ok`/`err` method names
/// free for the projections to [`Maybe`].
///
/// # Example
///
/// ```rust
/// use sumwise::core::outcome;
///
/// let doubled = outcome::ok::<i32, String>(5).map(|n| n * 2);
/// assert_eq!(doubled.ok().unwrap_or(0), 10);
///
/// let failed = outcome::err::<i32, _>("bad");
/// assert_eq!(failed.map_or(0, |n| n + 1), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    Ok(Variant<T>),
    Err(Variant<E>),
}

/// Construct the success arm.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(Variant::new(value))
}

/// Construct the failure arm.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(Variant::new(error))
}

/// Curried assertion: a reusable check that turns values into outcomes
/// against a fixed predicate and error.
///
/// # Example
///
/// ```rust
/// use sumwise::core::outcome;
///
/// let non_empty = outcome::require_via(|s: &&str| !s.is_empty(), "empty input");
///
/// assert!(non_empty("hello").is_ok());
/// assert_eq!(non_empty("").unwrap_err(), "empty input");
/// ```
pub fn require_via<T, E, P>(predicate: P, error: E) -> impl Fn(T) -> Outcome<T, E>
where
    P: Fn(&T) -> bool,
    E: Clone,
{
    move |value| Outcome::require(value, &predicate, error.clone())
}

impl<T, E> Outcome<T, E> {
    /// `Ok(value)` if the predicate accepts it, else `Err(error)`.
    pub fn require<P>(value: T, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            ok(value)
        } else {
            err(error)
        }
    }

    /// Convert a [`Maybe`], using the given error for `None`.
    pub fn from_maybe(maybe: Maybe<T>, error: E) -> Self {
        maybe.ok_or(error)
    }

    /// Convert a standard `Option`, using the given error for `None`.
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => ok(value),
            None => err(error),
        }
    }

    /// Whether the active tag is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// `true` only when `Ok` and the predicate accepts the value.
    /// The predicate is not evaluated for `Err`.
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Ok(v) => predicate(v.value()),
            Outcome::Err(_) => false,
        }
    }

    /// Whether the active tag is `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// `true` only when `Err` and the predicate accepts the error.
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(v) => predicate(v.value()),
        }
    }

    /// Project to the success side, discarding any error.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(v) => Maybe::Some(v),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// Project to the failure side, discarding any success value.
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(v) => Maybe::Some(v),
        }
    }

    /// Transform the `Ok` value; `Err` passes through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v.map(f)),
            Outcome::Err(v) => Outcome::Err(v),
        }
    }

    /// Transform the `Err` value; `Ok` passes through untouched.
    pub fn map_err<F, M>(self, f: M) -> Outcome<T, F>
    where
        M: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(v) => Outcome::Err(v.map(f)),
        }
    }

    /// Total transform to a plain value, substituting a default for `Err`.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => f(v.into_inner()),
            Outcome::Err(_) => default,
        }
    }

    /// Total transform: one handler per tag, no panic possible.
    ///
    /// This is the method form of the exhaustive match.
    pub fn map_or_else<U, D, F>(self, err_arm: D, ok_arm: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => ok_arm(v.into_inner()),
            Outcome::Err(v) => err_arm(v.into_inner()),
        }
    }

    /// Observe the `Ok` value for its side effect; the outcome is returned
    /// unchanged.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(v) = &self {
            f(v.value());
        }
        self
    }

    /// Observe the `Err` value for its side effect; the outcome is returned
    /// unchanged.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(v) = &self {
            f(v.value());
        }
        self
    }

    /// Monadic bind on the success side: `f` runs only when `Ok`.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(v) => f(v.into_inner()),
            Outcome::Err(v) => Outcome::Err(v),
        }
    }

    /// Bridge to the standard library's result type.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(v) => Ok(v.into_inner()),
            Outcome::Err(v) => Err(v.into_inner()),
        }
    }
}

impl<T, E: std::fmt::Debug> Outcome<T, E> {
    /// Return the `Ok` value, or panic with the given message on `Err`.
    ///
    /// Panicking here means the caller asserted an invariant that did not
    /// hold; recoverable failure stays in the `Err` arm instead.
    pub fn expect(self, message: &str) -> T {
        match self {
            Outcome::Ok(v) => v.into_inner(),
            Outcome::Err(v) => panic!("{}: {:?}", message, v.value()),
        }
    }

    /// Return the `Ok` value, or panic with a default message on `Err`.
    pub fn unwrap(self) -> T {
        self.expect("called `Outcome::unwrap()` on an `Err` value")
    }
}

impl<T: std::fmt::Debug, E> Outcome<T, E> {
    /// Return the `Err` value, or panic with the given message on `Ok`.
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Outcome::Ok(v) => panic!("{}: {:?}", message, v.value()),
            Outcome::Err(v) => v.into_inner(),
        }
    }

    /// Return the `Err` value, or panic with a default message on `Ok`.
    pub fn unwrap_err(self) -> E {
        self.expect_err("called `Outcome::unwrap_err()` on an `Ok` value")
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ok(value),
            Err(error) => err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> TaggedUnion for Outcome<T, E> {
    type Tag = OutcomeTag;

    fn tag(&self) -> OutcomeTag {
        match self {
            Outcome::Ok(_) => OutcomeTag::Ok,
            Outcome::Err(_) => OutcomeTag::Err,
        }
    }
}
