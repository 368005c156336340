//! Immutable payload holders for tagged-union arms.
//!
//! A `Variant` is the atomic unit every union arm owns: a single value,
//! fixed at construction. Unions never hand out mutable access to it.

use crate::core::union::TaggedUnion;
use serde::{Deserialize, Serialize};

/// Immutable holder for the payload of one union arm.
///
/// A variant has no identity beyond its value; equality is structural.
/// Once constructed it is never mutated - producing a "different" payload
/// means constructing a new `Variant`.
///
/// # Example
///
/// ```rust
/// use sumwise::core::Variant;
///
/// let v = Variant::new(42);
/// assert_eq!(*v.value(), 42);
/// assert_eq!(v.map(|n| n * 2).into_inner(), 84);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variant<T>(T);

/// Sentinel variant for arms that carry no meaningful payload.
pub type UnitVariant = Variant<()>;

impl<T> Variant<T> {
    /// Wrap a value in a variant.
    pub fn new(value: T) -> Self {
        Variant(value)
    }

    /// Borrow the held value.
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Consume the variant, returning the held value.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Transform the held value, producing a new variant.
    pub fn map<U, F>(self, f: F) -> Variant<U>
    where
        F: FnOnce(T) -> U,
    {
        Variant(f(self.0))
    }

    /// Return the held value if the predicate accepts it, else the fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumwise::core::Variant;
    ///
    /// assert_eq!(Variant::new(10).filter_or(|n| *n > 5, 0), 10);
    /// assert_eq!(Variant::new(3).filter_or(|n| *n > 5, 0), 0);
    /// ```
    pub fn filter_or<F>(self, predicate: F, fallback: T) -> T
    where
        F: FnOnce(&T) -> bool,
    {
        if predicate(&self.0) {
            self.0
        } else {
            fallback
        }
    }

    /// Lift this variant into a tagged union via the given constructor.
    pub fn to_union<U, F>(self, f: F) -> U
    where
        U: TaggedUnion,
        F: FnOnce(Self) -> U,
    {
        f(self)
    }

    /// Lift into a tagged union, substituting the fallback value first
    /// when the predicate rejects the held one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumwise::core::{Maybe, Variant};
    ///
    /// let m = Variant::new(-4).filter_to_union(|n| *n >= 0, 0, Maybe::some);
    /// assert_eq!(m.unwrap(), 0);
    /// ```
    pub fn filter_to_union<U, P, F>(self, predicate: P, fallback: T, f: F) -> U
    where
        U: TaggedUnion,
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> U,
    {
        f(self.filter_or(predicate, fallback))
    }
}

impl Variant<()> {
    /// The sentinel variant carrying no data.
    pub fn unit() -> Self {
        Variant(())
    }
}

impl<T> From<T> for Variant<T> {
    fn from(value: T) -> Self {
        Variant(value)
    }
}
