//! Guard-driven classification: picking a tag by first-matching predicate.
//!
//! A guard set is an ordered list of `(tag, predicate)` pairs. Classifying
//! a value evaluates the predicates in insertion order and stops at the
//! first acceptance; guards are not required to be mutually exclusive, and
//! the order is the tie-break. That ordering is part of the contract, not
//! an accident of representation.

use crate::classify::error::BuildError;
use crate::core::outcome::{self, Outcome};
use crate::core::union::{Tag, Tagged};

/// Boxed predicate for one guard.
pub type GuardFn<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// An ordered set of named guards over values of type `T`.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use sumwise::classify::GuardSet;
/// use sumwise::core::Tag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Bucket {
///     Small,
///     Medium,
///     Large,
/// }
///
/// impl Tag for Bucket {
///     const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Small => "Small",
///             Self::Medium => "Medium",
///             Self::Large => "Large",
///         }
///     }
/// }
///
/// let guards = GuardSet::new()
///     .guard(Bucket::Small, |n: &u32| *n < 10)
///     .guard(Bucket::Medium, |n| *n < 100)
///     .guard(Bucket::Large, |_| true);
///
/// let classified = guards.classify(42, "out of range").unwrap();
/// assert!(classified.is(Bucket::Medium));
/// assert_eq!(*classified.value(), 42);
/// ```
pub struct GuardSet<G: Tag, T> {
    guards: Vec<(G, GuardFn<T>)>,
}

impl<G: Tag, T> GuardSet<G, T> {
    /// Create an empty guard set.
    pub fn new() -> Self {
        GuardSet { guards: Vec::new() }
    }

    /// Append a guard. Evaluation order is insertion order.
    pub fn guard<F>(mut self, tag: G, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.guards.push((tag, Box::new(predicate)));
        self
    }

    /// Number of guards in the set.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Whether the set holds no guards.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Tags in evaluation order.
    pub fn tags(&self) -> impl Iterator<Item = G> + '_ {
        self.guards.iter().map(|(tag, _)| *tag)
    }

    /// Classify a value: the first guard that accepts it supplies the tag.
    ///
    /// Evaluation short-circuits at the first acceptance; later predicates
    /// are never run. If every guard rejects the value, the supplied error
    /// is returned unchanged.
    pub fn classify<E>(&self, value: T, error: E) -> Outcome<Tagged<G, T>, E> {
        for (tag, predicate) in &self.guards {
            if predicate(&value) {
                return outcome::ok(Tagged::new(*tag, value));
            }
        }
        outcome::err(error)
    }
}

impl<G: Tag, T> Default for GuardSet<G, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A reusable classifier: a validated guard set paired with a fixed error.
///
/// Use this when the same guard mapping classifies many values; the error
/// is cloned into each failed classification.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use sumwise::classify::{Classifier, GuardSet, Unclassified};
/// use sumwise::core::Tag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// impl Tag for Parity {
///     const ALL: &'static [Self] = &[Self::Even, Self::Odd];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///         }
///     }
/// }
///
/// let classifier = Classifier::new(
///     GuardSet::new()
///         .guard(Parity::Even, |n: &i64| n % 2 == 0)
///         .guard(Parity::Odd, |n| n % 2 != 0),
///     Unclassified,
/// )
/// .unwrap();
///
/// assert!(classifier.classify(4).unwrap().is(Parity::Even));
/// assert!(classifier.classify(7).unwrap().is(Parity::Odd));
/// ```
pub struct Classifier<G: Tag, T, E> {
    guards: GuardSet<G, T>,
    error: E,
}

impl<G: Tag, T, E: Clone> Classifier<G, T, E> {
    /// Build a classifier, validating the guard set.
    ///
    /// Fails when the set is empty or a tag is guarded twice (the second
    /// guard could never win under first-match semantics).
    pub fn new(guards: GuardSet<G, T>, error: E) -> Result<Self, BuildError> {
        crate::classify::validate_tag_order(guards.tags())?;
        Ok(Classifier { guards, error })
    }

    /// Classify a value against the fixed guard set and error.
    pub fn classify(&self, value: T) -> Outcome<Tagged<G, T>, E> {
        self.guards.classify(value, self.error.clone())
    }

    /// The underlying guard set.
    pub fn guards(&self) -> &GuardSet<G, T> {
        &self.guards
    }
}
