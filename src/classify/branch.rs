//! Branch classification: first-match over transforming branches.
//!
//! Where a guard answers yes/no, a branch tries to produce a payload.
//! Classifying runs the branches in insertion order; the first branch that
//! yields `Some` supplies both the output tag and the transformed payload.

use crate::classify::error::BuildError;
use crate::core::maybe::Maybe;
use crate::core::outcome::{self, Outcome};
use crate::core::union::{Tag, Tagged};

/// Boxed transforming branch.
pub type BranchFn<T, U> = Box<dyn Fn(&T) -> Maybe<U> + Send + Sync>;

/// An ordered set of named branches from `T` to `U`.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use sumwise::classify::BranchSet;
/// use sumwise::core::{Maybe, Tag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Parsed {
///     Integer,
///     Flag,
/// }
///
/// impl Tag for Parsed {
///     const ALL: &'static [Self] = &[Self::Integer, Self::Flag];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Integer => "Integer",
///             Self::Flag => "Flag",
///         }
///     }
/// }
///
/// let branches = BranchSet::new()
///     .branch(Parsed::Integer, |s: &String| {
///         Maybe::from(s.parse::<i64>().ok()).map(|n| n.to_string())
///     })
///     .branch(Parsed::Flag, |s| {
///         Maybe::when(s.clone(), |s| s == "on" || s == "off")
///     });
///
/// let hit = branches.classify(&"42".to_string(), "unparseable").unwrap();
/// assert!(hit.is(Parsed::Integer));
/// assert_eq!(hit.value(), "42");
///
/// let miss = branches.classify(&"maybe".to_string(), "unparseable");
/// assert_eq!(miss.unwrap_err(), "unparseable");
/// ```
pub struct BranchSet<G: Tag, T, U> {
    branches: Vec<(G, BranchFn<T, U>)>,
}

impl<G: Tag, T, U> BranchSet<G, T, U> {
    /// Create an empty branch set.
    pub fn new() -> Self {
        BranchSet {
            branches: Vec::new(),
        }
    }

    /// Append a branch. Evaluation order is insertion order.
    pub fn branch<F>(mut self, tag: G, branch: F) -> Self
    where
        F: Fn(&T) -> Maybe<U> + Send + Sync + 'static,
    {
        self.branches.push((tag, Box::new(branch)));
        self
    }

    /// Number of branches in the set.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Whether the set holds no branches.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Tags in evaluation order.
    pub fn tags(&self) -> impl Iterator<Item = G> + '_ {
        self.branches.iter().map(|(tag, _)| *tag)
    }

    /// Classify by first branch to produce a payload.
    ///
    /// Later branches are never run after a hit. If every branch declines,
    /// the supplied error is returned unchanged.
    pub fn classify<E>(&self, value: &T, error: E) -> Outcome<Tagged<G, U>, E> {
        for (tag, branch) in &self.branches {
            if let Maybe::Some(v) = branch(value) {
                return outcome::ok(Tagged::from_variant(*tag, v));
            }
        }
        outcome::err(error)
    }
}

impl<G: Tag, T, U> Default for BranchSet<G, T, U> {
    fn default() -> Self {
        Self::new()
    }
}

/// A reusable branch classifier with a fixed error.
pub struct Brancher<G: Tag, T, U, E> {
    branches: BranchSet<G, T, U>,
    error: E,
}

impl<G: Tag, T, U, E: Clone> Brancher<G, T, U, E> {
    /// Build a brancher, validating the branch set the same way
    /// [`Classifier::new`] validates guards.
    ///
    /// [`Classifier::new`]: crate::classify::Classifier::new
    pub fn new(branches: BranchSet<G, T, U>, error: E) -> Result<Self, BuildError> {
        crate::classify::validate_tag_order(branches.tags())?;
        Ok(Brancher { branches, error })
    }

    /// Classify a value against the fixed branches and error.
    pub fn classify(&self, value: &T) -> Outcome<Tagged<G, U>, E> {
        self.branches.classify(value, self.error.clone())
    }
}
