//! Context-aware classification.
//!
//! Same first-match-wins algorithm as plain guard classification, but every
//! predicate also sees a fixed external context, and the classified union
//! carries that context for downstream context-aware matching.

use crate::classify::error::BuildError;
use crate::core::maybe::Maybe;
use crate::core::outcome::{self, Outcome};
use crate::core::union::{Tag, Tagged, TaggedUnion};

/// Boxed context-aware predicate for one guard.
pub type CtxGuardFn<T, C> = Box<dyn Fn(&T, &C) -> bool + Send + Sync>;

/// An ordered set of named context-aware guards.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use sumwise::classify::CtxGuardSet;
/// use sumwise::core::Tag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Access {
///     Granted,
///     Denied,
/// }
///
/// impl Tag for Access {
///     const ALL: &'static [Self] = &[Self::Granted, Self::Denied];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Granted => "Granted",
///             Self::Denied => "Denied",
///         }
///     }
/// }
///
/// // Context: the clearance level required for the resource.
/// let guards = CtxGuardSet::new()
///     .guard(Access::Granted, |level: &u8, required: &u8| level >= required)
///     .guard(Access::Denied, |_, _| true);
///
/// let decision = guards.classify(3u8, 5u8, "no guard matched").unwrap();
/// assert!(decision.is(Access::Denied));
/// assert_eq!(*decision.ctx(), 5);
/// ```
pub struct CtxGuardSet<G: Tag, T, C> {
    guards: Vec<(G, CtxGuardFn<T, C>)>,
}

impl<G: Tag, T, C> CtxGuardSet<G, T, C> {
    /// Create an empty guard set.
    pub fn new() -> Self {
        CtxGuardSet { guards: Vec::new() }
    }

    /// Append a guard. Evaluation order is insertion order.
    pub fn guard<F>(mut self, tag: G, predicate: F) -> Self
    where
        F: Fn(&T, &C) -> bool + Send + Sync + 'static,
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

    /// Classify a value, passing the context to every predicate.
    ///
    /// First acceptance wins and stops evaluation. The resulting union
    /// keeps the context alongside the pair.
    pub fn classify<E>(&self, value: T, ctx: C, error: E) -> Outcome<CtxTagged<G, T, C>, E> {
        for (tag, predicate) in &self.guards {
            if predicate(&value, &ctx) {
                return outcome::ok(CtxTagged::new(*tag, value, ctx));
            }
        }
        outcome::err(error)
    }
}

impl<G: Tag, T, C> Default for CtxGuardSet<G, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A classified union that carries the context it was classified under.
///
/// Matching operations hand both the payload and the context to handlers,
/// so downstream consumers need no side channel for the context value.
#[derive(Clone, Debug, PartialEq)]
pub struct CtxTagged<G: Tag, V, C> {
    inner: Tagged<G, V>,
    ctx: C,
}

impl<G: Tag, V, C> CtxTagged<G, V, C> {
    /// Construct with the given active tag, payload and context.
    pub fn new(tag: G, value: V, ctx: C) -> Self {
        CtxTagged {
            inner: Tagged::new(tag, value),
            ctx,
        }
    }

    /// The active tag.
    pub fn tag(&self) -> G {
        self.inner.tag()
    }

    /// Borrow the held payload.
    pub fn value(&self) -> &V {
        self.inner.value()
    }

    /// Borrow the carried context.
    pub fn ctx(&self) -> &C {
        &self.ctx
    }

    /// The context-free view of this union.
    pub fn inner(&self) -> &Tagged<G, V> {
        &self.inner
    }

    /// Decompose into the context-free union and the context.
    pub fn into_parts(self) -> (Tagged<G, V>, C) {
        (self.inner, self.ctx)
    }

    /// Whether the active tag equals the given one.
    pub fn is(&self, tag: G) -> bool {
        self.inner.is(tag)
    }

    /// Whether the tag matches and the context-aware predicate accepts the
    /// payload. The predicate is not evaluated on tag mismatch.
    pub fn is_and<P>(&self, tag: G, predicate: P) -> bool
    where
        P: FnOnce(&V, &C) -> bool,
    {
        self.inner.is(tag) && predicate(self.inner.value(), &self.ctx)
    }

    /// The payload as `Some` if the active tag matches, else `None`.
    pub fn is_maybe(&self, tag: G) -> Maybe<&V> {
        self.inner.is_maybe(tag)
    }

    /// Run `if_arm` with payload and context when the tag matches, else
    /// `else_arm` with the context alone.
    pub fn if_let<U, F, E>(&self, tag: G, if_arm: F, else_arm: E) -> U
    where
        F: FnOnce(&V, &C) -> U,
        E: FnOnce(&C) -> U,
    {
        if self.inner.is(tag) {
            if_arm(self.inner.value(), &self.ctx)
        } else {
            else_arm(&self.ctx)
        }
    }

    /// Exhaustive match with the context in scope: the handler receives
    /// tag, payload and context together.
    pub fn match_with<U, F>(&self, arms: F) -> U
    where
        F: FnOnce(G, &V, &C) -> U,
    {
        arms(self.inner.tag(), self.inner.value(), &self.ctx)
    }
}

impl<G: Tag, V, C> TaggedUnion for CtxTagged<G, V, C> {
    type Tag = G;

    fn tag(&self) -> G {
        self.inner.tag()
    }
}

/// A reusable context classifier: validated guards plus a fixed context
/// and error.
pub struct CtxClassifier<G: Tag, T, C, E> {
    guards: CtxGuardSet<G, T, C>,
    ctx: C,
    error: E,
}

impl<G: Tag, T, C: Clone, E: Clone> CtxClassifier<G, T, C, E> {
    /// Build a classifier, validating the guard set.
    pub fn new(guards: CtxGuardSet<G, T, C>, ctx: C, error: E) -> Result<Self, BuildError> {
        crate::classify::validate_tag_order(guards.tags())?;
        Ok(CtxClassifier { guards, ctx, error })
    }

    /// Classify a value against the fixed guards, context and error.
    pub fn classify(&self, value: T) -> Outcome<CtxTagged<G, T, C>, E> {
        self.guards
            .classify(value, self.ctx.clone(), self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::error::Unclassified;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Band {
        Below,
        Within,
        Above,
    }

    impl Tag for Band {
        const ALL: &'static [Self] = &[Self::Below, Self::Within, Self::Above];

        fn name(&self) -> &'static str {
            match self {
                Self::Below => "Below",
                Self::Within => "Within",
                Self::Above => "Above",
            }
        }
    }

    // Context: an inclusive (low, high) band.
    fn band_guards() -> CtxGuardSet<Band, i32, (i32, i32)> {
        CtxGuardSet::new()
            .guard(Band::Below, |n, (low, _): &(i32, i32)| n < low)
            .guard(Band::Above, |n, (_, high): &(i32, i32)| n > high)
            .guard(Band::Within, |_, _| true)
    }

    #[test]
    fn predicates_see_the_context() {
        let guards = band_guards();

        assert!(guards.classify(1, (5, 10), Unclassified).unwrap().is(Band::Below));
        assert!(guards.classify(7, (5, 10), Unclassified).unwrap().is(Band::Within));
        assert!(guards.classify(99, (5, 10), Unclassified).unwrap().is(Band::Above));
    }

    #[test]
    fn classified_union_carries_the_context() {
        let decision = band_guards().classify(7, (5, 10), Unclassified).unwrap();

        assert_eq!(*decision.ctx(), (5, 10));
        assert_eq!(*decision.value(), 7);
    }

    #[test]
    fn exhaustion_returns_the_error() {
        let guards: CtxGuardSet<Band, i32, ()> =
            CtxGuardSet::new().guard(Band::Within, |_, _| false);

        assert_eq!(guards.classify(1, (), "none").unwrap_err(), "none");
    }

    #[test]
    fn if_let_hands_context_to_both_branches() {
        let decision = band_guards().classify(99, (5, 10), Unclassified).unwrap();

        let msg = decision.if_let(
            Band::Above,
            |n, (_, high)| format!("{n} exceeds {high}"),
            |(low, _)| format!("at or above {low}"),
        );
        assert_eq!(msg, "99 exceeds 10");
    }

    #[test]
    fn match_with_sees_tag_payload_and_context() {
        let decision = band_guards().classify(1, (5, 10), Unclassified).unwrap();

        let distance = decision.match_with(|tag, n, (low, high)| match tag {
            Band::Below => low - n,
            Band::Within => 0,
            Band::Above => n - high,
        });
        assert_eq!(distance, 4);
    }

    #[test]
    fn is_and_uses_the_context_and_short_circuits() {
        let decision = band_guards().classify(7, (5, 10), Unclassified).unwrap();

        assert!(decision.is_and(Band::Within, |n, (low, _)| n - low == 2));
        assert!(!decision.is_and(Band::Above, |_, _| panic!("must not run")));
    }

    #[test]
    fn ctx_classifier_fixes_context_and_error() {
        let classifier =
            CtxClassifier::new(band_guards(), (0, 100), Unclassified).unwrap();

        assert!(classifier.classify(50).unwrap().is(Band::Within));
        assert!(classifier.classify(101).unwrap().is(Band::Above));
    }

    #[test]
    fn ctx_classifier_rejects_empty_guards() {
        let built = CtxClassifier::new(CtxGuardSet::<Band, i32, ()>::new(), (), Unclassified);
        assert_eq!(built.err(), Some(BuildError::NoGuards));
    }
}
