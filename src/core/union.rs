//! The tagged-union base: closed tag sets, tag inspection, and the
//! homogeneous discriminated pair.
//!
//! Heterogeneous unions in this crate ([`Maybe`], [`Outcome`], `Duo`) are
//! native Rust enums, so the exhaustive match is the language's own `match`
//! construct. [`Tagged`] covers the remaining case: a union whose tag is
//! only known at runtime (guard classification) but whose payload type is
//! uniform across arms.
//!
//! [`Outcome`]: crate::core::Outcome

use crate::core::maybe::Maybe;
use crate::core::variant::Variant;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A closed set of tags for a tagged union.
///
/// Implement this on a fieldless `Copy` enum. The set is closed: every tag
/// the union can ever carry appears in [`Tag::ALL`], and nothing else does.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use sumwise::core::Tag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Temperature {
///     Cold,
///     Warm,
///     Hot,
/// }
///
/// impl Tag for Temperature {
///     const ALL: &'static [Self] = &[Self::Cold, Self::Warm, Self::Hot];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Cold => "Cold",
///             Self::Warm => "Warm",
///             Self::Hot => "Hot",
///         }
///     }
/// }
///
/// assert_eq!(Temperature::ALL.len(), 3);
/// assert_eq!(Temperature::Warm.name(), "Warm");
/// ```
pub trait Tag:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every tag in the set, in declaration order.
    const ALL: &'static [Self];

    /// The tag's name for display and diagnostics.
    fn name(&self) -> &'static str;
}

/// A value that is exactly one of a closed set of named alternatives.
///
/// Exactly one tag is active for the whole lifetime of the union; there is
/// no "no arm" or "several arms" state, and the active arm never changes
/// in place.
pub trait TaggedUnion {
    /// The union's closed tag set.
    type Tag: Tag;

    /// The active tag.
    fn tag(&self) -> Self::Tag;

    /// Whether the active tag equals the given one. Pure predicate.
    fn is(&self, tag: Self::Tag) -> bool {
        self.tag() == tag
    }

    /// Name of the active tag.
    fn tag_name(&self) -> &'static str {
        self.tag().name()
    }
}

/// A discriminated pair: one active tag plus the payload for that arm.
///
/// `Tagged` is the runtime representation of "which arm, and what value"
/// for unions whose arms all hold the same payload type, such as the output
/// of guard classification. The pairing is established at construction and
/// immutable afterwards.
///
/// The statically exhaustive match is [`Tagged::match_with`]: the handler
/// receives the tag and payload together, and a native `match` on the tag
/// inside the closure gets compile-time exhaustiveness checking.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use sumwise::core::{Tag, Tagged};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Sign {
///     Negative,
///     Zero,
///     Positive,
/// }
///
/// impl Tag for Sign {
///     const ALL: &'static [Self] = &[Self::Negative, Self::Zero, Self::Positive];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Negative => "Negative",
///             Self::Zero => "Zero",
///             Self::Positive => "Positive",
///         }
///     }
/// }
///
/// let union = Tagged::new(Sign::Positive, 17);
///
/// assert!(union.is(Sign::Positive));
/// assert!(!union.is(Sign::Zero));
///
/// let description = union.match_with(|tag, n| match tag {
///     Sign::Negative => format!("{n} is below zero"),
///     Sign::Zero => "zero".to_string(),
///     Sign::Positive => format!("{n} is above zero"),
/// });
/// assert_eq!(description, "17 is above zero");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de>"
))]
pub struct Tagged<G: Tag, V> {
    tag: G,
    variant: Variant<V>,
}

impl<G: Tag, V> Tagged<G, V> {
    /// Construct a union with the given active tag and payload.
    pub fn new(tag: G, value: V) -> Self {
        Tagged {
            tag,
            variant: Variant::new(value),
        }
    }

    /// Construct from an already-wrapped variant.
    pub fn from_variant(tag: G, variant: Variant<V>) -> Self {
        Tagged { tag, variant }
    }

    /// The active tag.
    pub fn tag(&self) -> G {
        self.tag
    }

    /// Borrow the payload's variant wrapper.
    pub fn variant(&self) -> &Variant<V> {
        &self.variant
    }

    /// Borrow the held payload.
    pub fn value(&self) -> &V {
        self.variant.value()
    }

    /// Decompose into the raw discriminated pair.
    pub fn into_pair(self) -> (G, Variant<V>) {
        (self.tag, self.variant)
    }

    /// Consume the union, returning the payload and discarding the tag.
    pub fn into_value(self) -> V {
        self.variant.into_inner()
    }

    /// Whether the active tag equals the given one.
    pub fn is(&self, tag: G) -> bool {
        self.tag == tag
    }

    /// Whether the active tag matches and the predicate accepts the payload.
    ///
    /// The predicate is not evaluated when the tag does not match.
    pub fn is_and<P>(&self, tag: G, predicate: P) -> bool
    where
        P: FnOnce(&V) -> bool,
    {
        self.tag == tag && predicate(self.variant.value())
    }

    /// The payload as `Some` if the active tag matches, else `None`.
    /// Never panics.
    pub fn is_maybe(&self, tag: G) -> Maybe<&V> {
        if self.tag == tag {
            Maybe::some(self.variant.value())
        } else {
            Maybe::none()
        }
    }

    /// The payload as `Some` only when the tag matches and the predicate
    /// accepts it.
    pub fn is_and_maybe<P>(&self, tag: G, predicate: P) -> Maybe<&V>
    where
        P: FnOnce(&V) -> bool,
    {
        if self.tag == tag && predicate(self.variant.value()) {
            Maybe::some(self.variant.value())
        } else {
            Maybe::none()
        }
    }

    /// Run `if_arm` on the payload when the tag matches, else `else_arm`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde::{Deserialize, Serialize};
    /// use sumwise::core::{Tag, Tagged};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    /// enum Side {
    ///     Left,
    ///     Right,
    /// }
    ///
    /// impl Tag for Side {
    ///     const ALL: &'static [Self] = &[Self::Left, Self::Right];
    ///
    ///     fn name(&self) -> &'static str {
    ///         match self {
    ///             Self::Left => "Left",
    ///             Self::Right => "Right",
    ///         }
    ///     }
    /// }
    ///
    /// let union = Tagged::new(Side::Left, "payload");
    /// let seen = union.if_let(Side::Left, |s| s.len(), || 0);
    /// assert_eq!(seen, 7);
    /// ```
    pub fn if_let<U, F, E>(&self, tag: G, if_arm: F, else_arm: E) -> U
    where
        F: FnOnce(&V) -> U,
        E: FnOnce() -> U,
    {
        if self.tag == tag {
            if_arm(self.variant.value())
        } else {
            else_arm()
        }
    }

    /// Exhaustive match: hand the tag and payload to a single handler.
    ///
    /// A native `match` on the tag inside the handler is checked for
    /// exhaustiveness by the compiler, so no arm can be forgotten and no
    /// default fallback exists.
    pub fn match_with<U, F>(&self, arms: F) -> U
    where
        F: FnOnce(G, &V) -> U,
    {
        arms(self.tag, self.variant.value())
    }

    /// Partial match: run the first handler registered for the active tag,
    /// or the arm set's mandatory default.
    ///
    /// Exactly one handler is invoked, exactly once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde::{Deserialize, Serialize};
    /// use sumwise::core::{Arms, Tag, Tagged};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    /// enum Grade {
    ///     Pass,
    ///     Borderline,
    ///     Fail,
    /// }
    ///
    /// impl Tag for Grade {
    ///     const ALL: &'static [Self] = &[Self::Pass, Self::Borderline, Self::Fail];
    ///
    ///     fn name(&self) -> &'static str {
    ///         match self {
    ///             Self::Pass => "Pass",
    ///             Self::Borderline => "Borderline",
    ///             Self::Fail => "Fail",
    ///         }
    ///     }
    /// }
    ///
    /// let union = Tagged::new(Grade::Fail, 31u32);
    ///
    /// let verdict = union.partial_match(
    ///     Arms::otherwise(|| "needs review".to_string())
    ///         .arm(Grade::Pass, |score| format!("passed with {score}")),
    /// );
    /// assert_eq!(verdict, "needs review");
    /// ```
    pub fn partial_match<U>(&self, arms: Arms<'_, G, V, U>) -> U {
        let Arms { handlers, default } = arms;
        for (tag, handler) in handlers {
            if tag == self.tag {
                return handler(self.variant.value());
            }
        }
        default()
    }
}

impl<G: Tag, V> TaggedUnion for Tagged<G, V> {
    type Tag = G;

    fn tag(&self) -> G {
        self.tag
    }
}

/// An ordered, partial set of match arms plus a mandatory default.
///
/// The only constructor is [`Arms::otherwise`], which makes supplying the
/// default (`_`) arm a structural requirement rather than a runtime check.
pub struct Arms<'a, G, V, U> {
    handlers: Vec<(G, Box<dyn FnOnce(&V) -> U + 'a>)>,
    default: Box<dyn FnOnce() -> U + 'a>,
}

impl<'a, G: Tag, V, U> Arms<'a, G, V, U> {
    /// Start an arm set from its default handler.
    pub fn otherwise<D>(default: D) -> Self
    where
        D: FnOnce() -> U + 'a,
    {
        Arms {
            handlers: Vec::new(),
            default: Box::new(default),
        }
    }

    /// Register a handler for one tag. First registration wins if a tag
    /// is repeated.
    pub fn arm<F>(mut self, tag: G, handler: F) -> Self
    where
        F: FnOnce(&V) -> U + 'a,
    {
        self.handlers.push((tag, Box::new(handler)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::cell::Cell;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestTag {
        Alpha,
        Beta,
        Gamma,
    }

    impl Tag for TestTag {
        const ALL: &'static [Self] = &[Self::Alpha, Self::Beta, Self::Gamma];

        fn name(&self) -> &'static str {
            match self {
                Self::Alpha => "Alpha",
                Self::Beta => "Beta",
                Self::Gamma => "Gamma",
            }
        }
    }

    #[test]
    fn is_matches_only_the_active_tag() {
        let union = Tagged::new(TestTag::Beta, 1);

        for tag in TestTag::ALL {
            assert_eq!(union.is(*tag), *tag == TestTag::Beta);
        }
    }

    #[test]
    fn tag_name_reports_active_tag() {
        let union = Tagged::new(TestTag::Gamma, ());
        assert_eq!(union.tag_name(), "Gamma");
    }

    #[test]
    fn is_and_short_circuits_on_tag_mismatch() {
        let union = Tagged::new(TestTag::Alpha, 10);
        let evaluated = Cell::new(false);

        let hit = union.is_and(TestTag::Beta, |_| {
            evaluated.set(true);
            true
        });

        assert!(!hit);
        assert!(!evaluated.get());
    }

    #[test]
    fn is_and_evaluates_predicate_on_match() {
        let union = Tagged::new(TestTag::Alpha, 10);

        assert!(union.is_and(TestTag::Alpha, |n| *n == 10));
        assert!(!union.is_and(TestTag::Alpha, |n| *n == 11));
    }

    #[test]
    fn is_maybe_projects_payload() {
        let union = Tagged::new(TestTag::Beta, "x");

        assert_eq!(union.is_maybe(TestTag::Beta).unwrap(), &"x");
        assert!(union.is_maybe(TestTag::Alpha).is_none());
    }

    #[test]
    fn is_and_maybe_requires_both_conditions() {
        let union = Tagged::new(TestTag::Beta, 4);

        assert!(union.is_and_maybe(TestTag::Beta, |n| *n > 3).is_some());
        assert!(union.is_and_maybe(TestTag::Beta, |n| *n > 5).is_none());
        assert!(union.is_and_maybe(TestTag::Alpha, |_| true).is_none());
    }

    #[test]
    fn if_let_takes_the_matching_branch() {
        let union = Tagged::new(TestTag::Alpha, 3);

        assert_eq!(union.if_let(TestTag::Alpha, |n| n * 2, || 0), 6);
        assert_eq!(union.if_let(TestTag::Gamma, |n| n * 2, || 0), 0);
    }

    #[test]
    fn match_with_sees_tag_and_payload() {
        let union = Tagged::new(TestTag::Gamma, 9);

        let out = union.match_with(|tag, n| match tag {
            TestTag::Alpha => n + 1,
            TestTag::Beta => n + 2,
            TestTag::Gamma => n + 3,
        });

        assert_eq!(out, 12);
    }

    #[test]
    fn partial_match_prefers_registered_arm() {
        let union = Tagged::new(TestTag::Beta, 5);

        let out = union.partial_match(
            Arms::otherwise(|| 0)
                .arm(TestTag::Alpha, |n| n + 100)
                .arm(TestTag::Beta, |n| n + 200),
        );

        assert_eq!(out, 205);
    }

    #[test]
    fn partial_match_falls_back_to_default() {
        let union = Tagged::new(TestTag::Gamma, 5);

        let out = union.partial_match(Arms::otherwise(|| -1).arm(TestTag::Alpha, |n| *n));

        assert_eq!(out, -1);
    }

    #[test]
    fn partial_match_invokes_exactly_one_handler() {
        let union = Tagged::new(TestTag::Alpha, ());
        let calls = Cell::new(0u32);

        union.partial_match(
            Arms::otherwise(|| calls.set(calls.get() + 100))
                .arm(TestTag::Alpha, |_| calls.set(calls.get() + 1))
                .arm(TestTag::Beta, |_| calls.set(calls.get() + 10)),
        );

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn into_pair_round_trips() {
        let union = Tagged::new(TestTag::Alpha, 7);
        let (tag, variant) = union.clone().into_pair();

        assert_eq!(Tagged::from_variant(tag, variant), union);
    }

    #[test]
    fn tagged_serializes_with_tag_and_payload() {
        let union = Tagged::new(TestTag::Beta, 2);
        let json = serde_json::to_string(&union).unwrap();
        let back: Tagged<TestTag, i32> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, union);
    }
}
