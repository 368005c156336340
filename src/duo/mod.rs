//! A generic two-arm union with no success/failure connotation.
//!
//! `Duo` is the minimal either-type: arm `A` or arm `B`, each with its own
//! payload type. The split constructors in [`split`] build one from a
//! boolean predicate or from presence/absence of an optional value.

mod split;

pub use split::{split_bool, split_nullable, Splitter};

use crate::core::maybe::Maybe;
use crate::core::union::{Tag, TaggedUnion};
use crate::core::variant::Variant;
use serde::{Deserialize, Serialize};

/// The closed tag set of [`Duo`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DuoTag {
    A,
    B,
}

impl Tag for DuoTag {
    const ALL: &'static [Self] = &[Self::A, Self::B];

    fn name(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

/// Exactly one of two arms, `A` or `B`.
///
/// The variants are public, so a native `match` is the exhaustive match;
/// [`Duo::fold`] is the method form.
///
/// # Example
///
/// ```rust
/// use sumwise::duo::{self, Duo};
///
/// let side: Duo<i32, &str> = duo::a(5);
///
/// assert!(side.is_a());
/// assert_eq!(side.a().unwrap(), &5);
/// assert!(side.b().is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duo<A, B> {
    A(Variant<A>),
    B(Variant<B>),
}

/// Construct the `A` arm.
pub fn a<A, B>(value: A) -> Duo<A, B> {
    Duo::A(Variant::new(value))
}

/// Construct the `B` arm.
pub fn b<A, B>(value: B) -> Duo<A, B> {
    Duo::B(Variant::new(value))
}

impl<A, B> Duo<A, B> {
    /// Whether the active arm is `A`.
    pub fn is_a(&self) -> bool {
        matches!(self, Duo::A(_))
    }

    /// `true` only when `A` and the predicate accepts its payload.
    /// The predicate is not evaluated for `B`.
    pub fn is_a_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Duo::A(v) => predicate(v.value()),
            Duo::B(_) => false,
        }
    }

    /// Whether the active arm is `B`.
    pub fn is_b(&self) -> bool {
        matches!(self, Duo::B(_))
    }

    /// `true` only when `B` and the predicate accepts its payload.
    pub fn is_b_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&B) -> bool,
    {
        match self {
            Duo::A(_) => false,
            Duo::B(v) => predicate(v.value()),
        }
    }

    /// Project to the raw `A` payload, if that arm is active.
    pub fn a(&self) -> Maybe<&A> {
        match self {
            Duo::A(v) => Maybe::some(v.value()),
            Duo::B(_) => Maybe::None,
        }
    }

    /// Project to the raw `B` payload, if that arm is active.
    pub fn b(&self) -> Maybe<&B> {
        match self {
            Duo::A(_) => Maybe::None,
            Duo::B(v) => Maybe::some(v.value()),
        }
    }

    /// Project to the wrapping variant of the `A` arm.
    pub fn a_variant(&self) -> Maybe<&Variant<A>> {
        match self {
            Duo::A(v) => Maybe::some(v),
            Duo::B(_) => Maybe::None,
        }
    }

    /// Project to the wrapping variant of the `B` arm.
    pub fn b_variant(&self) -> Maybe<&Variant<B>> {
        match self {
            Duo::A(_) => Maybe::None,
            Duo::B(v) => Maybe::some(v),
        }
    }

    /// Consume into the `A` payload, if that arm is active.
    pub fn into_a(self) -> Maybe<A> {
        match self {
            Duo::A(v) => Maybe::Some(v),
            Duo::B(_) => Maybe::None,
        }
    }

    /// Consume into the `B` payload, if that arm is active.
    pub fn into_b(self) -> Maybe<B> {
        match self {
            Duo::A(_) => Maybe::None,
            Duo::B(v) => Maybe::Some(v),
        }
    }

    /// Exhaustive match in method form: one handler per arm, exactly one
    /// runs, exactly once.
    pub fn fold<U, FA, FB>(self, a_arm: FA, b_arm: FB) -> U
    where
        FA: FnOnce(A) -> U,
        FB: FnOnce(B) -> U,
    {
        match self {
            Duo::A(v) => a_arm(v.into_inner()),
            Duo::B(v) => b_arm(v.into_inner()),
        }
    }
}

impl<A, B> TaggedUnion for Duo<A, B> {
    type Tag = DuoTag;

    fn tag(&self) -> DuoTag {
        match self {
            Duo::A(_) => DuoTag::A,
            Duo::B(_) => DuoTag::B,
        }
    }
}
