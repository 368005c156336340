//! Sumwise: a pure functional tagged-union toolkit
//!
//! Sumwise models values that are exactly one of a closed set of named
//! alternatives, and keeps every operation on them a pure, total value
//! transformation. The only panicking surface is the `expect`/`unwrap`
//! family, reserved for asserting invariants that are programmer errors
//! when broken; everything else carries absence and failure as data.
//!
//! # Core Concepts
//!
//! - **Variant**: the immutable payload holder for one union arm
//! - **Tag / Tagged**: closed tag sets with exhaustive and partial matching
//! - **Maybe / Outcome**: the optional-value and fallible-result unions
//! - **Classification**: build a union at runtime from the first matching
//!   named guard, with explicit first-match-wins ordering
//! - **Duo**: a minimal two-arm either-type with boolean and presence splits
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use sumwise::classify::{GuardSet, Unclassified};
//! use sumwise::core::Tag;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
//! enum Magnitude {
//!     Small,
//!     Large,
//! }
//!
//! impl Tag for Magnitude {
//!     const ALL: &'static [Self] = &[Self::Small, Self::Large];
//!
//!     fn name(&self) -> &'static str {
//!         match self {
//!             Self::Small => "Small",
//!             Self::Large => "Large",
//!         }
//!     }
//! }
//!
//! let guards = GuardSet::new()
//!     .guard(Magnitude::Small, |n: &u64| *n < 1_000)
//!     .guard(Magnitude::Large, |_| true);
//!
//! let classified = guards.classify(250, Unclassified).unwrap();
//!
//! let label = classified.match_with(|tag, n| match tag {
//!     Magnitude::Small => format!("{n} is small"),
//!     Magnitude::Large => format!("{n} is large"),
//! });
//! assert_eq!(label, "250 is small");
//! ```

pub mod classify;
pub mod core;
pub mod duo;

// Re-export commonly used types
pub use crate::core::{
    Arms, Maybe, MaybeTag, Outcome, OutcomeTag, Tag, Tagged, TaggedUnion, UnitVariant, Variant,
};
pub use duo::{Duo, DuoTag};
