//! The tagged-union engine.
//!
//! This module contains the pure functional core of the crate:
//! - Payload holders via [`Variant`]
//! - Closed tag sets and the matching surface via [`Tag`], [`TaggedUnion`]
//!   and [`Tagged`]
//! - The two canonical instantiations, [`Maybe`] and [`Outcome`]
//!
//! Everything here is an immutable value; no operation mutates a union in
//! place, and only the `expect`/`unwrap` family can panic.

pub mod maybe;
pub mod outcome;
pub mod union;
pub mod variant;

pub use maybe::{Maybe, MaybeTag};
pub use outcome::{Outcome, OutcomeTag};
pub use union::{Arms, Tag, Tagged, TaggedUnion};
pub use variant::{UnitVariant, Variant};
