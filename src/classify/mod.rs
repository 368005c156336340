//! Predicate-driven construction of tagged unions.
//!
//! Classification turns an unstructured value into one arm of a closed
//! union without hand-written if/else chains: an ordered set of named
//! guards (or transforming branches) is evaluated in insertion order, and
//! the first acceptance decides the tag. Once classification succeeds, the
//! result is an ordinary [`Tagged`] union with the full matching surface.
//!
//! First-match-wins is a deliberate, load-bearing policy here: guard sets
//! need not be mutually exclusive, and their order is the tie-break.
//!
//! [`Tagged`]: crate::core::Tagged

mod branch;
mod context;
mod error;
mod guard;

pub use branch::{BranchFn, BranchSet, Brancher};
pub use context::{CtxClassifier, CtxGuardFn, CtxGuardSet, CtxTagged};
pub use error::{BuildError, Unclassified};
pub use guard::{Classifier, GuardFn, GuardSet};

use crate::core::union::Tag;

/// Shared build validation: a classifier needs at least one arm, and no
/// tag may appear twice (the second could never win under first-match).
pub(crate) fn validate_tag_order<G: Tag>(tags: impl Iterator<Item = G>) -> Result<(), BuildError> {
    let mut seen: Vec<G> = Vec::new();
    for tag in tags {
        if seen.contains(&tag) {
            return Err(BuildError::DuplicateTag(tag.name()));
        }
        seen.push(tag);
    }
    if seen.is_empty() {
        return Err(BuildError::NoGuards);
    }
    Ok(())
}
