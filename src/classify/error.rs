//! Build and exhaustion errors for classifiers.

use thiserror::Error;

/// Errors that can occur when building a reusable classifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No guards defined. Add at least one guard before building a classifier")]
    NoGuards,

    #[error("Duplicate guard for tag `{0}`. Each tag may appear at most once")]
    DuplicateTag(&'static str),
}

/// Ready-made classification failure for callers without a domain error.
///
/// Returned (by choice of the caller) when every guard rejects the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no guard accepted the value")]
pub struct Unclassified;
