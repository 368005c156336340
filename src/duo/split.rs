//! Constructors that split a pair of candidate payloads into a [`Duo`].

use crate::duo::Duo;
use std::marker::PhantomData;

/// A reusable boolean split over a fixed predicate.
///
/// The predicate is fixed first; each [`Splitter::split`] call then applies
/// it to a context value and picks the `A` payload on acceptance, the `B`
/// payload otherwise.
///
/// # Example
///
/// ```rust
/// use sumwise::duo::Splitter;
///
/// let by_weekend = Splitter::new(|day: &&str| *day == "Sat" || *day == "Sun");
///
/// let plan = by_weekend.split(&"Sun", "rest", "work");
/// assert_eq!(plan.a().unwrap(), &"rest");
///
/// let plan = by_weekend.split(&"Tue", "rest", "work");
/// assert_eq!(plan.b().unwrap(), &"work");
/// ```
pub struct Splitter<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
    _phantom: PhantomData<C>,
}

impl<C> Splitter<C> {
    /// Fix the predicate for this splitter.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Splitter {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Split on the predicate's verdict over the context value.
    ///
    /// Both candidate payloads are taken eagerly; only one survives.
    pub fn split<A, B>(&self, ctx: &C, if_true: A, if_false: B) -> Duo<A, B> {
        if (self.predicate)(ctx) {
            crate::duo::a(if_true)
        } else {
            crate::duo::b(if_false)
        }
    }
}

/// Split directly on a boolean.
///
/// # Example
///
/// ```rust
/// use sumwise::duo::split_bool;
///
/// assert_eq!(split_bool(true, 1, "no").a().unwrap(), &1);
/// assert_eq!(split_bool(false, 1, "no").b().unwrap(), &"no");
/// ```
pub fn split_bool<A, B>(flag: bool, if_true: A, if_false: B) -> Duo<A, B> {
    if flag {
        crate::duo::a(if_true)
    } else {
        crate::duo::b(if_false)
    }
}

/// Split on presence: a present value lands in `A`, the backup in `B`.
///
/// Presence is decided by the `Option`, not by any notion of emptiness or
/// zeroness of the payload: `Some(0)` and `Some("")` are present.
///
/// # Example
///
/// ```rust
/// use sumwise::duo::split_nullable;
///
/// let kept = split_nullable(Some(0), "backup");
/// assert_eq!(kept.a().unwrap(), &0);
///
/// let fallen_back = split_nullable(None::<i32>, "backup");
/// assert_eq!(fallen_back.b().unwrap(), &"backup");
/// ```
pub fn split_nullable<A, B>(value: Option<A>, backup: B) -> Duo<A, B> {
    match value {
        Some(v) => crate::duo::a(v),
        None => crate::duo::b(backup),
    }
}
