//! Property-based tests for the tagged-union core.
//!
//! These tests use proptest to verify the matching and combinator
//! contracts hold across many randomly generated inputs.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use sumwise::classify::{GuardSet, Unclassified};
use sumwise::core::outcome;
use sumwise::duo::split_nullable;
use sumwise::{Maybe, Outcome, Tag, Tagged};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
enum TestTag {
    Red,
    Green,
    Blue,
}

impl Tag for TestTag {
    const ALL: &'static [Self] = &[Self::Red, Self::Green, Self::Blue];

    fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }
}

prop_compose! {
    fn arbitrary_tag()(index in 0..3usize) -> TestTag {
        TestTag::ALL[index]
    }
}

proptest! {
    #[test]
    fn is_accepts_only_the_constructed_tag(tag in arbitrary_tag(), value in any::<i32>()) {
        let union = Tagged::new(tag, value);

        for other in TestTag::ALL {
            prop_assert_eq!(union.is(*other), *other == tag);
        }
    }

    #[test]
    fn match_with_runs_one_handler_with_the_original_payload(
        tag in arbitrary_tag(),
        value in any::<i32>(),
    ) {
        let union = Tagged::new(tag, value);
        let calls = Cell::new(0u32);

        let seen = union.match_with(|active, n| {
            calls.set(calls.get() + 1);
            match active {
                TestTag::Red | TestTag::Green | TestTag::Blue => *n,
            }
        });

        prop_assert_eq!(calls.get(), 1);
        prop_assert_eq!(seen, value);
    }

    #[test]
    fn maybe_unwrap_round_trips(value in any::<i64>()) {
        prop_assert_eq!(Maybe::some(value).unwrap(), value);
    }

    #[test]
    fn maybe_map_composes_with_unwrap(value in any::<i32>()) {
        let f = |n: i32| i64::from(n) * 2;
        prop_assert_eq!(Maybe::some(value).map(f).unwrap(), f(value));
        prop_assert!(Maybe::<i32>::none().map(f).is_none());
    }

    #[test]
    fn maybe_bind_satisfies_left_identity(value in any::<i32>()) {
        let f = |n: i32| Maybe::some(i64::from(n) + 1);
        prop_assert_eq!(Maybe::some(value).and_then(f), f(value));
        prop_assert_eq!(Maybe::<i32>::none().and_then(f), Maybe::none());
    }

    #[test]
    fn maybe_unwrap_or_keeps_present_values(value in any::<i32>(), default in any::<i32>()) {
        prop_assert_eq!(Maybe::some(value).unwrap_or(default), value);
        prop_assert_eq!(Maybe::<i32>::none().unwrap_or(default), default);
    }

    #[test]
    fn outcome_map_touches_only_the_ok_side(value in any::<i32>(), error in any::<u8>()) {
        let f = |n: i32| i64::from(n) * 3;

        prop_assert_eq!(outcome::ok::<_, u8>(value).map(f).ok().unwrap(), f(value));
        prop_assert_eq!(outcome::err::<i32, _>(error).map(f).err().unwrap(), error);
    }

    #[test]
    fn outcome_map_err_touches_only_the_err_side(value in any::<i32>(), error in any::<u8>()) {
        let f = |e: u8| u16::from(e) + 1;

        prop_assert_eq!(outcome::ok::<_, u8>(value).map_err(f).ok().unwrap(), value);
        prop_assert_eq!(outcome::err::<i32, _>(error).map_err(f).err().unwrap(), f(error));
    }

    #[test]
    fn outcome_fold_is_total(value in any::<i32>(), error in any::<u8>()) {
        let folded = outcome::ok::<_, u8>(value).map_or_else(|_| None, Some);
        prop_assert_eq!(folded, Some(value));

        let folded = outcome::err::<i32, _>(error).map_or_else(|e| Some(u16::from(e)), |_| None);
        prop_assert_eq!(folded, Some(u16::from(error)));
    }

    #[test]
    fn first_matching_guard_always_wins(value in any::<i32>()) {
        let guards = GuardSet::new()
            .guard(TestTag::Red, |_: &i32| true)
            .guard(TestTag::Green, |_| true)
            .guard(TestTag::Blue, |_| true);

        let classified = guards.classify(value, Unclassified).unwrap();
        prop_assert!(classified.is(TestTag::Red));
        prop_assert_eq!(*classified.value(), value);
    }

    #[test]
    fn rejecting_guards_return_the_error_unchanged(value in any::<i32>(), error in any::<u32>()) {
        let guards = GuardSet::new()
            .guard(TestTag::Red, |_: &i32| false)
            .guard(TestTag::Green, |_| false);

        prop_assert_eq!(guards.classify(value, error).unwrap_err(), error);
    }

    #[test]
    fn guard_order_is_the_tie_break(value in any::<i32>()) {
        // Overlapping guards: insertion order decides.
        let forward = GuardSet::new()
            .guard(TestTag::Green, |_: &i32| true)
            .guard(TestTag::Blue, |_| true);
        let reversed = GuardSet::new()
            .guard(TestTag::Blue, |_: &i32| true)
            .guard(TestTag::Green, |_| true);

        prop_assert!(forward.classify(value, Unclassified).unwrap().is(TestTag::Green));
        prop_assert!(reversed.classify(value, Unclassified).unwrap().is(TestTag::Blue));
    }

    #[test]
    fn split_nullable_never_confuses_present_with_absent(value in any::<Option<i32>>()) {
        let d = split_nullable(value, "backup");

        match value {
            Some(n) => prop_assert_eq!(d.a().unwrap(), &n),
            None => prop_assert_eq!(d.b().unwrap(), &"backup"),
        }
    }

    #[test]
    fn maybe_round_trips_through_serde(value in any::<Option<i32>>()) {
        let maybe = Maybe::from(value);
        let json = serde_json::to_string(&maybe).unwrap();
        let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, maybe);
    }

    #[test]
    fn tagged_round_trips_through_serde(tag in arbitrary_tag(), value in any::<i32>()) {
        let union = Tagged::new(tag, value);
        let json = serde_json::to_string(&union).unwrap();
        let back: Tagged<TestTag, i32> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, union);
    }
}

#[test]
fn pipeline_scenarios_hold() {
    assert_eq!(
        outcome::ok::<i32, String>(5).map(|n| n * 2).ok().unwrap_or(0),
        10
    );
    assert_eq!(Maybe::<i32>::none().unwrap_or(7), 7);
    assert_eq!(outcome::err::<i32, _>("bad").map_or(0, |n| n + 1), 0);
}

#[test]
fn outcome_round_trips_through_serde() {
    let out: Outcome<i32, String> = outcome::err("bad".to_string());
    let json = serde_json::to_string(&out).unwrap();
    let back: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, out);
}
