//! HTTP Status Classification
//!
//! This example demonstrates guard-driven classification: an unstructured
//! status code is sorted into one of several statically-known classes by
//! the first matching guard, then consumed with an exhaustive match.
//!
//! Key concepts:
//! - Ordered guard sets with first-match-wins semantics
//! - A ready-made exhaustion error (`Unclassified`)
//! - Exhaustive matching over the classified union
//!
//! Run with: cargo run --example classify_http

use serde::{Deserialize, Serialize};
use sumwise::classify::{Classifier, GuardSet, Unclassified};
use sumwise::core::Tag;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
enum StatusClass {
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
}

impl Tag for StatusClass {
    const ALL: &'static [Self] = &[
        Self::Informational,
        Self::Success,
        Self::Redirect,
        Self::ClientError,
        Self::ServerError,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Success => "Success",
            Self::Redirect => "Redirect",
            Self::ClientError => "ClientError",
            Self::ServerError => "ServerError",
        }
    }
}

fn main() {
    println!("=== HTTP Status Classification ===\n");

    let classifier = Classifier::new(
        GuardSet::new()
            .guard(StatusClass::Informational, |code: &u16| *code < 200)
            .guard(StatusClass::Success, |code| *code < 300)
            .guard(StatusClass::Redirect, |code| *code < 400)
            .guard(StatusClass::ClientError, |code| *code < 500)
            .guard(StatusClass::ServerError, |code| *code < 600),
        Unclassified,
    )
    .expect("guard set is non-empty and duplicate-free");

    for code in [101u16, 200, 204, 301, 404, 418, 503, 999] {
        let report = classifier.classify(code).map_or_else(
            |_| format!("{code} is not an HTTP status code"),
            |classified| {
                classified.match_with(|class, code| match class {
                    StatusClass::Informational => format!("{code}: informational"),
                    StatusClass::Success => format!("{code}: success"),
                    StatusClass::Redirect => format!("{code}: redirect"),
                    StatusClass::ClientError => format!("{code}: client error"),
                    StatusClass::ServerError => format!("{code}: server error"),
                })
            },
        );

        println!("  {report}");
    }

    println!("\nGuards overlap (every success code is also < 600);");
    println!("insertion order is the tie-break, so 204 lands in Success.");

    println!("\n=== Example Complete ===");
}
