//! Signup Form Validation
//!
//! This example demonstrates the two canonical unions working together:
//! optional fields flow through `Maybe`, validation produces `Outcome`
//! with typed errors, and a `Duo` splits the final greeting on presence
//! of a display name.
//!
//! Key concepts:
//! - Absence and failure carried as data, no panics on the happy path
//! - Monadic composition with `and_then`
//! - Presence-based splitting (`split_nullable`)
//!
//! Run with: cargo run --example signup_form

use sumwise::core::outcome::Outcome;
use sumwise::duo::split_nullable;
use sumwise::Maybe;

#[derive(Debug)]
struct Signup {
    email: String,
    age: u8,
}

fn validate_email(raw: &str) -> Outcome<String, String> {
    Outcome::require(
        raw.trim().to_lowercase(),
        |email| email.contains('@'),
        format!("`{raw}` is not an email address"),
    )
}

fn validate_age(raw: &str) -> Outcome<u8, String> {
    Outcome::from_option(raw.parse().ok(), format!("`{raw}` is not an age"))
        .and_then(|age| Outcome::require(age, |age| *age >= 13, "too young to sign up".into()))
}

fn signup(email: &str, age: &str) -> Outcome<Signup, String> {
    validate_email(email).and_then(|email| validate_age(age).map(|age| Signup { email, age }))
}

fn greeting(signup: &Signup, display_name: Option<&str>) -> String {
    // A present-but-empty display name is still "present"; only a missing
    // one falls back to the email.
    split_nullable(display_name, signup.email.as_str())
        .fold(|name| format!("Welcome, {name}!"), |email| format!("Welcome, {email}!"))
}

fn main() {
    println!("=== Signup Form Validation ===\n");

    let attempts = [
        ("Ada@Example.com", "36"),
        ("not-an-email", "36"),
        ("kid@example.com", "11"),
        ("ada@example.com", "many"),
    ];

    for (email, age) in attempts {
        signup(email, age)
            .inspect(|s| println!("  accepted: {s:?}"))
            .inspect_err(|e| println!("  rejected: {e}"));
    }

    let accepted = signup("ada@example.com", "36").expect("this signup is valid");

    println!();
    println!("  {}", greeting(&accepted, Some("Ada")));
    println!("  {}", greeting(&accepted, None));

    let anonymous: Maybe<&str> = Maybe::none();
    println!("  fallback display name: {}", anonymous.unwrap_or("guest"));

    println!("\n=== Example Complete ===");
}
