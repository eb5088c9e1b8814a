//! Predicates for validating command output

#![allow(dead_code)]

use predicates::prelude::*;

/// A single `Error:` line on stderr
pub fn error_line() -> impl Predicate<str> {
    predicates::str::starts_with("Error:").and(predicates::str::contains("\n").count(1))
}

pub fn repository_not_found() -> impl Predicate<str> {
    predicates::str::contains("git repository not found")
}

pub fn author_config_missing() -> impl Predicate<str> {
    predicates::str::contains("author configuration missing")
}

/// `v<semver> (rev: <something>)`
pub fn version_line() -> impl Predicate<str> {
    predicates::str::is_match(r"^v\d+\.\d+\.\d+ \(rev: [^)]+\)\n$").expect("valid regex")
}
