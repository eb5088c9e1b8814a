//! Shared test utilities for git-commit-composer
//!
//! Integration tests run against real repositories created in temporary
//! directories, plus scripted key sequences for the commit form.

pub mod assertions;
pub mod fixtures;
pub mod repository;
