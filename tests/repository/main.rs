//! Repository integration tests: id allocation under concurrency and
//! whole-record replacement.

#[path = "../support/mod.rs"]
mod support;

mod properties;
