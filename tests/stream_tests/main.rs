//! Command stream reader tests

#[path = "../common/mod.rs"]
mod common;
