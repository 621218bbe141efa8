//! Pickle field reader tests

#[path = "../common/mod.rs"]
mod common;
