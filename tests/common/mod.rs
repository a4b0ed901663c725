//! Common test utilities for tagtree integration tests.
//!
//! - `TestEnv`: isolated temp directory plus helpers to run the binary
//! - Fixtures: tag lists shared by scenario and CLI tests

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
