//! Common test utilities for tagpick CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory and config home, plus CLI runner
//! - Fixtures: reusable tag collections

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
