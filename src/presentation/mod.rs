//! Presentation Layer
//!
//! Command-line surface over the selector library. Rendering lives in the
//! binary; this module only defines the argument model so it can be tested
//! without spawning the executable.

pub mod cli;

pub use cli::{Cli, Commands};
