//! High-level operations.
//!
//! This module contains the implementation of Slipway commands.

pub mod build;

pub use build::{build, build_with, BuildOptions};
