//! Slipway - cross-platform build orchestrator for the native library
//!
//! This crate provides the core library functionality for Slipway:
//! toolchain discovery, per-platform argument synthesis, two-phase build
//! invocation, and artifact staging.

pub mod builder;
pub mod core;
pub mod error;
pub mod ops;
pub mod util;

/// Test utilities and mocks for Slipway unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock command runner so pipeline tests
/// never spawn real processes.
#[cfg(test)]
pub mod test_support;

pub use core::config::{BuildConfig, BuildType, EnvSnapshot, LinkMode};
pub use core::platform::{Arch, Generator, OsFamily, Platform};

pub use error::BuildError;
pub use ops::build::{build, BuildOptions};
