//! Core data structures for Slipway.
//!
//! This module contains the foundational types used throughout Slipway:
//! - The target platform catalog
//! - Per-invocation build configuration and the environment snapshot

pub mod config;
pub mod platform;

pub use config::{BuildConfig, BuildType, EnvSnapshot, LinkMode};
pub use platform::{Arch, Generator, OsFamily, Platform};
