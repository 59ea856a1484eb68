//! Native build pipeline.
//!
//! This module implements the stages of a build: external tool discovery,
//! JDK home resolution, argument synthesis, process invocation, and
//! artifact staging.

pub mod invoke;
pub mod jdk;
pub mod stage;
pub mod synth;
pub mod toolchain;

pub use invoke::{BuildInvoker, CommandRunner, ProcessRunner};
pub use toolchain::{locate, Tool, ToolchainPath};
