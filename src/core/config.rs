//! Per-invocation build configuration.
//!
//! Everything the pipeline reads from the caller or the environment is
//! collected up front into immutable structures. In particular the process
//! environment is captured once as an [`EnvSnapshot`], so discovery
//! precedence can be tested without mutating global state mid-pipeline.

use std::collections::HashMap;
use std::path::PathBuf;

/// Link mode for the produced library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    Shared,
    Static,
}

/// Optimization profile, mapped to the two fixed CMake build-type labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Release,
    Debug,
}

impl BuildType {
    pub fn from_release(release: bool) -> Self {
        if release {
            BuildType::Release
        } else {
            BuildType::Debug
        }
    }

    /// The `CMAKE_BUILD_TYPE` label. Release builds are size-optimized.
    pub fn label(&self) -> &'static str {
        match self {
            BuildType::Release => "MinSizeRel",
            BuildType::Debug => "Debug",
        }
    }
}

/// Configuration for one build invocation. Constructed once from caller
/// input and read-only thereafter.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub link_mode: LinkMode,
    pub build_type: BuildType,
    /// Enable the JNI binding layer (requires a per-platform JDK home).
    pub jni: bool,
    /// Stage the built artifact into this directory, if given.
    pub out_dir: Option<PathBuf>,
    /// Suffix the staged file name with the platform identity, so several
    /// platform builds can share one output directory.
    pub platform_suffix: bool,
}

/// Immutable capture of the process environment, taken once per invocation.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        EnvSnapshot {
            vars: std::env::vars().collect(),
        }
    }

    /// An empty snapshot. Useful for building synthetic environments.
    pub fn empty() -> Self {
        EnvSnapshot::default()
    }

    /// Add a variable, builder-style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// The PATH-like variable consulted by tool discovery.
    pub fn search_path(&self) -> Option<&str> {
        self.get("PATH")
    }
}
