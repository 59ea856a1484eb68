//! The end-to-end build pipeline.
//!
//! Strictly sequential: resolve configuration, locate tools, synthesize
//! arguments, run configure then build, then stage the artifact if an
//! output directory was requested. Every failure aborts the invocation.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::builder::invoke::{BuildInvoker, CommandRunner, ProcessRunner};
use crate::builder::toolchain::{locate, Tool};
use crate::builder::{jdk, stage, synth};
use crate::core::config::{BuildConfig, EnvSnapshot};
use crate::core::platform::{Generator, Platform};
use crate::error::BuildError;

/// Options for a single build invocation.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub platform: Platform,
    pub config: BuildConfig,
    /// Directory containing `CMakeLists.txt`; both phases run here.
    pub source_dir: PathBuf,
}

/// Build the native library for one platform.
///
/// Returns the staged artifact path when an output directory was given.
pub fn build(opts: &BuildOptions) -> Result<Option<PathBuf>> {
    let env = EnvSnapshot::from_process();
    build_with(opts, &env, &mut ProcessRunner)
}

/// Pipeline entry point with an explicit environment snapshot and runner,
/// so the whole flow can be exercised without touching the real
/// environment or spawning processes.
pub fn build_with(
    opts: &BuildOptions,
    env: &EnvSnapshot,
    runner: &mut dyn CommandRunner,
) -> Result<Option<PathBuf>> {
    let platform = opts.platform;
    let config = &opts.config;

    // Resolve configuration before any tool runs, so bad input fails fast.
    let jdk_home = if config.jni {
        Some(jdk::jdk_home(platform, env, &opts.source_dir)?)
    } else {
        None
    };

    let cmake = locate(Tool::Cmake, env).ok_or(BuildError::ToolchainMissing {
        tool: "cmake",
        hint: Tool::Cmake.install_hint(),
    })?;
    tracing::debug!("using cmake at {}", cmake.path.display());

    let ninja = locate(Tool::Ninja, env);
    if ninja.is_none() && platform.generator() == Generator::Ninja {
        return Err(BuildError::ToolchainMissing {
            tool: "ninja",
            hint: Tool::Ninja.install_hint(),
        }
        .into());
    }

    let configure = synth::configure_args(platform, config, ninja.as_ref(), jdk_home.as_deref());
    let build = synth::build_args(platform);

    let mut invoker = BuildInvoker::new(&cmake, &opts.source_dir, runner);

    tracing::info!("configuring {} ({})", platform, config.build_type.label());
    invoker.run(&configure).context("configure step failed")?;

    tracing::info!("building {}", platform);
    invoker.run(&build).context("build step failed")?;

    match &config.out_dir {
        Some(out_dir) => {
            let staged = stage::stage(platform, config, &opts.source_dir, out_dir)?;
            tracing::info!("staged {}", staged.display());
            Ok(Some(staged))
        }
        None => Ok(None),
    }
}
