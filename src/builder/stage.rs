//! Artifact staging.
//!
//! Maps (platform, link-mode, build-type) to the file the build produced
//! under the platform's build directory and copies it into the caller's
//! output directory under a deterministic name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::synth::build_dir;
use crate::core::config::{BuildConfig, LinkMode};
use crate::core::platform::{OsFamily, Platform};
use crate::error::BuildError;

/// Base name of the built and staged library.
pub const ARTIFACT_BASE: &str = "libnative";

/// File extension of the built library.
fn extension(platform: Platform, link_mode: LinkMode) -> &'static str {
    match link_mode {
        LinkMode::Static => "a",
        LinkMode::Shared => match platform.os_family() {
            OsFamily::Windows => "dll",
            OsFamily::Linux => "so",
            OsFamily::Macos | OsFamily::Ios => "dylib",
        },
    }
}

/// Subdirectory under the build dir where the artifact lands, if any.
///
/// Only static iOS builds nest their output: xcodebuild qualifies the
/// directory with the build-type label plus an SDK suffix. The arm64
/// simulator stages from a build-type-only directory while the x64
/// simulator carries the `-iphonesimulator` suffix; the platform matrix has
/// always behaved this way, so both arms are preserved verbatim.
fn subdir(platform: Platform, config: &BuildConfig) -> Option<String> {
    if config.link_mode != LinkMode::Static {
        return None;
    }
    let label = config.build_type.label();
    match platform {
        Platform::IosDevice => Some(format!("{label}-iphoneos")),
        Platform::IosSimulatorX64 => Some(format!("{label}-iphonesimulator")),
        Platform::IosSimulatorArm64 => Some(label.to_string()),
        Platform::WindowsX64
        | Platform::LinuxX64
        | Platform::LinuxArm64
        | Platform::MacosX64
        | Platform::MacosArm64 => None,
    }
}

/// Expected location of the built artifact under the source directory.
pub fn artifact_source(platform: Platform, config: &BuildConfig, source_dir: &Path) -> PathBuf {
    let mut dir = source_dir.join(build_dir(platform));
    if let Some(sub) = subdir(platform, config) {
        dir.push(sub);
    }
    dir.join(format!(
        "{}.{}",
        ARTIFACT_BASE,
        extension(platform, config.link_mode)
    ))
}

/// File name the artifact is staged under.
pub fn staged_name(platform: Platform, config: &BuildConfig) -> String {
    let ext = extension(platform, config.link_mode);
    if config.platform_suffix {
        format!("{}_{}.{}", ARTIFACT_BASE, platform.id(), ext)
    } else {
        format!("{}.{}", ARTIFACT_BASE, ext)
    }
}

/// Copy the built artifact into `out_dir`, overwriting any previous copy.
///
/// Returns the destination path. Fails if the expected artifact is absent
/// (the build silently produced nothing, or a path-mapping bug) or the
/// output directory cannot be created.
pub fn stage(
    platform: Platform,
    config: &BuildConfig,
    source_dir: &Path,
    out_dir: &Path,
) -> Result<PathBuf, BuildError> {
    let source = artifact_source(platform, config, source_dir);
    if !source.is_file() {
        return Err(BuildError::ArtifactMissing { path: source });
    }

    fs::create_dir_all(out_dir).map_err(|err| BuildError::Staging {
        path: out_dir.to_path_buf(),
        source: err,
    })?;

    let dest = out_dir.join(staged_name(platform, config));
    fs::copy(&source, &dest).map_err(|err| BuildError::Staging {
        path: dest.clone(),
        source: err,
    })?;

    Ok(dest)
}
