//! JDK home resolution for the JNI binding layer.
//!
//! Each desktop (OS, arch) pair has its own `JAVA_HOME_<OS>_<ARCH>` key so a
//! single machine can hold cross-compilation JDKs for several hosts. The
//! key is read from the environment first and from `local.properties` in
//! the source directory second.

use std::path::Path;

use crate::core::config::EnvSnapshot;
use crate::core::platform::{Arch, OsFamily, Platform};
use crate::error::BuildError;
use crate::util::props::Properties;

/// Properties file consulted when the environment lacks the key.
pub const PROPERTIES_FILE: &str = "local.properties";

/// Environment/properties key naming the JDK home for `platform`.
///
/// Defined for the five desktop pairs only. The iOS family has no
/// cross-compiling host JDK, so a JNI build there is rejected here, before
/// any tool is located or any process spawned.
pub fn jdk_home_key(platform: Platform) -> Result<&'static str, BuildError> {
    match (platform.os_family(), platform.arch()) {
        (OsFamily::Windows, Arch::X64) => Ok("JAVA_HOME_WINDOWS_X64"),
        (OsFamily::Linux, Arch::X64) => Ok("JAVA_HOME_LINUX_X64"),
        (OsFamily::Linux, Arch::Arm64) => Ok("JAVA_HOME_LINUX_ARM64"),
        (OsFamily::Macos, Arch::X64) => Ok("JAVA_HOME_MACOS_X64"),
        (OsFamily::Macos, Arch::Arm64) => Ok("JAVA_HOME_MACOS_ARM64"),
        _ => Err(BuildError::UnsupportedPlatform {
            platform,
            context: "JNI builds",
        }),
    }
}

/// Resolve the JDK home for `platform`.
pub fn jdk_home(
    platform: Platform,
    env: &EnvSnapshot,
    source_dir: &Path,
) -> Result<String, BuildError> {
    let key = jdk_home_key(platform)?;

    if let Some(value) = env.get(key) {
        return Ok(value.to_string());
    }

    let props_file = source_dir.join(PROPERTIES_FILE);
    if props_file.exists() {
        match Properties::load(&props_file) {
            Ok(props) => {
                if let Some(value) = props.get(key) {
                    return Ok(value.to_string());
                }
            }
            Err(err) => {
                tracing::warn!("failed to read {}: {}", props_file.display(), err);
            }
        }
    }

    Err(BuildError::Configuration {
        key: key.to_string(),
        props_file,
    })
}
