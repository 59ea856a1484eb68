//! Configure- and build-phase argument synthesis.
//!
//! Both lists start with the symbolic `cmake` token; the invoker substitutes
//! the resolved absolute path at execution time. Lists are built fresh per
//! phase and never mutated afterwards.

use crate::builder::toolchain::{Tool, ToolchainPath};
use crate::core::config::{BuildConfig, LinkMode};
use crate::core::platform::{Generator, Platform};

/// Platform-scoped build directory, relative to the source directory.
///
/// Every platform builds into its own subtree, so a full release matrix can
/// run without cross-contamination.
pub fn build_dir(platform: Platform) -> String {
    format!("build/{}", platform.id())
}

fn on_off(value: bool) -> &'static str {
    if value {
        "ON"
    } else {
        "OFF"
    }
}

/// Arguments for the configure phase.
///
/// `ninja` is the located fast-generator interpreter, if any; when present
/// its exact path is pinned so cmake's own lookup cannot disagree with ours.
/// `jdk_home` is the resolved JDK home when the JNI layer is enabled.
pub fn configure_args(
    platform: Platform,
    config: &BuildConfig,
    ninja: Option<&ToolchainPath>,
    jdk_home: Option<&str>,
) -> Vec<String> {
    let mut args = vec![
        Tool::Cmake.binary_name().to_string(),
        "-B".to_string(),
        build_dir(platform),
        format!("-DCMAKE_BUILD_TYPE={}", config.build_type.label()),
        format!("-DTARGET_PLATFORM={}", platform.id()),
        format!("-DWITH_JNI={}", on_off(config.jni)),
        format!(
            "-DBUILD_SHARED_LIBS={}",
            on_off(config.link_mode == LinkMode::Shared)
        ),
    ];

    let generator = platform.generator();
    args.push("-G".to_string());
    args.push(generator.as_str().to_string());
    if generator == Generator::Ninja {
        if let Some(ninja) = ninja {
            args.push(format!("-DCMAKE_MAKE_PROGRAM={}", ninja.path.display()));
        }
    }

    if let Some(home) = jdk_home {
        args.push(format!("-DJAVA_HOME={}", home));
    }

    args
}

/// Arguments for the build phase.
pub fn build_args(platform: Platform) -> Vec<String> {
    let mut args = vec![
        Tool::Cmake.binary_name().to_string(),
        "--build".to_string(),
        build_dir(platform),
    ];

    // Only the x64 simulator needs the explicit SDK selection; device and
    // arm64-simulator builds use xcodebuild's default SDK.
    if platform == Platform::IosSimulatorX64 {
        args.extend(["--", "-sdk", "iphonesimulator"].map(String::from));
    }

    args
}
