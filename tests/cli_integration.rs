//! CLI integration tests for Slipway.
//!
//! These tests exercise the argument surface and the failure paths that do
//! not require cmake on the machine; every asserted error fires before any
//! child process would be spawned.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the slipway binary command.
fn slipway() -> Command {
    Command::cargo_bin("slipway").unwrap()
}

#[test]
fn test_platforms_lists_the_catalog() {
    slipway()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("windows_x64"))
        .stdout(predicate::str::contains("linux_arm64"))
        .stdout(predicate::str::contains("macos_arm64"))
        .stdout(predicate::str::contains("ios_simulator_arm64"))
        .stdout(predicate::str::contains("Xcode"))
        .stdout(predicate::str::contains("Ninja"));
}

#[test]
fn test_build_rejects_unknown_platform() {
    slipway()
        .args(["build", "win32"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown platform `win32`"))
        .stderr(predicate::str::contains("linux_x64"));
}

#[test]
fn test_jni_build_on_ios_is_unsupported() {
    let tmp = TempDir::new().unwrap();

    slipway()
        .args(["build", "ios_device", "--jni"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unsupported platform `ios_device` for JNI builds",
        ));
}

#[test]
fn test_jni_build_without_jdk_home_names_both_sources() {
    let tmp = TempDir::new().unwrap();

    slipway()
        .args(["build", "linux_x64", "--jni"])
        .current_dir(tmp.path())
        .env_remove("JAVA_HOME_LINUX_X64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JAVA_HOME_LINUX_X64"))
        .stderr(predicate::str::contains("local.properties"));
}

#[test]
fn test_build_requires_a_platform_argument() {
    slipway().arg("build").assert().failure();
}
