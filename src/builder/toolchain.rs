//! External tool discovery.
//!
//! The pipeline never assumes its tools are on PATH. Each tool is located
//! with a fixed precedence: an explicit environment override, a list of
//! well-known install locations, then a scan of the directories in PATH.
//! The first match wins and no further strategies are attempted.

use std::path::{Path, PathBuf};

use crate::core::config::EnvSnapshot;

/// Logical external tools the pipeline invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// The configure/build driver.
    Cmake,
    /// The fast-generator interpreter, required by all desktop platforms.
    Ninja,
}

impl Tool {
    /// Executable name, also used as the symbolic leading token of
    /// synthesized argument lists.
    pub fn binary_name(&self) -> &'static str {
        match self {
            Tool::Cmake => "cmake",
            Tool::Ninja => "ninja",
        }
    }

    /// Environment variable that overrides discovery for this tool.
    pub fn env_override(&self) -> &'static str {
        match self {
            Tool::Cmake => "CMAKE_PATH",
            Tool::Ninja => "NINJA_PATH",
        }
    }

    /// Well-known install locations, checked after the override.
    fn well_known_paths(&self) -> &'static [&'static str] {
        match self {
            Tool::Cmake => &[
                "/opt/homebrew/bin/cmake",
                "/usr/local/bin/cmake",
                "/usr/bin/cmake",
                "/Applications/CMake.app/Contents/bin/cmake",
                "C:\\Program Files\\CMake\\bin\\cmake.exe",
            ],
            Tool::Ninja => &[
                "/opt/homebrew/bin/ninja",
                "/usr/local/bin/ninja",
                "/usr/bin/ninja",
                "C:\\ProgramData\\chocolatey\\bin\\ninja.exe",
            ],
        }
    }

    /// Remediation text shown when the tool cannot be found.
    pub fn install_hint(&self) -> &'static str {
        match self {
            Tool::Cmake => {
                "CMake is required to generate and drive the native build.\n\
                 Install it and re-run:\n\
                 \n\
                 macOS:   brew install cmake\n\
                 Linux:   sudo apt install cmake (or your distribution's package manager)\n\
                 Windows: winget install Kitware.CMake\n\
                 \n\
                 Alternatively set CMAKE_PATH to an existing cmake executable."
            }
            Tool::Ninja => {
                "Ninja is required for desktop platform builds.\n\
                 Install it and re-run:\n\
                 \n\
                 macOS:   brew install ninja\n\
                 Linux:   sudo apt install ninja-build (or your distribution's package manager)\n\
                 Windows: winget install Ninja-build.Ninja\n\
                 \n\
                 Alternatively set NINJA_PATH to an existing ninja executable."
            }
        }
    }
}

/// An absolute path to an external executable, tagged with the logical tool
/// it satisfies. Resolved once per invocation; never cached across them.
#[derive(Debug, Clone)]
pub struct ToolchainPath {
    pub tool: Tool,
    pub path: PathBuf,
}

/// Locate `tool` using the fixed discovery precedence.
pub fn locate(tool: Tool, env: &EnvSnapshot) -> Option<ToolchainPath> {
    locate_with(tool, env, tool.well_known_paths())
}

fn locate_with(tool: Tool, env: &EnvSnapshot, well_known: &[&str]) -> Option<ToolchainPath> {
    // 1. Explicit override, used verbatim if it names an existing entry.
    if let Some(value) = env.get(tool.env_override()) {
        let path = Path::new(value);
        if path.exists() {
            return Some(ToolchainPath {
                tool,
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(
            "{} is set but {} does not exist; continuing discovery",
            tool.env_override(),
            value
        );
    }

    // 2. Well-known install locations, in order.
    for candidate in well_known {
        let path = Path::new(candidate);
        if path.exists() {
            return Some(ToolchainPath {
                tool,
                path: path.to_path_buf(),
            });
        }
    }

    // 3. Scan the snapshot's PATH for an executable named after the tool.
    let search_path = env.search_path()?;
    which::which_in(tool.binary_name(), Some(search_path), Path::new("."))
        .ok()
        .map(|path| ToolchainPath { tool, path })
}
