//! Build pipeline error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::platform::Platform;

/// Error raised by the build pipeline.
///
/// Every variant is fatal to the whole invocation; nothing is caught or
/// retried internally. Variants with a likely environmental cause carry a
/// remediation hint.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required configuration value was absent from both the process
    /// environment and the properties file.
    #[error("missing configuration value `{key}`: not set in the environment and not found in {}", props_file.display())]
    Configuration { key: String, props_file: PathBuf },

    /// A required external executable could not be discovered.
    #[error("{tool} not found\n\n{hint}")]
    ToolchainMissing {
        tool: &'static str,
        hint: &'static str,
    },

    /// The platform has no entry in the relevant dispatch table.
    #[error("unsupported platform `{platform}` for {context}")]
    UnsupportedPlatform {
        platform: Platform,
        context: &'static str,
    },

    /// A configure or build child process failed or exited non-zero.
    #[error("`{command}` failed: {reason}")]
    ProcessExecution { command: String, reason: String },

    /// The build succeeded but the expected output file is absent.
    #[error("expected build artifact not found: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    /// The artifact could not be copied into the output directory.
    #[error("failed to stage artifact into {}: {source}", path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
