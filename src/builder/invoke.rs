//! Two-phase build invocation.
//!
//! External processes run behind the narrow [`CommandRunner`] capability so
//! synthesis and staging can be tested with a mock runner. The real runner
//! inherits stdout/stderr for live progress.

use std::path::Path;

use crate::builder::toolchain::{Tool, ToolchainPath};
use crate::error::BuildError;
use crate::util::process::ProcessBuilder;

/// Capability to run an external command in a working directory.
///
/// A non-zero exit status is an error; there is no retry, timeout, or
/// cancellation.
pub trait CommandRunner {
    fn run(&mut self, cwd: &Path, argv: &[String]) -> Result<(), BuildError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &mut T {
    fn run(&mut self, cwd: &Path, argv: &[String]) -> Result<(), BuildError> {
        (**self).run(cwd, argv)
    }
}

/// Runs commands as blocking child processes with inherited stdio.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, cwd: &Path, argv: &[String]) -> Result<(), BuildError> {
        let cmd = ProcessBuilder::new(&argv[0]).args(&argv[1..]).cwd(cwd);
        tracing::debug!("running `{}` in {}", cmd.display_command(), cwd.display());

        let status = cmd.status().map_err(|err| BuildError::ProcessExecution {
            command: cmd.display_command(),
            reason: format!("{:#}", err),
        })?;

        if !status.success() {
            return Err(BuildError::ProcessExecution {
                command: cmd.display_command(),
                reason: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Executes the configure and build phases against a fixed working
/// directory, substituting the resolved cmake path for the symbolic leading
/// token of each argument list.
pub struct BuildInvoker<'a, R> {
    cmake: &'a ToolchainPath,
    source_dir: &'a Path,
    runner: R,
}

impl<'a, R: CommandRunner> BuildInvoker<'a, R> {
    pub fn new(cmake: &'a ToolchainPath, source_dir: &'a Path, runner: R) -> Self {
        BuildInvoker {
            cmake,
            source_dir,
            runner,
        }
    }

    /// Run one phase. The working directory is always the source directory.
    pub fn run(&mut self, argv: &[String]) -> Result<(), BuildError> {
        let mut resolved = argv.to_vec();
        if let Some(first) = resolved.first_mut() {
            if first == Tool::Cmake.binary_name() {
                *first = self.cmake.path.display().to_string();
            }
        }
        self.runner.run(self.source_dir, &resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockRunner;
    use std::path::PathBuf;

    fn cmake_at(path: &str) -> ToolchainPath {
        ToolchainPath {
            tool: Tool::Cmake,
            path: PathBuf::from(path),
        }
    }

    #[test]
    fn test_symbolic_token_is_substituted() {
        let cmake = cmake_at("/opt/cmake/bin/cmake");
        let source = Path::new("/work/native");
        let mut runner = MockRunner::new();

        let mut invoker = BuildInvoker::new(&cmake, source, &mut runner);
        invoker
            .run(&["cmake".to_string(), "--build".to_string(), "build/linux_x64".to_string()])
            .unwrap();

        assert_eq!(runner.calls.len(), 1);
        let (cwd, argv) = &runner.calls[0];
        assert_eq!(cwd.as_path(), source);
        assert_eq!(argv[0], "/opt/cmake/bin/cmake");
        assert_eq!(&argv[1..], ["--build", "build/linux_x64"]);
    }

    #[test]
    fn test_non_symbolic_token_is_left_alone() {
        let cmake = cmake_at("/opt/cmake/bin/cmake");
        let mut runner = MockRunner::new();

        let mut invoker = BuildInvoker::new(&cmake, Path::new("."), &mut runner);
        invoker
            .run(&["ninja".to_string(), "-C".to_string(), "build".to_string()])
            .unwrap();

        assert_eq!(runner.calls[0].1[0], "ninja");
    }

    #[test]
    fn test_runner_failure_propagates() {
        let cmake = cmake_at("/opt/cmake/bin/cmake");
        let mut runner = MockRunner::failing_on(0);

        let mut invoker = BuildInvoker::new(&cmake, Path::new("."), &mut runner);
        let err = invoker.run(&["cmake".to_string()]).unwrap_err();
        assert!(matches!(err, BuildError::ProcessExecution { .. }));
    }
}
