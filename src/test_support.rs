//! Test utilities and mocks for Slipway unit tests.
//!
//! Provides a mock [`CommandRunner`] so pipeline tests can assert on the
//! exact commands that would have been executed without spawning anything.

use std::path::{Path, PathBuf};

use crate::builder::invoke::CommandRunner;
use crate::error::BuildError;

/// Records every command the pipeline asks to run.
///
/// Calls succeed unless `fail_on_call` names their index; the failing call
/// is still recorded, mimicking a process that started and exited non-zero.
#[derive(Debug, Default)]
pub struct MockRunner {
    /// `(working directory, argv)` per call, in order.
    pub calls: Vec<(PathBuf, Vec<String>)>,
    pub fail_on_call: Option<usize>,
}

impl MockRunner {
    pub fn new() -> Self {
        MockRunner::default()
    }

    /// A runner whose `call`-th invocation (zero-based) fails.
    pub fn failing_on(call: usize) -> Self {
        MockRunner {
            calls: Vec::new(),
            fail_on_call: Some(call),
        }
    }
}

impl CommandRunner for MockRunner {
    fn run(&mut self, cwd: &Path, argv: &[String]) -> Result<(), BuildError> {
        let index = self.calls.len();
        self.calls.push((cwd.to_path_buf(), argv.to_vec()));
        if self.fail_on_call == Some(index) {
            return Err(BuildError::ProcessExecution {
                command: argv.join(" "),
                reason: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
