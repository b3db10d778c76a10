//! Fake process runner for testing.
//!
//! Records every invocation without spawning anything and answers with a configurable
//! exit code, so option rendering and exit-code handling can be exercised on any host.

use super::{ProcessOps, Streams};
use crate::HalResult;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Operation records for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Command {
        program: String,
        args: Vec<String>,
        stdin: Vec<u8>,
    },
}

#[derive(Debug, Clone, Default)]
struct FakeHalState {
    operations: Vec<Operation>,
    exit_code: Option<i32>,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

/// Fake HAL that records commands instead of running them.
///
/// Clones share state, so a test can keep one handle and pass another to the code
/// under test.
#[derive(Debug, Clone)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl Default for FakeHal {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHal {
    /// A fake that reports exit code 1 (all files copied).
    pub fn new() -> Self {
        Self::with_exit_code(Some(1))
    }

    pub fn with_exit_code(exit_code: Option<i32>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeHalState {
                exit_code,
                ..Default::default()
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, FakeHalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_exit_code(&self, exit_code: Option<i32>) {
        self.state().exit_code = exit_code;
    }

    /// Bytes written to the caller's stdout on every run.
    pub fn set_stdout(&self, bytes: impl Into<Vec<u8>>) {
        self.state().stdout = bytes.into();
    }

    /// Bytes written to the caller's stderr on every run.
    pub fn set_stderr(&self, bytes: impl Into<Vec<u8>>) {
        self.state().stderr = bytes.into();
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.state().operations.clone()
    }

    pub fn operation_count(&self) -> usize {
        self.state().operations.len()
    }

    /// Check if a specific operation was recorded.
    pub fn has_operation(&self, check: impl Fn(&Operation) -> bool) -> bool {
        self.state().operations.iter().any(check)
    }

    /// Arguments of the most recent command, if any.
    pub fn last_args(&self) -> Option<Vec<String>> {
        self.state().operations.last().map(|op| match op {
            Operation::Command { args, .. } => args.clone(),
        })
    }

    pub fn clear(&self) {
        self.state().operations.clear();
    }
}

impl ProcessOps for FakeHal {
    fn run_with_streams(
        &self,
        program: &str,
        args: &[String],
        streams: Streams,
    ) -> HalResult<Option<i32>> {
        log::info!("FAKE HAL: {} {}", program, args.join(" "));

        let Streams {
            stdin,
            stdout,
            stderr,
        } = streams;

        let mut input = Vec::new();
        if let Some(mut reader) = stdin {
            io::copy(&mut reader, &mut input)?;
        }

        let (exit_code, canned_out, canned_err) = {
            let mut state = self.state();
            state.operations.push(Operation::Command {
                program: program.to_string(),
                args: args.to_vec(),
                stdin: input,
            });
            (state.exit_code, state.stdout.clone(), state.stderr.clone())
        };

        if let Some(mut writer) = stdout {
            writer.write_all(&canned_out)?;
            writer.flush()?;
        }
        if let Some(mut writer) = stderr {
            writer.write_all(&canned_err)?;
            writer.flush()?;
        }

        Ok(exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fake_hal_records_command() {
        let hal = FakeHal::new();
        let code = hal.run("robocopy", &args(&["a", "b", "*.*"])).unwrap();

        assert_eq!(code, Some(1));
        assert_eq!(hal.operation_count(), 1);
        assert!(hal.has_operation(|op| matches!(
            op,
            Operation::Command { program, .. } if program == "robocopy"
        )));
        assert_eq!(hal.last_args(), Some(args(&["a", "b", "*.*"])));
    }

    #[test]
    fn fake_hal_reports_configured_code() {
        let hal = FakeHal::with_exit_code(Some(8));
        assert_eq!(hal.run("robocopy", &[]).unwrap(), Some(8));

        hal.set_exit_code(None);
        assert_eq!(hal.run("robocopy", &[]).unwrap(), None);
    }

    #[test]
    fn fake_hal_captures_stdin() {
        let hal = FakeHal::new();
        let streams = Streams::null().with_stdin(io::Cursor::new(b"y\n".to_vec()));
        hal.run_with_streams("robocopy", &[], streams).unwrap();

        assert_eq!(
            hal.operations(),
            vec![Operation::Command {
                program: "robocopy".to_string(),
                args: Vec::new(),
                stdin: b"y\n".to_vec(),
            }]
        );
    }

    #[test]
    fn clones_share_state() {
        let hal = FakeHal::new();
        let handle = hal.clone();
        hal.run("robocopy", &[]).unwrap();
        assert_eq!(handle.operation_count(), 1);

        handle.clear();
        assert_eq!(hal.operation_count(), 0);
    }
}
