//! Process execution trait and caller-supplied standard streams.

use crate::HalResult;
use std::fmt;
use std::io::{Read, Write};

/// Standard streams for a child process. Unset streams bind to the null device.
#[derive(Default)]
pub struct Streams {
    pub stdin: Option<Box<dyn Read + Send>>,
    pub stdout: Option<Box<dyn Write + Send>>,
    pub stderr: Option<Box<dyn Write + Send>>,
}

impl Streams {
    /// All three streams on the null device.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn with_stdin(mut self, reader: impl Read + Send + 'static) -> Self {
        self.stdin = Some(Box::new(reader));
        self
    }

    pub fn with_stdout(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stdout = Some(Box::new(writer));
        self
    }

    pub fn with_stderr(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stderr = Some(Box::new(writer));
        self
    }
}

impl fmt::Debug for Streams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Streams")
            .field("stdin", &self.stdin.is_some())
            .field("stdout", &self.stdout.is_some())
            .field("stderr", &self.stderr.is_some())
            .finish()
    }
}

/// External command runner.
pub trait ProcessOps {
    /// Run `program` with `args` verbatim and block until it exits.
    ///
    /// Returns the exit status code, or `None` when the process ended without one
    /// (killed by a signal). A non-zero code is not an error at this level.
    fn run_with_streams(
        &self,
        program: &str,
        args: &[String],
        streams: Streams,
    ) -> HalResult<Option<i32>>;

    fn run(&self, program: &str, args: &[String]) -> HalResult<Option<i32>> {
        self.run_with_streams(program, args, Streams::null())
    }
}
