//! The command descriptor: paths, attached option groups, and the captured exit code.

use crate::hal::{ProcessOps, Streams};
use crate::options::{
    CommandArgs, CopyOptions, FileSelectionOptions, JobOptions, LoggingOptions, RetryOptions,
    ThrottlingOptions,
};
use crate::{ExitCode, HalResult};
use std::process::Command;

/// Executable name, resolved through the search path.
pub const ROBOCOPY_PROGRAM: &str = "robocopy";

/// Status recorded when the process ended without an exit code.
const NO_STATUS: i32 = -1;

/// One invocation of the tool.
///
/// Source, destination and file pattern always render first, in that order. Attached
/// option groups follow in a fixed order: copy, throttling, file selection, retry,
/// logging, job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Robocopy {
    source: String,
    destination: String,
    file: String,
    copy: Option<CopyOptions>,
    throttling: Option<ThrottlingOptions>,
    selection: Option<FileSelectionOptions>,
    retry: Option<RetryOptions>,
    logging: Option<LoggingOptions>,
    job: Option<JobOptions>,
    exit_code: Option<ExitCode>,
}

impl Robocopy {
    /// `file` is passed through as given; the tool itself treats `*.*` as the default.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn set_copy_options(&mut self, opts: CopyOptions) -> &mut Self {
        self.copy = Some(opts);
        self
    }

    pub fn set_throttling_options(&mut self, opts: ThrottlingOptions) -> &mut Self {
        self.throttling = Some(opts);
        self
    }

    pub fn set_file_selection_options(&mut self, opts: FileSelectionOptions) -> &mut Self {
        self.selection = Some(opts);
        self
    }

    pub fn set_retry_options(&mut self, opts: RetryOptions) -> &mut Self {
        self.retry = Some(opts);
        self
    }

    pub fn set_logging_options(&mut self, opts: LoggingOptions) -> &mut Self {
        self.logging = Some(opts);
        self
    }

    pub fn set_job_options(&mut self, opts: JobOptions) -> &mut Self {
        self.job = Some(opts);
        self
    }

    pub fn copy_options(&self) -> Option<&CopyOptions> {
        self.copy.as_ref()
    }

    pub fn throttling_options(&self) -> Option<&ThrottlingOptions> {
        self.throttling.as_ref()
    }

    pub fn file_selection_options(&self) -> Option<&FileSelectionOptions> {
        self.selection.as_ref()
    }

    pub fn retry_options(&self) -> Option<&RetryOptions> {
        self.retry.as_ref()
    }

    pub fn logging_options(&self) -> Option<&LoggingOptions> {
        self.logging.as_ref()
    }

    pub fn job_options(&self) -> Option<&JobOptions> {
        self.job.as_ref()
    }

    /// Full argument vector, positional paths first.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = vec![
            self.source.clone(),
            self.destination.clone(),
            self.file.clone(),
        ];
        let groups: [Option<&dyn CommandArgs>; 6] = [
            self.copy.as_ref().map(|o| o as &dyn CommandArgs),
            self.throttling.as_ref().map(|o| o as &dyn CommandArgs),
            self.selection.as_ref().map(|o| o as &dyn CommandArgs),
            self.retry.as_ref().map(|o| o as &dyn CommandArgs),
            self.logging.as_ref().map(|o| o as &dyn CommandArgs),
            self.job.as_ref().map(|o| o as &dyn CommandArgs),
        ];
        for group in groups.into_iter().flatten() {
            args.extend(group.command_args());
        }
        args
    }

    /// A ready-to-spawn command for callers that manage the process themselves.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(ROBOCOPY_PROGRAM);
        cmd.args(self.command_args());
        cmd
    }

    /// Run the tool to completion and record its exit code.
    ///
    /// Only a failure to start the process is an error. Every exit status, including
    /// failure codes, comes back as an [`ExitCode`].
    pub fn run<H: ProcessOps + ?Sized>(
        &mut self,
        hal: &H,
        streams: Streams,
    ) -> HalResult<ExitCode> {
        let args = self.command_args();
        log::debug!("{} {}", ROBOCOPY_PROGRAM, args.join(" "));

        let code = hal.run_with_streams(ROBOCOPY_PROGRAM, &args, streams)?;
        let exit_code = ExitCode::from_code(code.unwrap_or(NO_STATUS));
        if exit_code.is_failure() {
            log::warn!(
                "{} exited with {}: {}",
                ROBOCOPY_PROGRAM,
                exit_code.code(),
                exit_code
            );
        } else {
            log::info!(
                "{} exited with {}: {}",
                ROBOCOPY_PROGRAM,
                exit_code.code(),
                exit_code
            );
        }

        self.exit_code = Some(exit_code);
        Ok(exit_code)
    }

    /// Exit code of the last [`run`](Self::run), if it has happened.
    pub fn exit_code(&self) -> Option<ExitCode> {
        self.exit_code
    }
}
