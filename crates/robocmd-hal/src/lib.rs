//! Typed builder for the `robocopy` command line.
//!
//! Option groups model the tool's switches, [`Robocopy`] renders them into an argument
//! vector, and the [`hal`] module owns the process boundary so callers can test without
//! spawning the real executable.

pub mod error;
pub mod exit_code;
pub mod flags;
pub mod hal;
pub mod options;
pub mod robocopy;

pub use error::{HalError, HalResult};
pub use exit_code::{describe, ExitCode};
pub use flags::{
    AttrFlag, AttrFlags, CopyFlag, CopyFlags, DirCopyFlag, DirCopyFlags, Flag, FlagSet,
    SizeUnit, SizedQuantity,
};
pub use hal::{FakeHal, Operation, ProcessOps, Streams, SystemHal};
pub use options::{
    CommandArgs, CopyOptions, FileSelectionOptions, JobOptions, LoggingOptions, RetryOptions,
    ThrottlingOptions,
};
pub use robocopy::{Robocopy, ROBOCOPY_PROGRAM};
