//! Exit status classification.
//!
//! Codes 0-3 and 5-7 are outcomes, not failures. 4 is never produced; 8 means at least
//! one file failed to copy.

use std::fmt;

const UNRECOGNIZED: &str = "Unknown exit code";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCode {
    /// 0: nothing copied, nothing failed, nothing mismatched.
    AlreadyExist,
    /// 1
    AllFilesCopied,
    /// 2
    AdditionalFilesOnDest,
    /// 3
    SomeFilesCopied,
    /// 5
    SomeFilesMismatched,
    /// 6
    AdditionalAndMismatchedFiles,
    /// 7
    FilesCopiedMismatchedAndAdditional,
    /// 8
    SeveralFilesDidntCopy,
    /// Any other status, including `-1` for a process that ended without one.
    Unrecognized(i32),
}

impl ExitCode {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ExitCode::AlreadyExist,
            1 => ExitCode::AllFilesCopied,
            2 => ExitCode::AdditionalFilesOnDest,
            3 => ExitCode::SomeFilesCopied,
            5 => ExitCode::SomeFilesMismatched,
            6 => ExitCode::AdditionalAndMismatchedFiles,
            7 => ExitCode::FilesCopiedMismatchedAndAdditional,
            8 => ExitCode::SeveralFilesDidntCopy,
            other => ExitCode::Unrecognized(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ExitCode::AlreadyExist => 0,
            ExitCode::AllFilesCopied => 1,
            ExitCode::AdditionalFilesOnDest => 2,
            ExitCode::SomeFilesCopied => 3,
            ExitCode::SomeFilesMismatched => 5,
            ExitCode::AdditionalAndMismatchedFiles => 6,
            ExitCode::FilesCopiedMismatchedAndAdditional => 7,
            ExitCode::SeveralFilesDidntCopy => 8,
            ExitCode::Unrecognized(code) => code,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExitCode::AlreadyExist => {
                "No files were copied. No failure was encountered. No files were mismatched. \
                 The files already exist in the destination directory; therefore, the copy \
                 operation was skipped."
            }
            ExitCode::AllFilesCopied => "All files were copied successfully.",
            ExitCode::AdditionalFilesOnDest => {
                "There are some additional files in the destination directory that aren't \
                 present in the source directory. No files were copied."
            }
            ExitCode::SomeFilesCopied => {
                "Some files were copied. Additional files were present. No failure was \
                 encountered."
            }
            ExitCode::SomeFilesMismatched => {
                "Some files were copied. Some files were mismatched. No failure was encountered."
            }
            ExitCode::AdditionalAndMismatchedFiles => {
                "Additional files and mismatched files exist. No files were copied and no \
                 failures were encountered meaning that the files already exist in the \
                 destination directory."
            }
            ExitCode::FilesCopiedMismatchedAndAdditional => {
                "Files were copied, a file mismatch was present, and additional files were \
                 present."
            }
            ExitCode::SeveralFilesDidntCopy => "Several files didn't copy.",
            ExitCode::Unrecognized(_) => UNRECOGNIZED,
        }
    }

    /// Code 8, or anything outside the documented table.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            ExitCode::SeveralFilesDidntCopy | ExitCode::Unrecognized(_)
        )
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode::from_code(code)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Description for a raw exit status.
pub fn describe(code: i32) -> &'static str {
    ExitCode::from_code(code).description()
}
