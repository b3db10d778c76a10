use super::{ArgList, CommandArgs};
use serde::{Deserialize, Serialize};

/// Job file handling (`/job:`, `/save:` ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobOptions {
    /// `/job:name` reads parameters from a job file saved earlier with `/save`.
    pub job: String,
    /// `/save:name` writes parameters to a job file. Always rendered last so every
    /// preceding switch ends up in the file.
    pub save: String,
    /// `/quit` stops after processing the command line.
    pub quit: bool,
    /// `/nosd` no source directory is specified.
    #[serde(rename = "nosd")]
    pub no_source_dir: bool,
    /// `/nodd` no destination directory is specified.
    #[serde(rename = "nodd")]
    pub no_dest_dir: bool,
    /// `/if` includes the specified files.
    #[serde(rename = "if")]
    pub include_files: bool,
}

impl CommandArgs for JobOptions {
    fn command_args(&self) -> Vec<String> {
        ArgList::new()
            .text("job", &self.job)
            .switch("quit", self.quit)
            .switch("nosd", self.no_source_dir)
            .switch("nodd", self.no_dest_dir)
            .switch("if", self.include_files)
            .text("save", &self.save)
            .finish()
    }
}
