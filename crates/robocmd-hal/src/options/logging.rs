use super::{ArgList, CommandArgs};
use serde::{Deserialize, Serialize};

/// Output and log file settings (`/v`, `/np`, `/log:` ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingOptions {
    /// `/l` list only, nothing is copied, deleted or time stamped.
    #[serde(rename = "l")]
    pub list_only: bool,
    /// `/x` reports all extra files.
    #[serde(rename = "x")]
    pub report_extra: bool,
    /// `/v` verbose output including skipped files.
    #[serde(rename = "v")]
    pub verbose: bool,
    /// `/ts` source time stamps.
    #[serde(rename = "ts")]
    pub timestamps: bool,
    /// `/fp` full path names.
    #[serde(rename = "fp")]
    pub full_paths: bool,
    /// `/bytes` sizes as bytes.
    pub bytes: bool,
    /// `/ns`
    #[serde(rename = "ns")]
    pub no_size: bool,
    /// `/nc`
    #[serde(rename = "nc")]
    pub no_class: bool,
    /// `/nfl`
    #[serde(rename = "nfl")]
    pub no_file_list: bool,
    /// `/ndl`
    #[serde(rename = "ndl")]
    pub no_dir_list: bool,
    /// `/np` hides the progress percentage.
    #[serde(rename = "np")]
    pub no_progress: bool,
    /// `/eta`
    pub eta: bool,
    /// `/log:file` overwrites the log file.
    pub log: String,
    /// `/log+:file` appends to the log file.
    #[serde(rename = "log+")]
    pub log_append: String,
    /// `/unilog:file` overwrites the log file as Unicode.
    #[serde(rename = "unilog")]
    pub unicode_log: String,
    /// `/unilog+:file` appends to the log file as Unicode.
    #[serde(rename = "unilog+")]
    pub unicode_log_append: String,
    /// `/tee` writes to the console as well as the log file.
    pub tee: bool,
    /// `/njh` no job header.
    #[serde(rename = "njh")]
    pub no_job_header: bool,
    /// `/njs` no job summary.
    #[serde(rename = "njs")]
    pub no_job_summary: bool,
    /// `/unicode`
    pub unicode: bool,
}

impl LoggingOptions {
    /// No file list, no header, no summary, no progress.
    pub fn quiet() -> Self {
        Self {
            no_file_list: true,
            no_dir_list: true,
            no_progress: true,
            no_job_header: true,
            no_job_summary: true,
            ..Default::default()
        }
    }
}

impl CommandArgs for LoggingOptions {
    fn command_args(&self) -> Vec<String> {
        ArgList::new()
            .switch("l", self.list_only)
            .switch("x", self.report_extra)
            .switch("v", self.verbose)
            .switch("ts", self.timestamps)
            .switch("fp", self.full_paths)
            .switch("bytes", self.bytes)
            .switch("ns", self.no_size)
            .switch("nc", self.no_class)
            .switch("nfl", self.no_file_list)
            .switch("ndl", self.no_dir_list)
            .switch("np", self.no_progress)
            .switch("eta", self.eta)
            .text("log", &self.log)
            .text("log+", &self.log_append)
            .text("unilog", &self.unicode_log)
            .text("unilog+", &self.unicode_log_append)
            .switch("tee", self.tee)
            .switch("njh", self.no_job_header)
            .switch("njs", self.no_job_summary)
            .switch("unicode", self.unicode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(LoggingOptions::default().command_args().is_empty());
    }

    fn emitted(apply: fn(&mut LoggingOptions)) -> Vec<String> {
        let mut opts = LoggingOptions::default();
        apply(&mut opts);
        opts.command_args()
    }

    #[test]
    fn each_field_emits_one_token() {
        assert_eq!(emitted(|o| o.list_only = true), ["/l"]);
        assert_eq!(emitted(|o| o.report_extra = true), ["/x"]);
        assert_eq!(emitted(|o| o.verbose = true), ["/v"]);
        assert_eq!(emitted(|o| o.timestamps = true), ["/ts"]);
        assert_eq!(emitted(|o| o.full_paths = true), ["/fp"]);
        assert_eq!(emitted(|o| o.bytes = true), ["/bytes"]);
        assert_eq!(emitted(|o| o.no_size = true), ["/ns"]);
        assert_eq!(emitted(|o| o.no_class = true), ["/nc"]);
        assert_eq!(emitted(|o| o.no_file_list = true), ["/nfl"]);
        assert_eq!(emitted(|o| o.no_dir_list = true), ["/ndl"]);
        assert_eq!(emitted(|o| o.no_progress = true), ["/np"]);
        assert_eq!(emitted(|o| o.eta = true), ["/eta"]);
        assert_eq!(emitted(|o| o.log = "a.log".to_string()), ["/log:a.log"]);
        assert_eq!(
            emitted(|o| o.log_append = "a.log".to_string()),
            ["/log+:a.log"]
        );
        assert_eq!(
            emitted(|o| o.unicode_log = "u.log".to_string()),
            ["/unilog:u.log"]
        );
        assert_eq!(
            emitted(|o| o.unicode_log_append = "u.log".to_string()),
            ["/unilog+:u.log"]
        );
        assert_eq!(emitted(|o| o.tee = true), ["/tee"]);
        assert_eq!(emitted(|o| o.no_job_header = true), ["/njh"]);
        assert_eq!(emitted(|o| o.no_job_summary = true), ["/njs"]);
        assert_eq!(emitted(|o| o.unicode = true), ["/unicode"]);
    }

    #[test]
    fn quiet_preset() {
        assert_eq!(
            LoggingOptions::quiet().command_args(),
            vec!["/nfl", "/ndl", "/np", "/njh", "/njs"]
        );
    }

    #[test]
    fn log_path_with_spaces_stays_one_token() {
        let opts = LoggingOptions {
            log: r"C:\Program Files\logs\copy.log".to_string(),
            ..Default::default()
        };
        assert_eq!(
            opts.command_args(),
            vec![r"/log:C:\Program Files\logs\copy.log"]
        );
    }
}
