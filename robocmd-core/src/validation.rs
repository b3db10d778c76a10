//! Opt-in checks for switch combinations the tool rejects or ignores.
//!
//! The command builder itself renders whatever it is given. These checks run only when
//! a caller asks for them.

use crate::errors::RoboError;
use robocmd_hal::{CopyOptions, FileSelectionOptions, JobOptions, LoggingOptions, Robocopy};
use std::fmt;

pub const MAX_THREADS: u32 = 128;

/// One problem with a command, tied to the switch that causes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub switch: &'static str,
    pub message: String,
}

impl Finding {
    fn new(switch: &'static str, message: impl Into<String>) -> Self {
        Self {
            switch,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.switch, self.message)
    }
}

/// All findings for `cmd`, in option-group order. Empty means nothing to report.
pub fn validate(cmd: &Robocopy) -> Vec<Finding> {
    let mut findings = Vec::new();
    let job = cmd.job_options();
    check_paths(cmd, job, &mut findings);
    if let Some(copy) = cmd.copy_options() {
        check_copy(copy, &mut findings);
    }
    if let Some(selection) = cmd.file_selection_options() {
        check_selection(selection, &mut findings);
    }
    if let Some(logging) = cmd.logging_options() {
        check_logging(logging, &mut findings);
    }
    if let Some(job) = job {
        check_job(job, &mut findings);
    }
    findings
}

/// Like [`validate`], but any finding is an error.
pub fn ensure_valid(cmd: &Robocopy) -> Result<(), RoboError> {
    let findings = validate(cmd);
    if findings.is_empty() {
        return Ok(());
    }
    let joined = findings
        .iter()
        .map(Finding::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(RoboError::ValidationFailed(joined))
}

fn check_paths(cmd: &Robocopy, job: Option<&JobOptions>, findings: &mut Vec<Finding>) {
    let no_source = job.is_some_and(|j| j.no_source_dir);
    let no_dest = job.is_some_and(|j| j.no_dest_dir);
    if cmd.source().trim().is_empty() && !no_source {
        findings.push(Finding::new("source", "source path is empty"));
    }
    if cmd.destination().trim().is_empty() && !no_dest {
        findings.push(Finding::new("destination", "destination path is empty"));
    }
}

fn check_copy(copy: &CopyOptions, findings: &mut Vec<Finding>) {
    if copy.threads > MAX_THREADS {
        findings.push(Finding::new(
            "/mt",
            format!("thread count {} is above {}", copy.threads, MAX_THREADS),
        ));
    }
    if copy.threads != 0 && copy.inter_packet_gap != 0 {
        findings.push(Finding::new("/mt", "cannot be combined with /ipg"));
    }
    if copy.threads != 0 && copy.efs_raw {
        findings.push(Finding::new("/mt", "cannot be combined with /efsraw"));
    }
    if copy.subdirs && copy.subdirs_with_empty {
        findings.push(Finding::new("/s", "conflicts with /e"));
    }
    if copy.move_files && copy.move_all {
        findings.push(Finding::new("/mov", "conflicts with /move"));
    }
    if copy.no_copy && !copy.copy.is_empty() {
        findings.push(Finding::new("/nocopy", "conflicts with /copy"));
    }
    if !copy.run_hours.is_empty() && !is_run_hours(&copy.run_hours) {
        findings.push(Finding::new(
            "/rh",
            format!("expected hhmm-hhmm, got \"{}\"", copy.run_hours),
        ));
    }
    if copy.per_file_run_hours && copy.run_hours.is_empty() {
        findings.push(Finding::new("/pf", "has no effect without /rh"));
    }
}

fn check_selection(selection: &FileSelectionOptions, findings: &mut Vec<Finding>) {
    if selection.min_size != 0 && selection.max_size != 0 && selection.min_size > selection.max_size
    {
        findings.push(Finding::new(
            "/min",
            format!(
                "minimum size {} is above maximum size {}",
                selection.min_size, selection.max_size
            ),
        ));
    }
    if selection.archive_only && selection.archive_reset {
        findings.push(Finding::new("/a", "conflicts with /m"));
    }
}

fn check_logging(logging: &LoggingOptions, findings: &mut Vec<Finding>) {
    let targets = [
        &logging.log,
        &logging.log_append,
        &logging.unicode_log,
        &logging.unicode_log_append,
    ];
    let set = targets.iter().filter(|t| !t.is_empty()).count();
    if set > 1 {
        findings.push(Finding::new(
            "/log",
            "only one of /log, /log+, /unilog, /unilog+ may be given",
        ));
    }
    if logging.tee && set == 0 {
        findings.push(Finding::new("/tee", "has no effect without a log file"));
    }
}

fn check_job(job: &JobOptions, findings: &mut Vec<Finding>) {
    if !job.job.is_empty() && job.job.eq_ignore_ascii_case(&job.save) {
        findings.push(Finding::new(
            "/save",
            format!("overwrites the job file \"{}\" being read", job.job),
        ));
    }
}

/// `hhmm-hhmm` with hours 00-23 and minutes 00-59.
fn is_run_hours(value: &str) -> bool {
    fn is_hhmm(part: &str) -> bool {
        if part.len() != 4 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let hours: u32 = part[..2].parse().unwrap_or(99);
        let minutes: u32 = part[2..].parse().unwrap_or(99);
        hours < 24 && minutes < 60
    }
    match value.split_once('-') {
        Some((start, end)) => is_hhmm(start) && is_hhmm(end),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robocmd_hal::CopyFlag;

    fn with_copy(copy: CopyOptions) -> Robocopy {
        let mut cmd = Robocopy::new("src", "dst", "*.*");
        cmd.set_copy_options(copy);
        cmd
    }

    #[test]
    fn plain_command_is_clean() {
        let cmd = Robocopy::new("src", "dst", "*.*");
        assert!(validate(&cmd).is_empty());
        assert!(ensure_valid(&cmd).is_ok());
    }

    #[test]
    fn thread_limits() {
        let cmd = with_copy(CopyOptions {
            threads: 129,
            ..Default::default()
        });
        assert_eq!(validate(&cmd)[0].switch, "/mt");

        let cmd = with_copy(CopyOptions {
            threads: 128,
            ..Default::default()
        });
        assert!(validate(&cmd).is_empty());
    }

    #[test]
    fn threads_conflict_with_ipg_and_efsraw() {
        let cmd = with_copy(CopyOptions {
            threads: 8,
            inter_packet_gap: 10,
            efs_raw: true,
            ..Default::default()
        });
        let messages: Vec<String> = validate(&cmd).iter().map(|f| f.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "/mt: cannot be combined with /ipg",
                "/mt: cannot be combined with /efsraw"
            ]
        );
    }

    #[test]
    fn nocopy_with_copy_flags() {
        let cmd = with_copy(CopyOptions {
            no_copy: true,
            copy: CopyFlag::Data.into(),
            ..Default::default()
        });
        assert_eq!(validate(&cmd).len(), 1);
    }

    #[test]
    fn run_hours_format() {
        assert!(is_run_hours("2200-0600"));
        assert!(is_run_hours("0000-2359"));
        assert!(!is_run_hours("2400-0600"));
        assert!(!is_run_hours("22:00-06:00"));
        assert!(!is_run_hours("2200"));

        let cmd = with_copy(CopyOptions {
            run_hours: "10pm-6am".to_string(),
            ..Default::default()
        });
        assert_eq!(validate(&cmd)[0].switch, "/rh");
    }

    #[test]
    fn several_log_targets() {
        let mut cmd = Robocopy::new("src", "dst", "*.*");
        cmd.set_logging_options(LoggingOptions {
            log: "a.log".to_string(),
            unicode_log_append: "b.log".to_string(),
            ..Default::default()
        });
        let err = ensure_valid(&cmd).unwrap_err();
        let RoboError::ValidationFailed(message) = err else {
            panic!("expected ValidationFailed, got {:?}", err);
        };
        assert!(message.contains("/log"));
    }

    #[test]
    fn empty_paths_allowed_with_nosd_nodd() {
        let mut cmd = Robocopy::new("", "", "*.*");
        assert_eq!(validate(&cmd).len(), 2);

        cmd.set_job_options(JobOptions {
            job: "Nightly".to_string(),
            no_source_dir: true,
            no_dest_dir: true,
            ..Default::default()
        });
        assert!(validate(&cmd).is_empty());
    }

    #[test]
    fn save_over_running_job() {
        let mut cmd = Robocopy::new("src", "dst", "*.*");
        cmd.set_job_options(JobOptions {
            job: "Nightly".to_string(),
            save: "nightly".to_string(),
            ..Default::default()
        });
        assert_eq!(validate(&cmd)[0].switch, "/save");
    }

    #[test]
    fn size_bounds() {
        let mut cmd = Robocopy::new("src", "dst", "*.*");
        cmd.set_file_selection_options(FileSelectionOptions {
            min_size: 2048,
            max_size: 1024,
            ..Default::default()
        });
        assert_eq!(validate(&cmd)[0].switch, "/min");
    }
}
