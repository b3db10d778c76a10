//! TOML job profiles.
//!
//! A profile names the three positional paths and carries one optional table per
//! option group. Table keys are the tool's own switch names (`e`, `mt`, `xf`, `"log+"`).

use crate::errors::RoboError;
use robocmd_hal::{
    CopyOptions, FileSelectionOptions, JobOptions, LoggingOptions, RetryOptions, Robocopy,
    ThrottlingOptions,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_FILE_PATTERN: &str = "*.*";

fn default_file() -> String {
    DEFAULT_FILE_PATTERN.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub source: String,
    pub destination: String,
    #[serde(default = "default_file")]
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy: Option<CopyOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttling: Option<ThrottlingOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<FileSelectionOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobOptions>,
}

impl Profile {
    /// Build the command descriptor. Tables missing from the profile stay detached.
    pub fn into_robocopy(self) -> Robocopy {
        let mut cmd = Robocopy::new(self.source, self.destination, self.file);
        if let Some(opts) = self.copy {
            cmd.set_copy_options(opts);
        }
        if let Some(opts) = self.throttling {
            cmd.set_throttling_options(opts);
        }
        if let Some(opts) = self.selection {
            cmd.set_file_selection_options(opts);
        }
        if let Some(opts) = self.retry {
            cmd.set_retry_options(opts);
        }
        if let Some(opts) = self.logging {
            cmd.set_logging_options(opts);
        }
        if let Some(opts) = self.job {
            cmd.set_job_options(opts);
        }
        cmd
    }
}

pub fn parse_profile(toml_text: &str) -> Result<Profile, toml::de::Error> {
    toml::from_str(toml_text)
}

pub fn render_profile(profile: &Profile) -> Result<String, toml::ser::Error> {
    toml::to_string(profile)
}

pub fn load_profile(path: &Path) -> Result<Profile, RoboError> {
    let content = fs::read_to_string(path).map_err(|source| RoboError::ProfileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = parse_profile(&content).map_err(|source| RoboError::ProfileParse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded profile {}: {} -> {}",
        path.display(),
        profile.source,
        profile.destination
    );
    Ok(profile)
}
