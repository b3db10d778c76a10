use super::{ArgList, CommandArgs};
use crate::flags::SizedQuantity;
use serde::{Deserialize, Serialize};

/// Retry behaviour (`/r:`, `/w:`, `/lfsm` ...).
///
/// `retries` and `wait_secs` render even when zero. `None` leaves the tool's defaults
/// of one million retries and 30 seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryOptions {
    /// `/r:n` retries on failed copies.
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    /// `/w:n` seconds between retries.
    #[serde(rename = "w", skip_serializing_if = "Option::is_none")]
    pub wait_secs: Option<u32>,
    /// `/reg` saves `/r` and `/w` as registry defaults.
    #[serde(rename = "reg")]
    pub save_defaults: bool,
    /// `/tbd` waits for share names to be defined (retry error 67).
    #[serde(rename = "tbd")]
    pub wait_for_share_names: bool,
    /// `/lfsm` low free space mode.
    #[serde(rename = "lfsm")]
    pub low_free_space: bool,
    /// `/lfsm:n[kmg]` floor size for low free space mode.
    #[serde(rename = "lfsm_floor")]
    pub low_free_space_floor: SizedQuantity,
}

impl CommandArgs for RetryOptions {
    fn command_args(&self) -> Vec<String> {
        ArgList::new()
            .optional("r", self.retries)
            .optional("w", self.wait_secs)
            .switch("reg", self.save_defaults)
            .switch("tbd", self.wait_for_share_names)
            .switch("lfsm", self.low_free_space)
            .sized("lfsm", &self.low_free_space_floor)
            .finish()
    }
}
