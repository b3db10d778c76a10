use super::{ArgList, CommandArgs};
use crate::flags::SizedQuantity;
use serde::{Deserialize, Serialize};

/// I/O throttling (`/iomaxsize:`, `/iorate:`, `/threshold:`).
///
/// Values are bytes unless a k/m/g unit is given. The tool never throttles below
/// 524288 bytes per second, whatever is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThrottlingOptions {
    /// Max I/O size per read/write cycle.
    #[serde(rename = "iomaxsize")]
    pub io_max_size: SizedQuantity,
    /// Requested I/O rate per second.
    #[serde(rename = "iorate")]
    pub io_rate: SizedQuantity,
    /// File size threshold for throttling.
    pub threshold: SizedQuantity,
}

impl CommandArgs for ThrottlingOptions {
    fn command_args(&self) -> Vec<String> {
        ArgList::new()
            .sized("iomaxsize", &self.io_max_size)
            .sized("iorate", &self.io_rate)
            .sized("threshold", &self.threshold)
            .finish()
    }
}
