use super::{ArgList, CommandArgs};
use crate::flags::AttrFlags;
use serde::{Deserialize, Serialize};

/// File selection (`/xf`, `/xd`, `/ia:`, `/maxage:` ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSelectionOptions {
    /// `/a` only files with the Archive attribute set.
    #[serde(rename = "a")]
    pub archive_only: bool,
    /// `/m` like `/a`, and resets the Archive attribute.
    #[serde(rename = "m")]
    pub archive_reset: bool,
    /// `/ia:` only files with any of these attributes.
    #[serde(rename = "ia")]
    pub include_attributes: AttrFlags,
    /// `/xa:` excludes files with any of these attributes.
    #[serde(rename = "xa")]
    pub exclude_attributes: AttrFlags,
    /// `/xf <name>...` excluded file names or paths, wildcards allowed.
    #[serde(rename = "xf")]
    pub exclude_files: Vec<String>,
    /// `/xd <dir>...` excluded directory names or paths.
    #[serde(rename = "xd")]
    pub exclude_dirs: Vec<String>,
    /// `/xc` excludes changed files.
    #[serde(rename = "xc")]
    pub exclude_changed: bool,
    /// `/xn` excludes source files newer than the destination.
    #[serde(rename = "xn")]
    pub exclude_newer: bool,
    /// `/xo` excludes source files older than the destination.
    #[serde(rename = "xo")]
    pub exclude_older: bool,
    /// `/xx` excludes extra files present only in the destination.
    #[serde(rename = "xx")]
    pub exclude_extra: bool,
    /// `/xl` excludes lonely files present only in the source.
    #[serde(rename = "xl")]
    pub exclude_lonely: bool,
    /// `/im` includes modified files.
    #[serde(rename = "im")]
    pub include_modified: bool,
    /// `/is` includes same files.
    #[serde(rename = "is")]
    pub include_same: bool,
    /// `/it` includes tweaked files.
    #[serde(rename = "it")]
    pub include_tweaked: bool,
    /// `/max:n` maximum file size in bytes.
    #[serde(rename = "max")]
    pub max_size: u64,
    /// `/min:n` minimum file size in bytes.
    #[serde(rename = "min")]
    pub min_size: u64,
    /// `/maxage:n` days, or a YYYYMMDD date when n >= 1900.
    #[serde(rename = "maxage")]
    pub max_age: u32,
    /// `/minage:n` days, or a YYYYMMDD date when n >= 1900.
    #[serde(rename = "minage")]
    pub min_age: u32,
    /// `/maxlad:n` maximum last access date.
    #[serde(rename = "maxlad")]
    pub max_last_access: u32,
    /// `/minlad:n` minimum last access date.
    #[serde(rename = "minlad")]
    pub min_last_access: u32,
    /// `/xj` excludes junction points.
    #[serde(rename = "xj")]
    pub exclude_junctions: bool,
    /// `/fft` assumes FAT file times.
    #[serde(rename = "fft")]
    pub fat_file_times: bool,
    /// `/dst` compensates for one-hour DST differences.
    #[serde(rename = "dst")]
    pub dst_compensation: bool,
    /// `/xjd` excludes directory junction points.
    #[serde(rename = "xjd")]
    pub exclude_dir_junctions: bool,
    /// `/xjf` excludes file junction points.
    #[serde(rename = "xjf")]
    pub exclude_file_junctions: bool,
}

impl CommandArgs for FileSelectionOptions {
    fn command_args(&self) -> Vec<String> {
        ArgList::new()
            .switch("a", self.archive_only)
            .switch("m", self.archive_reset)
            .flags("ia", self.include_attributes)
            .flags("xa", self.exclude_attributes)
            .list("xf", &self.exclude_files)
            .list("xd", &self.exclude_dirs)
            .switch("xc", self.exclude_changed)
            .switch("xn", self.exclude_newer)
            .switch("xo", self.exclude_older)
            .switch("xx", self.exclude_extra)
            .switch("xl", self.exclude_lonely)
            .switch("im", self.include_modified)
            .switch("is", self.include_same)
            .switch("it", self.include_tweaked)
            .number("max", self.max_size)
            .number("min", self.min_size)
            .number("maxage", self.max_age)
            .number("minage", self.min_age)
            .number("maxlad", self.max_last_access)
            .number("minlad", self.min_last_access)
            .switch("xj", self.exclude_junctions)
            .switch("fft", self.fat_file_times)
            .switch("dst", self.dst_compensation)
            .switch("xjd", self.exclude_dir_junctions)
            .switch("xjf", self.exclude_file_junctions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::AttrFlag;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_is_empty() {
        assert!(FileSelectionOptions::default().command_args().is_empty());
    }

    fn emitted(apply: fn(&mut FileSelectionOptions)) -> Vec<String> {
        let mut opts = FileSelectionOptions::default();
        apply(&mut opts);
        opts.command_args()
    }

    #[test]
    fn each_scalar_field_emits_one_token() {
        assert_eq!(emitted(|o| o.archive_only = true), ["/a"]);
        assert_eq!(emitted(|o| o.archive_reset = true), ["/m"]);
        assert_eq!(
            emitted(|o| o.include_attributes = "SH".parse().unwrap()),
            ["/ia:SH"]
        );
        assert_eq!(
            emitted(|o| o.exclude_attributes = AttrFlag::Temporary.into()),
            ["/xa:T"]
        );
        assert_eq!(emitted(|o| o.exclude_changed = true), ["/xc"]);
        assert_eq!(emitted(|o| o.exclude_newer = true), ["/xn"]);
        assert_eq!(emitted(|o| o.exclude_older = true), ["/xo"]);
        assert_eq!(emitted(|o| o.exclude_extra = true), ["/xx"]);
        assert_eq!(emitted(|o| o.exclude_lonely = true), ["/xl"]);
        assert_eq!(emitted(|o| o.include_modified = true), ["/im"]);
        assert_eq!(emitted(|o| o.include_same = true), ["/is"]);
        assert_eq!(emitted(|o| o.include_tweaked = true), ["/it"]);
        assert_eq!(emitted(|o| o.max_size = 5_000_000_000), ["/max:5000000000"]);
        assert_eq!(emitted(|o| o.min_size = 1024), ["/min:1024"]);
        assert_eq!(emitted(|o| o.max_age = 30), ["/maxage:30"]);
        assert_eq!(emitted(|o| o.min_age = 20240101), ["/minage:20240101"]);
        assert_eq!(emitted(|o| o.max_last_access = 90), ["/maxlad:90"]);
        assert_eq!(emitted(|o| o.min_last_access = 7), ["/minlad:7"]);
        assert_eq!(emitted(|o| o.exclude_junctions = true), ["/xj"]);
        assert_eq!(emitted(|o| o.fat_file_times = true), ["/fft"]);
        assert_eq!(emitted(|o| o.dst_compensation = true), ["/dst"]);
        assert_eq!(emitted(|o| o.exclude_dir_junctions = true), ["/xjd"]);
        assert_eq!(emitted(|o| o.exclude_file_junctions = true), ["/xjf"]);
    }

    #[test]
    fn lists_emit_switch_then_items_in_order() {
        let opts = FileSelectionOptions {
            exclude_files: strings(&["*.tmp", "*.bak", "thumbs.db"]),
            ..Default::default()
        };
        assert_eq!(
            opts.command_args(),
            vec!["/xf", "*.tmp", "*.bak", "thumbs.db"]
        );

        let opts = FileSelectionOptions {
            exclude_dirs: strings(&["node_modules", ".git"]),
            exclude_files: strings(&["*.log"]),
            ..Default::default()
        };
        assert_eq!(
            opts.command_args(),
            vec!["/xf", "*.log", "/xd", "node_modules", ".git"]
        );
    }
}
