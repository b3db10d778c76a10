use super::{ArgList, CommandArgs};
use crate::flags::{AttrFlags, CopyFlags, DirCopyFlags};
use serde::{Deserialize, Serialize};

/// Copy options (`/s`, `/e`, `/copy:`, `/mt:` ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyOptions {
    /// `/s` copies subdirectories, excluding empty ones.
    #[serde(rename = "s")]
    pub subdirs: bool,
    /// `/e` copies subdirectories, including empty ones.
    #[serde(rename = "e")]
    pub subdirs_with_empty: bool,
    /// `/lev:n` copies only the top n levels of the source tree.
    #[serde(rename = "lev")]
    pub levels: u32,
    /// `/z` restartable mode.
    #[serde(rename = "z")]
    pub restartable: bool,
    /// `/b` backup mode, overriding ACLs that would block access.
    #[serde(rename = "b")]
    pub backup: bool,
    /// `/zb` restartable mode, falling back to backup mode on access denied.
    #[serde(rename = "zb")]
    pub restartable_backup: bool,
    /// `/j` unbuffered I/O.
    #[serde(rename = "j")]
    pub unbuffered: bool,
    /// `/efsraw` copies encrypted files in EFS RAW mode.
    #[serde(rename = "efsraw")]
    pub efs_raw: bool,
    /// `/copy:` file properties to copy. The tool's own default is `DAT`.
    pub copy: CopyFlags,
    /// `/dcopy:` directory properties to copy. The tool's own default is `DA`.
    pub dcopy: DirCopyFlags,
    /// `/sec`, same as `/copy:DATS`.
    #[serde(rename = "sec")]
    pub security: bool,
    /// `/copyall`, same as `/copy:DATSOU`.
    #[serde(rename = "copyall")]
    pub copy_all: bool,
    /// `/nocopy`
    #[serde(rename = "nocopy")]
    pub no_copy: bool,
    /// `/secfix` fixes file security on all files, even skipped ones.
    #[serde(rename = "secfix")]
    pub sec_fix: bool,
    /// `/timfix` fixes file times on all files, even skipped ones.
    #[serde(rename = "timfix")]
    pub tim_fix: bool,
    /// `/purge` deletes destination entries missing from the source.
    pub purge: bool,
    /// `/mir`, same as `/e` plus `/purge`.
    #[serde(rename = "mir")]
    pub mirror: bool,
    /// `/mov` moves files.
    #[serde(rename = "mov")]
    pub move_files: bool,
    /// `/move` moves files and directories.
    #[serde(rename = "move")]
    pub move_all: bool,
    /// `/a+:` attributes added to copied files.
    #[serde(rename = "a+")]
    pub add_attributes: AttrFlags,
    /// `/a-:` attributes removed from copied files.
    #[serde(rename = "a-")]
    pub remove_attributes: AttrFlags,
    /// `/create` creates the tree with zero-length files only.
    pub create: bool,
    /// `/fat` uses 8.3 names for destination files.
    pub fat: bool,
    /// `/256` turns off support for paths longer than 256 characters.
    #[serde(rename = "256")]
    pub no_long_paths: bool,
    /// `/mon:n` reruns after more than n changes.
    #[serde(rename = "mon")]
    pub monitor_changes: u32,
    /// `/mot:m` reruns in m minutes if changed.
    #[serde(rename = "mot")]
    pub monitor_minutes: u32,
    /// `/rh:hhmm-hhmm` run hours.
    #[serde(rename = "rh")]
    pub run_hours: String,
    /// `/pf` checks run hours per file instead of per pass.
    #[serde(rename = "pf")]
    pub per_file_run_hours: bool,
    /// `/ipg:n` inter-packet gap in milliseconds.
    #[serde(rename = "ipg")]
    pub inter_packet_gap: u32,
    /// `/sj` copies junctions instead of their targets.
    #[serde(rename = "sj")]
    pub copy_junctions: bool,
    /// `/sl` copies symbolic links instead of their targets.
    #[serde(rename = "sl")]
    pub copy_symlinks: bool,
    /// `/mt:n` copy threads.
    #[serde(rename = "mt")]
    pub threads: u32,
    /// `/nodcopy`
    #[serde(rename = "nodcopy")]
    pub no_dir_copy: bool,
    /// `/nooffload` disables the copy offload mechanism.
    #[serde(rename = "nooffload")]
    pub no_offload: bool,
    /// `/compress` requests network compression.
    pub compress: bool,
    /// `/sparse` retains the sparse state of files.
    pub sparse: bool,
}

impl CommandArgs for CopyOptions {
    fn command_args(&self) -> Vec<String> {
        ArgList::new()
            .switch("s", self.subdirs)
            .switch("e", self.subdirs_with_empty)
            .number("lev", self.levels)
            .switch("z", self.restartable)
            .switch("b", self.backup)
            .switch("zb", self.restartable_backup)
            .switch("j", self.unbuffered)
            .switch("efsraw", self.efs_raw)
            .flags("copy", self.copy)
            .flags("dcopy", self.dcopy)
            .switch("sec", self.security)
            .switch("copyall", self.copy_all)
            .switch("nocopy", self.no_copy)
            .switch("secfix", self.sec_fix)
            .switch("timfix", self.tim_fix)
            .switch("purge", self.purge)
            .switch("mir", self.mirror)
            .switch("mov", self.move_files)
            .switch("move", self.move_all)
            .flags("a+", self.add_attributes)
            .flags("a-", self.remove_attributes)
            .switch("create", self.create)
            .switch("fat", self.fat)
            .switch("256", self.no_long_paths)
            .number("mon", self.monitor_changes)
            .number("mot", self.monitor_minutes)
            .text("rh", &self.run_hours)
            .switch("pf", self.per_file_run_hours)
            .number("ipg", self.inter_packet_gap)
            .switch("sj", self.copy_junctions)
            .switch("sl", self.copy_symlinks)
            .number("mt", self.threads)
            .switch("nodcopy", self.no_dir_copy)
            .switch("nooffload", self.no_offload)
            .switch("compress", self.compress)
            .switch("sparse", self.sparse)
            .finish()
    }
}
