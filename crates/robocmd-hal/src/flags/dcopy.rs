use super::{impl_flag_ops, Flag, FlagSet};

/// Directory properties selected by `/dcopy:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum DirCopyFlag {
    Data = 1 << 0,
    Attributes = 1 << 1,
    Timestamps = 1 << 2,
    ExtendedAttributes = 1 << 3,
    SkipAltStreams = 1 << 4,
}

impl Flag for DirCopyFlag {
    const DECLARED: &'static [(Self, char)] = &[
        (DirCopyFlag::Data, 'D'),
        (DirCopyFlag::Attributes, 'A'),
        (DirCopyFlag::Timestamps, 'T'),
        (DirCopyFlag::ExtendedAttributes, 'E'),
        (DirCopyFlag::SkipAltStreams, 'X'),
    ];

    fn bit(self) -> u16 {
        self as u16
    }
}

impl_flag_ops!(DirCopyFlag);

pub type DirCopyFlags = FlagSet<DirCopyFlag>;

impl FlagSet<DirCopyFlag> {
    /// What the tool copies for directories when `/dcopy` is not given (`DA`).
    pub const fn default_set() -> Self {
        Self::from_raw(DirCopyFlag::Data as u16 | DirCopyFlag::Attributes as u16)
    }
}
