use super::{impl_flag_ops, Flag, FlagSet};

/// File properties selected by `/copy:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CopyFlag {
    Data = 1 << 0,
    Attributes = 1 << 1,
    Timestamps = 1 << 2,
    /// Ignored by the tool when `/b` or `/zb` is used.
    SkipAltStreams = 1 << 3,
    Acl = 1 << 4,
    Owner = 1 << 5,
    Auditing = 1 << 6,
}

impl Flag for CopyFlag {
    const DECLARED: &'static [(Self, char)] = &[
        (CopyFlag::Data, 'D'),
        (CopyFlag::Attributes, 'A'),
        (CopyFlag::Timestamps, 'T'),
        (CopyFlag::SkipAltStreams, 'X'),
        (CopyFlag::Acl, 'S'),
        (CopyFlag::Owner, 'O'),
        (CopyFlag::Auditing, 'U'),
    ];

    fn bit(self) -> u16 {
        self as u16
    }
}

impl_flag_ops!(CopyFlag);

pub type CopyFlags = FlagSet<CopyFlag>;

impl FlagSet<CopyFlag> {
    /// What the tool copies when `/copy` is not given (`DAT`).
    pub const fn default_set() -> Self {
        Self::from_raw(
            CopyFlag::Data as u16 | CopyFlag::Attributes as u16 | CopyFlag::Timestamps as u16,
        )
    }
}
