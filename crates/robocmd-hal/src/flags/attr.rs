use super::{impl_flag_ops, Flag, FlagSet};

/// File attribute letters accepted by `/a+:`, `/a-:`, `/ia:` and `/xa:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum AttrFlag {
    ReadOnly = 1 << 0,
    Archive = 1 << 1,
    System = 1 << 2,
    Hidden = 1 << 3,
    Compressed = 1 << 4,
    NotContentIndexed = 1 << 5,
    Encrypted = 1 << 6,
    Temporary = 1 << 7,
    /// Only meaningful for `/a-:`, `/ia:` and `/xa:`.
    Offline = 1 << 8,
}

impl Flag for AttrFlag {
    const DECLARED: &'static [(Self, char)] = &[
        (AttrFlag::ReadOnly, 'R'),
        (AttrFlag::Archive, 'A'),
        (AttrFlag::System, 'S'),
        (AttrFlag::Hidden, 'H'),
        (AttrFlag::Compressed, 'C'),
        (AttrFlag::NotContentIndexed, 'N'),
        (AttrFlag::Encrypted, 'E'),
        (AttrFlag::Temporary, 'T'),
        (AttrFlag::Offline, 'O'),
    ];

    fn bit(self) -> u16 {
        self as u16
    }
}

impl_flag_ops!(AttrFlag);

pub type AttrFlags = FlagSet<AttrFlag>;
