//! Single-letter flag groups used by switches such as `/copy:DAT` or `/ia:RH`.
//!
//! Each domain is a closed enum implementing [`Flag`] with a declared-order letter table.
//! [`FlagSet`] packs any subset of a domain into a `u16` and renders it by walking that
//! table, so letter order never depends on bit positions.

mod attr;
mod copy;
mod dcopy;
mod unit;

pub use attr::{AttrFlag, AttrFlags};
pub use copy::{CopyFlag, CopyFlags};
pub use dcopy::{DirCopyFlag, DirCopyFlags};
pub use unit::{SizeUnit, SizedQuantity};

use crate::HalError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, Not};
use std::str::FromStr;

/// Unsigned integer usable as a raw flag container.
pub trait Bits:
    Copy
    + Eq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    const ZERO: Self;
}

macro_rules! impl_bits {
    ($($t:ty),*) => {
        $(impl Bits for $t {
            const ZERO: Self = 0;
        })*
    };
}

impl_bits!(u8, u16, u32, u64, u128, usize);

/// True when any bit of `other` is set in `flag`.
pub fn has<T: Bits>(flag: T, other: T) -> bool {
    (flag & other) != T::ZERO
}

pub fn set<T: Bits>(flag: &mut T, other: T) {
    *flag = *flag | other;
}

pub fn clear<T: Bits>(flag: &mut T, other: T) {
    *flag = *flag & !other;
}

pub fn toggle<T: Bits>(flag: &mut T, other: T) {
    *flag = *flag ^ other;
}

/// A closed set of single-bit flags with a fixed external letter per flag.
pub trait Flag: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every flag of the domain with its letter, in rendering order.
    const DECLARED: &'static [(Self, char)];

    fn bit(self) -> u16;

    fn letter(self) -> char {
        Self::DECLARED
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, letter)| *letter)
            .unwrap_or('?')
    }

    fn from_letter(letter: char) -> Option<Self> {
        Self::DECLARED
            .iter()
            .find(|(_, l)| l.eq_ignore_ascii_case(&letter))
            .map(|(flag, _)| *flag)
    }
}

/// Any subset of the flags of one domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet<F: Flag> {
    bits: u16,
    _domain: PhantomData<F>,
}

impl<F: Flag> FlagSet<F> {
    pub const fn empty() -> Self {
        Self::from_raw(0)
    }

    pub(crate) const fn from_raw(bits: u16) -> Self {
        Self {
            bits,
            _domain: PhantomData,
        }
    }

    /// Build a set from raw bits, dropping bits no flag of the domain declares.
    pub fn from_bits_truncate(bits: u16) -> Self {
        let known = F::DECLARED
            .iter()
            .fold(0u16, |acc, (flag, _)| acc | flag.bit());
        Self::from_raw(bits & known)
    }

    pub fn all() -> Self {
        Self::from_bits_truncate(u16::MAX)
    }

    pub const fn bits(self) -> u16 {
        self.bits
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn has(self, other: impl Into<Self>) -> bool {
        has(self.bits, other.into().bits)
    }

    pub fn set(&mut self, other: impl Into<Self>) {
        set(&mut self.bits, other.into().bits);
    }

    pub fn clear(&mut self, other: impl Into<Self>) {
        clear(&mut self.bits, other.into().bits);
    }

    pub fn toggle(&mut self, other: impl Into<Self>) {
        toggle(&mut self.bits, other.into().bits);
    }

    /// Flags present in the set, in declared order.
    pub fn iter(self) -> impl Iterator<Item = F> {
        F::DECLARED
            .iter()
            .map(|(flag, _)| *flag)
            .filter(move |flag| self.has(*flag))
    }
}

impl<F: Flag> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flag> From<F> for FlagSet<F> {
    fn from(flag: F) -> Self {
        Self::from_raw(flag.bit())
    }
}

impl<F: Flag> BitOr for FlagSet<F> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.bits | rhs.bits)
    }
}

impl<F: Flag> BitOr<F> for FlagSet<F> {
    type Output = Self;

    fn bitor(self, rhs: F) -> Self {
        self | Self::from(rhs)
    }
}

impl<F: Flag> BitOrAssign<F> for FlagSet<F> {
    fn bitor_assign(&mut self, rhs: F) {
        self.set(rhs);
    }
}

impl<F: Flag> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, flag| acc | flag)
    }
}

impl<F: Flag> fmt::Display for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, letter) in F::DECLARED {
            if self.has(*flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

impl<F: Flag> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:?})", self.to_string())
    }
}

impl<F: Flag> FromStr for FlagSet<F> {
    type Err = HalError;

    /// Parse a letter string such as `"DAT"`. Letters are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(|c| {
                F::from_letter(c).ok_or_else(|| {
                    HalError::Parse(format!("unknown flag letter '{}' in \"{}\"", c, s))
                })
            })
            .collect()
    }
}

impl<'de, F: Flag> Deserialize<'de> for FlagSet<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let letters = String::deserialize(deserializer)?;
        letters.parse().map_err(serde::de::Error::custom)
    }
}

impl<F: Flag> Serialize for FlagSet<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `Flag | Flag` for a concrete domain enum.
macro_rules! impl_flag_ops {
    ($flag:ty) => {
        impl ::std::ops::BitOr for $flag {
            type Output = $crate::flags::FlagSet<$flag>;

            fn bitor(self, rhs: Self) -> Self::Output {
                $crate::flags::FlagSet::<$flag>::from(self) | rhs
            }
        }
    };
}

pub(crate) use impl_flag_ops;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_mask_helpers() {
        let mut bits: u16 = 0;
        set(&mut bits, 0b0101);
        assert!(has(bits, 0b0001));
        assert!(!has(bits, 0b0010));

        clear(&mut bits, 0b0001);
        assert_eq!(bits, 0b0100);

        toggle(&mut bits, 0b0110);
        assert_eq!(bits, 0b0010);

        let mut wide: u64 = 1 << 40;
        toggle(&mut wide, 1 << 40);
        assert_eq!(wide, 0);
    }

    #[test]
    fn set_clear_toggle_on_flag_set() {
        let mut flags = CopyFlags::empty();
        flags.set(CopyFlag::Data);
        flags.set(CopyFlag::Owner);
        assert_eq!(flags.to_string(), "DO");

        flags.clear(CopyFlag::Data);
        assert_eq!(flags.to_string(), "O");

        flags.toggle(CopyFlag::Owner | CopyFlag::Timestamps);
        assert_eq!(flags.to_string(), "T");
        assert!(flags.has(CopyFlag::Timestamps));
        assert!(!flags.has(CopyFlag::Owner));
    }

    #[test]
    fn empty_set_renders_nothing() {
        assert_eq!(AttrFlags::empty().to_string(), "");
        assert_eq!(DirCopyFlags::default().to_string(), "");
        assert!(CopyFlags::empty().is_empty());
    }

    fn assert_every_subset_renders<F: Flag>() {
        let declared = F::DECLARED;
        for mask in 0u32..(1 << declared.len()) {
            let chosen: Vec<(F, char)> = declared
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, entry)| *entry)
                .collect();
            let flags: FlagSet<F> = chosen.iter().map(|(flag, _)| *flag).collect();
            let expected: String = chosen.iter().map(|(_, letter)| *letter).collect();

            assert_eq!(flags.to_string(), expected, "mask {:#b}", mask);
            assert_eq!(expected.parse::<FlagSet<F>>().unwrap(), flags);
        }
    }

    #[test]
    fn every_subset_renders_in_declared_order() {
        assert_every_subset_renders::<AttrFlag>();
        assert_every_subset_renders::<CopyFlag>();
        assert_every_subset_renders::<DirCopyFlag>();
    }

    #[test]
    fn from_bits_truncate_drops_undeclared_bits() {
        let flags = DirCopyFlags::from_bits_truncate(0xFFFF);
        assert_eq!(flags, DirCopyFlags::all());
        assert_eq!(flags.to_string(), "DATEX");
    }

    #[test]
    fn parse_accepts_any_case_and_order() {
        let flags: CopyFlags = "tad".parse().unwrap();
        assert_eq!(flags, CopyFlags::default_set());
        assert_eq!(flags.to_string(), "DAT");

        let dup: AttrFlags = "RRH".parse().unwrap();
        assert_eq!(dup.to_string(), "RH");
    }

    #[test]
    fn parse_rejects_unknown_letter() {
        let err = "DQ".parse::<CopyFlags>().unwrap_err();
        assert!(matches!(err, HalError::Parse(_)));
    }

    #[test]
    fn serializes_as_letter_string() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Group {
            copy: CopyFlags,
            xa: AttrFlags,
        }

        let group = Group {
            copy: CopyFlag::Timestamps | CopyFlag::Data,
            xa: AttrFlags::empty(),
        };
        let text = toml::to_string(&group).unwrap();
        assert_eq!(text, "copy = \"DT\"\nxa = \"\"\n");
        assert_eq!(toml::from_str::<Group>(&text).unwrap(), group);
    }

    #[test]
    fn iter_yields_declared_order() {
        let flags = AttrFlag::Offline | AttrFlag::ReadOnly | AttrFlag::Hidden;
        let collected: Vec<AttrFlag> = flags.iter().collect();
        assert_eq!(
            collected,
            vec![AttrFlag::ReadOnly, AttrFlag::Hidden, AttrFlag::Offline]
        );
        assert_eq!(collected.into_iter().collect::<AttrFlags>(), flags);
    }
}
