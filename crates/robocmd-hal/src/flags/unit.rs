use crate::HalError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Suffix for sizes and rates in `/iorate:`, `/iomaxsize:`, `/threshold:` and `/lfsm:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl SizeUnit {
    pub const fn letter(self) -> char {
        match self {
            SizeUnit::Kilobytes => 'k',
            SizeUnit::Megabytes => 'm',
            SizeUnit::Gigabytes => 'g',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'k' => Some(SizeUnit::Kilobytes),
            'm' => Some(SizeUnit::Megabytes),
            'g' => Some(SizeUnit::Gigabytes),
            _ => None,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A magnitude with an optional k/m/g suffix. Without a unit the magnitude is in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizedQuantity {
    pub magnitude: u64,
    pub unit: Option<SizeUnit>,
}

impl SizedQuantity {
    pub const fn new(magnitude: u64, unit: Option<SizeUnit>) -> Self {
        Self { magnitude, unit }
    }

    pub const fn bytes(magnitude: u64) -> Self {
        Self::new(magnitude, None)
    }

    pub const fn kilobytes(magnitude: u64) -> Self {
        Self::new(magnitude, Some(SizeUnit::Kilobytes))
    }

    pub const fn megabytes(magnitude: u64) -> Self {
        Self::new(magnitude, Some(SizeUnit::Megabytes))
    }

    pub const fn gigabytes(magnitude: u64) -> Self {
        Self::new(magnitude, Some(SizeUnit::Gigabytes))
    }

    /// Both components at zero. Such a quantity never produces a switch.
    pub const fn is_unset(&self) -> bool {
        self.magnitude == 0 && self.unit.is_none()
    }
}

impl fmt::Display for SizedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.magnitude)?;
        if let Some(unit) = self.unit {
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

impl FromStr for SizedQuantity {
    type Err = HalError;

    /// Parse `"524288"`, `"512k"`, `"10M"` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, unit) = match s.chars().last() {
            Some(last) if last.is_ascii_alphabetic() => {
                let unit = SizeUnit::from_letter(last).ok_or_else(|| {
                    HalError::Parse(format!("unknown size unit '{}' in \"{}\"", last, s))
                })?;
                (&s[..s.len() - last.len_utf8()], Some(unit))
            }
            _ => (s, None),
        };
        let magnitude = digits
            .parse::<u64>()
            .map_err(|e| HalError::Parse(format!("invalid size \"{}\": {}", s, e)))?;
        Ok(Self::new(magnitude, unit))
    }
}

impl Serialize for SizedQuantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SizedQuantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuantityVisitor;

        impl<'de> Visitor<'de> for QuantityVisitor {
            type Value = SizedQuantity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a byte count or a string such as \"512k\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(SizedQuantity::bytes(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(SizedQuantity::bytes)
                    .map_err(|_| E::custom(format!("size must not be negative: {}", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(QuantityVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_requires_both_components_zero() {
        assert!(SizedQuantity::default().is_unset());
        assert!(!SizedQuantity::bytes(1).is_unset());
        assert!(!SizedQuantity::kilobytes(0).is_unset());
    }

    #[test]
    fn renders_magnitude_and_suffix() {
        assert_eq!(SizedQuantity::kilobytes(512).to_string(), "512k");
        assert_eq!(SizedQuantity::megabytes(10).to_string(), "10m");
        assert_eq!(SizedQuantity::gigabytes(2).to_string(), "2g");
        assert_eq!(SizedQuantity::bytes(524288).to_string(), "524288");
    }

    #[test]
    fn parses_suffixes() {
        assert_eq!(
            "10M".parse::<SizedQuantity>().unwrap(),
            SizedQuantity::megabytes(10)
        );
        assert_eq!(
            " 4096 ".parse::<SizedQuantity>().unwrap(),
            SizedQuantity::bytes(4096)
        );
        assert!("10t".parse::<SizedQuantity>().is_err());
        assert!("k".parse::<SizedQuantity>().is_err());
        assert!("-1".parse::<SizedQuantity>().is_err());
    }

    #[test]
    fn serializes_as_text_and_reads_back() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Throttle {
            iorate: SizedQuantity,
            threshold: SizedQuantity,
        }

        let throttle = Throttle {
            iorate: SizedQuantity::megabytes(50),
            threshold: SizedQuantity::bytes(4096),
        };
        let text = toml::to_string(&throttle).unwrap();
        assert_eq!(text, "iorate = \"50m\"\nthreshold = \"4096\"\n");
        assert_eq!(toml::from_str::<Throttle>(&text).unwrap(), throttle);
    }
}
