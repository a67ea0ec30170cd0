use crate::constants::*;
use crate::error::FlagsError;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Boundary conditions raised while computing a value.
///
/// Underflow is set when a result fell below the representable minimum,
/// overflow when it went past the maximum. Only the four combinations of the
/// two flags exist, ordered by inclusion, and `merge` is the join of that
/// lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct StatusFlags {
    underflow: bool,
    overflow: bool,
}

impl StatusFlags {
    pub const NONE: StatusFlags = StatusFlags::create(false, false);
    pub const UNDERFLOW: StatusFlags = StatusFlags::create(true, false);
    pub const OVERFLOW: StatusFlags = StatusFlags::create(false, true);
    pub const UNDERFLOW_AND_OVERFLOW: StatusFlags = StatusFlags::create(true, true);
    pub const BOTH: StatusFlags = StatusFlags::UNDERFLOW_AND_OVERFLOW;

    /// Every value, in `bits()` order.
    pub const ALL: [StatusFlags; 4] = [
        StatusFlags::NONE,
        StatusFlags::UNDERFLOW,
        StatusFlags::OVERFLOW,
        StatusFlags::UNDERFLOW_AND_OVERFLOW,
    ];

    pub const fn create(underflow: bool, overflow: bool) -> Self {
        Self {
            underflow,
            overflow,
        }
    }

    pub const fn is_overflow(self) -> bool {
        self.overflow
    }

    pub const fn is_underflow(self) -> bool {
        self.underflow
    }

    /// Neither boundary was crossed.
    pub const fn is_none(self) -> bool {
        !self.underflow && !self.overflow
    }

    pub const fn is_any(self) -> bool {
        !self.is_none()
    }

    pub const fn with_underflow(self, is: bool) -> Self {
        Self::create(is, self.overflow)
    }

    pub const fn with_overflow(self, is: bool) -> Self {
        Self::create(self.underflow, is)
    }

    /// Union of both flag sets. `NONE` is the identity.
    pub const fn merge(self, other: StatusFlags) -> Self {
        Self::create(
            self.underflow || other.underflow,
            self.overflow || other.overflow,
        )
    }

    /// True when every flag set in `other` is also set in `self`.
    pub const fn contains(self, other: StatusFlags) -> bool {
        (self.underflow || !other.underflow) && (self.overflow || !other.overflow)
    }

    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.underflow {
            bits |= FLAG_UNDERFLOW;
        }
        if self.overflow {
            bits |= FLAG_OVERFLOW;
        }
        bits
    }

    /// Decodes `bits()` output, dropping any bit outside `FLAG_MASK`.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self::create(bits & FLAG_UNDERFLOW != 0, bits & FLAG_OVERFLOW != 0)
    }

    pub fn from_bits(bits: u8) -> Result<Self, FlagsError> {
        if bits & !FLAG_MASK != 0 {
            return Err(FlagsError::UnknownBits(bits));
        }
        Ok(Self::from_bits_truncate(bits))
    }

    /// Human readable form, identical to `Display`.
    ///
    /// An empty set renders as `NOTHING`. Otherwise each set flag is
    /// written as a space followed by its name, underflow first, so the
    /// text starts with a space: `" UNDERFLOW OVERFLOW"`.
    pub fn to_text(self) -> String {
        self.to_string()
    }

    // Set flags without the leading space, `NOTHING` for the empty set.
    fn label(self) -> &'static str {
        match (self.underflow, self.overflow) {
            (false, false) => TOKEN_NOTHING,
            (true, false) => TOKEN_UNDERFLOW,
            (false, true) => TOKEN_OVERFLOW,
            (true, true) => TOKEN_UNDERFLOW_OVERFLOW,
        }
    }
}

impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "{}", TOKEN_NOTHING)
        } else {
            write!(f, " {}", self.label())
        }
    }
}

impl fmt::Debug for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = match (self.underflow, self.overflow) {
            (false, false) => "NONE",
            (true, false) => TOKEN_UNDERFLOW,
            (false, true) => TOKEN_OVERFLOW,
            (true, true) => "UNDERFLOW | OVERFLOW",
        };
        write!(f, "StatusFlags({})", set)
    }
}

// Set inclusion. UNDERFLOW and OVERFLOW are incomparable.
impl PartialOrd for StatusFlags {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.contains(*other), other.contains(*self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            (false, false) => None,
        }
    }
}

impl FromStr for StatusFlags {
    type Err = FlagsError;

    /// Accepts `to_text()` output, with or without the leading space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FlagsError::Empty);
        }
        if trimmed == TOKEN_NOTHING {
            return Ok(StatusFlags::NONE);
        }

        trimmed
            .split_whitespace()
            .try_fold(StatusFlags::NONE, |flags, token| match token {
                TOKEN_UNDERFLOW => Ok(flags.with_underflow(true)),
                TOKEN_OVERFLOW => Ok(flags.with_overflow(true)),
                other => Err(FlagsError::UnknownToken(other.to_string())),
            })
    }
}

impl From<(bool, bool)> for StatusFlags {
    fn from((underflow, overflow): (bool, bool)) -> Self {
        StatusFlags::create(underflow, overflow)
    }
}

impl From<StatusFlags> for (bool, bool) {
    fn from(flags: StatusFlags) -> Self {
        (flags.underflow, flags.overflow)
    }
}

impl BitOr for StatusFlags {
    type Output = StatusFlags;

    fn bitor(self, rhs: StatusFlags) -> StatusFlags {
        self.merge(rhs)
    }
}

impl BitOrAssign for StatusFlags {
    fn bitor_assign(&mut self, rhs: StatusFlags) {
        *self = self.merge(rhs);
    }
}

impl FromIterator<StatusFlags> for StatusFlags {
    fn from_iter<I: IntoIterator<Item = StatusFlags>>(iter: I) -> Self {
        iter.into_iter().fold(StatusFlags::NONE, StatusFlags::merge)
    }
}

impl Sum for StatusFlags {
    fn sum<I: Iterator<Item = StatusFlags>>(iter: I) -> Self {
        iter.collect()
    }
}

impl Serialize for StatusFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for StatusFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatusFlagsVisitor;

        impl<'de> Visitor<'de> for StatusFlagsVisitor {
            type Value = StatusFlags;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("flag names such as \"UNDERFLOW OVERFLOW\", or flag bits")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse::<StatusFlags>().map_err(E::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let bits = u8::try_from(v)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))?;
                StatusFlags::from_bits(bits).map_err(E::custom)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let bits = u8::try_from(v)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))?;
                StatusFlags::from_bits(bits).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(StatusFlagsVisitor)
    }
}
