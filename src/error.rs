use std::error::Error;
use std::fmt;

/// Failure to turn text or raw bits into a `StatusFlags`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagsError {
    Empty,
    UnknownToken(String),
    UnknownBits(u8),
}

impl fmt::Display for FlagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagsError::Empty => write!(f, "flag text is empty"),
            FlagsError::UnknownToken(token) => write!(f, "unknown flag token '{}'", token),
            FlagsError::UnknownBits(bits) => write!(f, "unknown flag bits {:#010b}", bits),
        }
    }
}

impl Error for FlagsError {}
