//! Underflow/overflow status flags for arithmetic results.
//!
//! [`StatusFlags`] is a small `Copy` value holding the two boundary
//! conditions, and [`alu`] provides integer operations that report them
//! alongside the wrapped result.

pub mod alu;
pub mod constants;
pub mod error;
pub mod flags;

pub use alu::{Alu, AluOutput};
pub use error::FlagsError;
pub use flags::StatusFlags;
