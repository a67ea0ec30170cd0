use super::AluOutput;
use crate::StatusFlags;
use log::trace;
use std::fmt;

/// Integer arithmetic that reports boundary crossings instead of panicking.
///
/// Every operation returns the wrapped result. Overflow is flagged when the
/// exact result is above `MAX`, underflow when it is below `MIN`.
pub trait Alu: Copy + fmt::Display {
    const ZERO: Self;
    const ONE: Self;

    // Arithmetic
    fn alu_add(self, rhs: Self) -> AluOutput<Self>;
    fn alu_sub(self, rhs: Self) -> AluOutput<Self>;
    fn alu_mul(self, rhs: Self) -> AluOutput<Self>;
    fn alu_neg(self) -> AluOutput<Self>;

    // Unit Operations
    fn alu_inc(self) -> AluOutput<Self> {
        self.alu_add(Self::ONE)
    }

    fn alu_dec(self) -> AluOutput<Self> {
        self.alu_sub(Self::ONE)
    }
}

/// Sums `values` starting from zero, keeping every flag raised on the way.
pub fn accumulate<T, I>(values: I) -> AluOutput<T>
where
    T: Alu,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .fold(AluOutput::exact(T::ZERO), |acc, value| {
            acc.then(|sum| sum.alu_add(value))
        })
}

fn report<T>(value: T, flags: StatusFlags, op: fmt::Arguments<'_>) -> AluOutput<T> {
    if flags.is_any() {
        trace!("{}:{}", op, flags);
    }
    AluOutput::new(value, flags)
}

macro_rules! impl_alu_unsigned {
    ($($t:ty),*) => {$(
        impl Alu for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn alu_add(self, rhs: Self) -> AluOutput<Self> {
                let (value, crossed) = self.overflowing_add(rhs);
                report(value, StatusFlags::create(false, crossed), format_args!("add {} {}", self, rhs))
            }

            fn alu_sub(self, rhs: Self) -> AluOutput<Self> {
                let (value, crossed) = self.overflowing_sub(rhs);
                report(value, StatusFlags::create(crossed, false), format_args!("sub {} {}", self, rhs))
            }

            fn alu_mul(self, rhs: Self) -> AluOutput<Self> {
                let (value, crossed) = self.overflowing_mul(rhs);
                report(value, StatusFlags::create(false, crossed), format_args!("mul {} {}", self, rhs))
            }

            // Any non-zero value negates below zero.
            fn alu_neg(self) -> AluOutput<Self> {
                let (value, crossed) = self.overflowing_neg();
                report(value, StatusFlags::create(crossed, false), format_args!("neg {}", self))
            }
        }
    )*};
}

macro_rules! impl_alu_signed {
    ($($t:ty),*) => {$(
        impl Alu for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn alu_add(self, rhs: Self) -> AluOutput<Self> {
                let (value, crossed) = self.overflowing_add(rhs);
                let flags = StatusFlags::create(crossed && rhs < 0, crossed && rhs > 0);
                report(value, flags, format_args!("add {} {}", self, rhs))
            }

            fn alu_sub(self, rhs: Self) -> AluOutput<Self> {
                let (value, crossed) = self.overflowing_sub(rhs);
                let flags = StatusFlags::create(crossed && rhs > 0, crossed && rhs < 0);
                report(value, flags, format_args!("sub {} {}", self, rhs))
            }

            fn alu_mul(self, rhs: Self) -> AluOutput<Self> {
                let (value, crossed) = self.overflowing_mul(rhs);
                let negative = (self < 0) != (rhs < 0);
                let flags = StatusFlags::create(crossed && negative, crossed && !negative);
                report(value, flags, format_args!("mul {} {}", self, rhs))
            }

            // Only MIN can cross, and -MIN is MAX + 1.
            fn alu_neg(self) -> AluOutput<Self> {
                let (value, crossed) = self.overflowing_neg();
                report(value, StatusFlags::create(false, crossed), format_args!("neg {}", self))
            }
        }
    )*};
}

impl_alu_unsigned!(u8, u16, u32, u64, u128, usize);
impl_alu_signed!(i8, i16, i32, i64, i128, isize);
