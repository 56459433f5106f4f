//! Fixed-point ratios for flex factor arithmetic.
//!
//! Flex grow/shrink factors and the ratios derived from them are carried in
//! 22.10 fixed point so that free space distribution is deterministic and the
//! fractional pixel left over by one item can be handed to the next.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Signed 22.10 fixed-point number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Fixed(i32);

impl Fixed {
    /// Number of fractional bits (10 bits = 1/1024 precision)
    pub const FRACTIONAL_BITS: u32 = 10;

    /// Scale factor (2^10 = 1024)
    pub const SCALE: i32 = 1 << Self::FRACTIONAL_BITS;

    pub const ZERO: Self = Self(0);

    pub const ONE: Self = Self(Self::SCALE);

    /// Create from a raw 1/1024 value
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Create from whole pixels, saturating at the representable range.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self::saturate((value as i64) << Self::FRACTIONAL_BITS)
    }

    /// Create from a float, rounding to the nearest 1/1024.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        let scaled = (f64::from(value) * f64::from(Self::SCALE)).round();
        if scaled >= f64::from(i32::MAX) {
            Self(i32::MAX)
        } else if scaled <= f64::from(i32::MIN) {
            Self(i32::MIN)
        } else {
            Self(scaled as i32)
        }
    }

    /// Whole part, rounding toward negative infinity.
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRACTIONAL_BITS
    }

    /// Fractional part as a non-negative fixed value below `ONE`.
    #[inline]
    #[must_use]
    pub const fn frac(self) -> Self {
        Self(self.0 & (Self::SCALE - 1))
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Approximate float value, for diagnostics.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }

    /// Divide, returning `None` when `rhs` is zero.
    #[inline]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        let numerator = (self.0 as i64) << Self::FRACTIONAL_BITS;
        Some(Self::saturate(numerator / rhs.0 as i64))
    }

    #[inline]
    const fn saturate(value: i64) -> Self {
        if value > i32::MAX as i64 {
            Self(i32::MAX)
        } else if value < i32::MIN as i64 {
            Self(i32::MIN)
        } else {
            Self(value as i32)
        }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.to_f32())
    }
}

impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Fixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Mul for Fixed {
    type Output = Self;

    /// Multiplies in 64-bit and saturates back to the 22.10 range.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::saturate((i64::from(self.0) * i64::from(rhs.0)) >> Self::FRACTIONAL_BITS)
    }
}
