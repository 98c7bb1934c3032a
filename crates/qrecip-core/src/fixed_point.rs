//! Fixed-point arithmetic for deterministic reciprocal computation
//!
//! Values are plain `i64` integers scaled by 2^28. Every product of two
//! fixed-point values is renormalised by a right shift of [`Q35_28::FRAC_BITS`]
//! so the binary point stays aligned at bit 28. Floating point appears only in
//! [`Q35_28::to_float`], which exists for display.

use core::{fmt, ops};

/// Q35.28 fixed-point number (35 integer bits, 28 fractional bits, 1 sign bit)
///
/// One unit in the last place is 2^-28 ≈ 3.7e-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Q35_28(i64);

impl Q35_28 {
    /// Number of fractional bits
    pub const FRAC_BITS: u32 = 28;
    /// Scale factor (2^28 = 268435456)
    pub const SCALE: i64 = 1 << Self::FRAC_BITS;
    /// Zero value
    pub const ZERO: Self = Self(0);
    /// One value
    pub const ONE: Self = Self(Self::SCALE);
    /// Two value, the constant term of the Newton update
    pub const TWO: Self = Self(2 * Self::SCALE);

    /// Create from raw scaled integer
    #[inline(always)]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw scaled integer
    #[inline(always)]
    pub const fn to_raw(self) -> i64 {
        self.0
    }

    /// Convert to float (display only)
    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Checked addition
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Multiply by a dimensionless integer; the scale is unchanged
    #[inline]
    pub const fn checked_scale(self, factor: i64) -> Option<Self> {
        match self.0.checked_mul(factor) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Absolute distance in ULPs
    #[inline]
    pub const fn ulps_from(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Q35_28 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_float(), f)
    }
}

impl ops::Sub for Q35_28 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Product renormalised by a right shift of [`Q35_28::FRAC_BITS`]
///
/// Unchecked: callers keep both operands small enough that the raw product
/// fits in `i64`. Use [`Q35_28::checked_scale`] for dimensionless factors.
impl ops::Mul for Q35_28 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self((self.0 * other.0) >> Self::FRAC_BITS)
    }
}

impl ops::Neg for Q35_28 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Type alias for easier use
pub type FixedPoint = Q35_28;
