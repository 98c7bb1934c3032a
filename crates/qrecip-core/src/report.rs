//! Four-line diagnostic report of a series run

use core::fmt;

use log::warn;

use crate::error::{RecipError, Result};
use crate::fixed_point::{FixedPoint, Q35_28};

/// `floor(10^16 / 2^28)`, converts a raw sum into a 16-digit decimal integer
pub const FLOAT_WEIGHT: i64 = 10_000_000_000_000_000 / Q35_28::SCALE;

/// Reference ceiling printed next to the answer
pub const BOUNDS: i64 = 1 << 62;

/// Presentation of a finished series sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Raw accumulated sum
    pub sum: FixedPoint,
    /// `FLOAT_WEIGHT * sum`
    pub answer: i64,
}

impl Report {
    /// Build the report, failing if `FLOAT_WEIGHT * sum` leaves the `i64` range
    pub fn from_sum(sum: FixedPoint) -> Result<Self> {
        let wide = i128::from(FLOAT_WEIGHT) * i128::from(sum.to_raw());
        let answer = i64::try_from(wide)
            .map_err(|_| RecipError::overflow(format!("answer = {} * {}", FLOAT_WEIGHT, sum.to_raw())))?;
        if answer.unsigned_abs() >= BOUNDS as u64 {
            warn!("answer {} reaches the 2^62 reference bound", answer);
        }
        Ok(Self { sum, answer })
    }

    /// Whether the answer stays strictly inside `±2^62`
    pub fn within_bounds(&self) -> bool {
        self.answer.unsigned_abs() < BOUNDS as u64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sum.to_float())?;
        writeln!(f, "float  {} {}", FLOAT_WEIGHT, self.sum.to_raw())?;
        writeln!(f, "answer {}", self.answer)?;
        write!(f, "bounds {}", BOUNDS)
    }
}
