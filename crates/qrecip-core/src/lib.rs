//! Integer-only reciprocal approximation and Leibniz series accumulation
//!
//! This crate computes `1/d` for odd `d` in Q35.28 fixed point with a fixed
//! number of Newton-Raphson rounds, and accumulates `4 * Σ (-1)^i / (2i + 1)`
//! from those reciprocals. No floating point is used outside display helpers,
//! so every result is bit-reproducible.
//!
//! ```
//! use qrecip_core::{Divisor, ReciprocalEngine, SeriesAccumulator};
//!
//! let third = ReciprocalEngine::new().reciprocal(Divisor::new(3)?);
//! assert_eq!(third.to_raw(), (1 << 28) / 3);
//!
//! let pi = SeriesAccumulator::new().compute_series(100_000)?;
//! assert!((pi.to_float() - core::f64::consts::PI).abs() < 1e-3);
//! # Ok::<(), qrecip_core::RecipError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod error;
pub mod fixed_point;
pub mod reciprocal;
pub mod report;
pub mod series;

// Re-export essential types
pub use error::{RecipError, Result};
pub use fixed_point::{FixedPoint, Q35_28};
pub use reciprocal::{bit_length, seed, Divisor, NewtonSteps, ReciprocalEngine, NEWTON_ROUNDS};
pub use report::{Report, BOUNDS, FLOAT_WEIGHT};
pub use series::{
    SeriesAccumulator, SeriesParams, SeriesTerm, SeriesTerms, DEFAULT_TERMS, MAX_TERMS,
    SERIES_MULTIPLIER,
};

/// Number of fractional bits in every fixed-point value
pub const FRAC_BITS: u32 = Q35_28::FRAC_BITS;

/// Run the reference computation: [`DEFAULT_TERMS`] terms, default engine
pub fn reference_run() -> Result<Report> {
    let sum = SeriesAccumulator::new().compute_series(DEFAULT_TERMS)?;
    Report::from_sum(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_run() {
        let report = reference_run().unwrap();
        assert_eq!(report.sum.to_raw(), 843_311_876);
        assert_eq!(report.answer, 31_415_814_672_064_152);
    }
}
