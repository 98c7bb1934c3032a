//! Newton-Raphson reciprocal of odd integers in Q35.28
//!
//! The engine seeds `x0 = 2^28 >> bit_length(d)`, which places `d * x0` in
//! `[0.5, 1)`, then applies a fixed number of rounds of
//!
//! ```text
//! x' = (x * (2*2^28 - ((B * x) >> 28))) >> 28      where B = d << 28
//! ```
//!
//! using only multiplies, a subtraction and shifts. Starting below `1/d`, the
//! iterate increases monotonically and never overshoots, so every operand is
//! non-negative and both shifts truncate toward zero. With `d < 2^28` the
//! largest intermediate is below 2^58, so `i64` holds the whole computation.

use log::debug;

use crate::error::{RecipError, Result};
use crate::fixed_point::{FixedPoint, Q35_28};

/// Number of Newton rounds applied by default
pub const NEWTON_ROUNDS: u32 = 40;

/// Number of right shifts needed to reduce `value` to zero
#[inline(always)]
pub const fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// Odd positive divisor accepted by [`ReciprocalEngine`]
///
/// The bit length is capped at [`Q35_28::FRAC_BITS`]; beyond that the seed
/// shifts out to zero and no number of rounds can recover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Divisor(u64);

impl Divisor {
    /// Largest accepted divisor (2^28 - 1)
    pub const MAX: u64 = (1 << Q35_28::FRAC_BITS) - 1;

    /// Validate an odd positive divisor
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(RecipError::invalid_divisor(value, "must be positive"));
        }
        if value & 1 == 0 {
            return Err(RecipError::invalid_divisor(value, "must be odd"));
        }
        if value > Self::MAX {
            return Err(RecipError::invalid_divisor(
                value,
                format!("bit length exceeds {} fractional bits", Q35_28::FRAC_BITS),
            ));
        }
        Ok(Self(value))
    }

    /// Divisor `2i + 1` for series index `i`
    pub fn from_index(index: u64) -> Result<Self> {
        let value = index
            .checked_mul(2)
            .and_then(|v| v.checked_add(1))
            .ok_or_else(|| RecipError::overflow(format!("divisor for index {}", index)))?;
        Self::new(value)
    }

    /// Plain integer value
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Bit length of the divisor, the seeding shift
    #[inline(always)]
    pub const fn bit_length(self) -> u32 {
        bit_length(self.0)
    }

    /// Divisor lifted into the fixed-point domain (`B = d << 28`)
    #[inline(always)]
    pub const fn lifted(self) -> FixedPoint {
        Q35_28::from_raw((self.0 as i64) << Q35_28::FRAC_BITS)
    }
}

/// Initial estimate `2^28 >> bit_length(d)`
#[inline(always)]
pub const fn seed(divisor: Divisor) -> FixedPoint {
    Q35_28::from_raw(Q35_28::SCALE >> divisor.bit_length())
}

/// One update `x * (2 - B * x)`, each product renormalised by `Mul`
#[inline(always)]
fn newton_step(x: FixedPoint, lifted: FixedPoint) -> FixedPoint {
    x * (Q35_28::TWO - lifted * x)
}

/// Fixed-round Newton-Raphson reciprocal engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReciprocalEngine {
    rounds: u32,
}

impl Default for ReciprocalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReciprocalEngine {
    /// Engine running [`NEWTON_ROUNDS`] rounds
    pub const fn new() -> Self {
        Self {
            rounds: NEWTON_ROUNDS,
        }
    }

    /// Engine running a custom number of rounds
    pub fn with_rounds(rounds: u32) -> Result<Self> {
        if rounds == 0 {
            return Err(RecipError::invalid_parameter(
                "rounds",
                rounds.to_string(),
                "> 0",
            ));
        }
        debug!("reciprocal engine configured for {} Newton rounds", rounds);
        Ok(Self { rounds })
    }

    /// Number of Newton rounds per reciprocal
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Fixed-point approximation of `1 / divisor`
    pub fn reciprocal(&self, divisor: Divisor) -> FixedPoint {
        let lifted = divisor.lifted();
        let mut x = seed(divisor);
        for _ in 0..self.rounds {
            x = newton_step(x, lifted);
        }
        x
    }

    /// Validate `value` and compute its reciprocal
    pub fn try_reciprocal(&self, value: u64) -> Result<FixedPoint> {
        Ok(self.reciprocal(Divisor::new(value)?))
    }

    /// Every intermediate estimate `x1..=x_rounds`, computed lazily
    pub fn iterations(&self, divisor: Divisor) -> NewtonSteps {
        NewtonSteps {
            lifted: divisor.lifted(),
            current: seed(divisor),
            remaining: self.rounds,
        }
    }

    /// Rounds after which the estimate stops changing, if within the budget
    ///
    /// Diagnostic only; [`Self::reciprocal`] always runs every round.
    pub fn converged_after(&self, divisor: Divisor) -> Option<u32> {
        let mut previous = seed(divisor);
        for (round, estimate) in (0u32..).zip(self.iterations(divisor)) {
            if estimate == previous {
                return Some(round);
            }
            previous = estimate;
        }
        None
    }
}

/// Lazy sequence of Newton estimates for one divisor
#[derive(Debug, Clone)]
pub struct NewtonSteps {
    lifted: FixedPoint,
    current: FixedPoint,
    remaining: u32,
}

impl Iterator for NewtonSteps {
    type Item = FixedPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = newton_step(self.current, self.lifted);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for NewtonSteps {}
