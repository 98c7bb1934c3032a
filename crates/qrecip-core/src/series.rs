//! Alternating Leibniz series driven by the reciprocal engine
//!
//! Term `i` contributes `±multiplier * reciprocal(2i + 1)`, added for even `i`
//! and subtracted for odd `i`. With the default multiplier of 4 the sum
//! approaches π.

use log::{debug, trace};

use crate::error::{RecipError, Result};
use crate::fixed_point::{FixedPoint, Q35_28};
use crate::reciprocal::{Divisor, ReciprocalEngine, NEWTON_ROUNDS};

/// Dimensionless multiplier applied to every term
pub const SERIES_MULTIPLIER: i64 = 4;

/// Term count of the reference run
pub const DEFAULT_TERMS: u64 = 100_000;

/// Largest term count whose final divisor `2*count - 1` is still accepted
pub const MAX_TERMS: u64 = 1 << (Q35_28::FRAC_BITS - 1);

/// Parameters of a series run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SeriesParams {
    /// Number of terms to accumulate
    pub terms: u64,
    /// Newton rounds per reciprocal
    pub rounds: u32,
    /// Multiplier applied to every term
    pub multiplier: i64,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS,
            rounds: NEWTON_ROUNDS,
            multiplier: SERIES_MULTIPLIER,
        }
    }
}

impl SeriesParams {
    /// Check ranges and build the accumulator
    pub fn accumulator(&self) -> Result<SeriesAccumulator> {
        if self.terms > MAX_TERMS {
            return Err(RecipError::term_count(self.terms, MAX_TERMS));
        }
        if self.multiplier == 0 {
            return Err(RecipError::invalid_parameter(
                "multiplier",
                self.multiplier.to_string(),
                "non-zero",
            ));
        }
        let engine = ReciprocalEngine::with_rounds(self.rounds)?;
        Ok(SeriesAccumulator::with_engine(engine, self.multiplier))
    }
}

/// One evaluated term of the series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesTerm {
    /// Index `i`
    pub index: u64,
    /// Divisor `2i + 1`
    pub divisor: Divisor,
    /// Fixed-point reciprocal of the divisor
    pub reciprocal: FixedPoint,
    /// Scaled term with its alternating sign applied
    pub signed_term: FixedPoint,
}

/// Accumulates the alternating reciprocal series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesAccumulator {
    engine: ReciprocalEngine,
    multiplier: i64,
}

impl Default for SeriesAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesAccumulator {
    /// Accumulator with the default engine and multiplier 4
    pub const fn new() -> Self {
        Self::with_engine(ReciprocalEngine::new(), SERIES_MULTIPLIER)
    }

    /// Accumulator with a custom engine and multiplier
    pub const fn with_engine(engine: ReciprocalEngine, multiplier: i64) -> Self {
        Self { engine, multiplier }
    }

    /// Underlying reciprocal engine
    pub const fn engine(&self) -> &ReciprocalEngine {
        &self.engine
    }

    /// Lazily evaluate the first `count` terms
    pub fn terms(&self, count: u64) -> Result<SeriesTerms> {
        if count > MAX_TERMS {
            return Err(RecipError::term_count(count, MAX_TERMS));
        }
        Ok(SeriesTerms {
            engine: self.engine,
            multiplier: self.multiplier,
            next: 0,
            end: count,
        })
    }

    /// Sum of the first `count` terms
    pub fn compute_series(&self, count: u64) -> Result<FixedPoint> {
        self.compute_series_with(count, |_| {})
    }

    /// Sum of the first `count` terms, handing every term to `inspect` as it is added
    pub fn compute_series_with<F>(&self, count: u64, mut inspect: F) -> Result<FixedPoint>
    where
        F: FnMut(&SeriesTerm),
    {
        debug!(
            "accumulating {} terms ({} Newton rounds, multiplier {})",
            count,
            self.engine.rounds(),
            self.multiplier
        );
        let mut sum = Q35_28::ZERO;
        for term in self.terms(count)? {
            let term = term?;
            inspect(&term);
            sum = sum
                .checked_add(term.signed_term)
                .ok_or_else(|| RecipError::overflow(format!("series sum at term {}", term.index)))?;
        }
        debug!("series sum raw={} value={}", sum.to_raw(), sum);
        Ok(sum)
    }
}

/// Iterator over evaluated series terms
#[derive(Debug, Clone)]
pub struct SeriesTerms {
    engine: ReciprocalEngine,
    multiplier: i64,
    next: u64,
    end: u64,
}

impl SeriesTerms {
    fn evaluate(&self, index: u64) -> Result<SeriesTerm> {
        let divisor = Divisor::from_index(index)?;
        let reciprocal = self.engine.reciprocal(divisor);
        let scaled = reciprocal
            .checked_scale(self.multiplier)
            .ok_or_else(|| RecipError::overflow(format!("term {} scaling", index)))?;
        let signed_term = if index & 1 == 1 { -scaled } else { scaled };
        trace!("compute 1 / {}, res = {}", divisor.get(), reciprocal);
        Ok(SeriesTerm {
            index,
            divisor,
            reciprocal,
            signed_term,
        })
    }
}

impl Iterator for SeriesTerms {
    type Item = Result<SeriesTerm>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.evaluate(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recip(value: u64) -> FixedPoint {
        ReciprocalEngine::new().reciprocal(Divisor::new(value).unwrap())
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(SeriesAccumulator::new().compute_series(0).unwrap(), Q35_28::ZERO);
    }

    #[test]
    fn test_first_terms() {
        let acc = SeriesAccumulator::new();
        let one = acc.compute_series(1).unwrap();
        assert_eq!(one.to_raw(), recip(1).to_raw() * 4);

        let two = acc.compute_series(2).unwrap();
        assert_eq!(two.to_raw(), recip(1).to_raw() * 4 - recip(3).to_raw() * 4);
        assert_eq!(two.to_raw(), 715_827_880);
    }

    #[test]
    fn test_terms_alternate() {
        let terms: Vec<_> = SeriesAccumulator::new()
            .terms(4)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(terms.len(), 4);
        for (i, term) in terms.iter().enumerate() {
            assert_eq!(term.index, i as u64);
            assert_eq!(term.divisor.get(), 2 * i as u64 + 1);
            let magnitude = term.reciprocal.to_raw() * 4;
            let expected = if i % 2 == 1 { -magnitude } else { magnitude };
            assert_eq!(term.signed_term.to_raw(), expected);
        }
    }

    #[test]
    fn test_term_count_limit() {
        let acc = SeriesAccumulator::new();
        assert!(acc.terms(MAX_TERMS).is_ok());
        assert!(matches!(
            acc.compute_series(MAX_TERMS + 1),
            Err(RecipError::TermCountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_params() {
        let params = SeriesParams::default();
        assert_eq!(params.terms, DEFAULT_TERMS);
        assert_eq!(params.rounds, NEWTON_ROUNDS);
        assert_eq!(params.accumulator().unwrap(), SeriesAccumulator::new());

        let bad = SeriesParams { rounds: 0, ..params };
        assert!(bad.accumulator().is_err());
        let bad = SeriesParams { multiplier: 0, ..params };
        assert!(bad.accumulator().is_err());
    }

    #[test]
    fn test_inspect_sees_every_term_of_the_same_fold() {
        let acc = SeriesAccumulator::new();
        let mut seen = Vec::new();
        let sum = acc
            .compute_series_with(5, |term| seen.push((term.index, term.divisor.get())))
            .unwrap();
        assert_eq!(seen, vec![(0, 1), (1, 3), (2, 5), (3, 7), (4, 9)]);
        assert_eq!(sum, acc.compute_series(5).unwrap());
    }

    #[test]
    fn test_term_overflow_reported_as_overflow() {
        // Alternating partial sums never exceed the first term; scaling overflows first
        let acc = SeriesAccumulator::with_engine(ReciprocalEngine::new(), i64::MAX / (Q35_28::SCALE / 2));
        let err = acc.compute_series_with(3, |_| {}).unwrap_err();
        assert!(matches!(err, RecipError::Overflow { .. }));
    }

    #[test]
    fn test_custom_multiplier() {
        let acc = SeriesAccumulator::with_engine(ReciprocalEngine::new(), 1);
        assert_eq!(acc.compute_series(1).unwrap(), recip(1));
    }
}
