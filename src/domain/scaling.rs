//! Exact conversion of decimal lengths to a common integer unit system.
//!
//! Every length in a request is multiplied by a single scale factor
//! `10^digits`, where `digits` is the largest number of decimal places used
//! by any length. The conversion is exact by construction; a value that
//! fails to land on an integer indicates a precision violation and rejects
//! the request.

use super::models::{CutError, ProblemInput, ScaledProblem};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Derives the integer mirror of a request.
///
/// Pure and deterministic: identical input yields the same scale factor and
/// the same scaled values.
pub fn scale(problem: &ProblemInput) -> Result<ScaledProblem, CutError> {
    let digits = problem
        .pieces
        .iter()
        .map(|p| decimal_digits(p.width))
        .chain([
            decimal_digits(problem.master_length),
            decimal_digits(problem.kerf),
        ])
        .max()
        .unwrap_or(0);

    let factor = 10i64
        .checked_pow(digits)
        .ok_or(CutError::InvalidPrecision {
            value: problem.master_length,
            digits,
        })?;

    Ok(ScaledProblem {
        digits,
        factor,
        master_length: to_scaled(problem.master_length, factor, digits)?,
        kerf: to_scaled(problem.kerf, factor, digits)?,
        widths: problem
            .pieces
            .iter()
            .map(|p| to_scaled(p.width, factor, digits))
            .collect::<Result<_, _>>()?,
        demand: problem.demand(),
        mode: problem.mode,
    })
}

/// Number of significant decimal places, ignoring trailing zeros.
fn decimal_digits(value: Decimal) -> u32 {
    value.normalize().scale()
}

fn to_scaled(value: Decimal, factor: i64, digits: u32) -> Result<i64, CutError> {
    let scaled = value * Decimal::from(factor);
    // The factor derivation makes this a no-op; a residual fraction means
    // the precision contract was broken upstream.
    if !scaled.fract().is_zero() {
        return Err(CutError::InvalidPrecision { value, digits });
    }
    scaled
        .to_i64()
        .ok_or(CutError::InvalidPrecision { value, digits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PieceSpec;
    use crate::domain::value_objects::SupplyMode;
    use rust_decimal_macros::dec;

    fn problem(master: Decimal, kerf: Decimal, widths: &[Decimal]) -> ProblemInput {
        let pieces = widths.iter().map(|&w| PieceSpec::new(w, 1)).collect();
        ProblemInput::new(master, kerf, pieces, SupplyMode::Unbounded).unwrap()
    }

    #[test]
    fn scale_factor_covers_the_most_precise_length() {
        let scaled = scale(&problem(dec!(120.00), dec!(0.25), &[dec!(45.0), dec!(36)])).unwrap();
        assert_eq!(scaled.digits, 2);
        assert_eq!(scaled.factor, 100);
        assert_eq!(scaled.master_length, 12000);
        assert_eq!(scaled.kerf, 25);
        assert_eq!(scaled.widths, vec![4500, 3600]);
    }

    #[test]
    fn trailing_zeros_do_not_inflate_the_factor() {
        let scaled = scale(&problem(dec!(100.000), dec!(0), &[dec!(25.0)])).unwrap();
        assert_eq!(scaled.digits, 0);
        assert_eq!(scaled.factor, 1);
        assert_eq!(scaled.master_length, 100);
    }

    #[test]
    fn round_trip_reproduces_the_original_values() {
        let input = problem(dec!(120.00), dec!(0.25), &[dec!(45.125), dec!(28)]);
        let scaled = scale(&input).unwrap();
        assert_eq!(scaled.unscale(scaled.master_length), input.master_length);
        assert_eq!(scaled.unscale(scaled.kerf), input.kerf);
        for (i, piece) in input.pieces.iter().enumerate() {
            assert_eq!(scaled.unscale(scaled.widths[i]), piece.width);
        }
    }

    #[test]
    fn rejects_precision_beyond_the_integer_range() {
        // 19 decimal places force a 10^19 factor, past i64.
        let input = problem(dec!(100), dec!(0), &[dec!(0.0000000000000000001)]);
        assert!(matches!(
            scale(&input),
            Err(CutError::InvalidPrecision { .. })
        ));
    }

    #[test]
    fn identical_input_scales_identically() {
        let input = problem(dec!(120.00), dec!(0.25), &[dec!(45.00), dec!(36.0)]);
        assert_eq!(scale(&input).unwrap(), scale(&input).unwrap());
    }
}
