//! Construction of the set-covering integer program.
//!
//! Each enumerated pattern becomes one decision variable `x_j` counting the
//! master units cut with that pattern. Both modes minimize `Σ x_j` subject
//! to the covering rows `Σ_j counts_j[i]·x_j ≥ demand[i]`; bounded supply
//! adds the inventory cap `Σ x_j ≤ available_units`.

use super::models::Pattern;
use super::solver_service::{IntegerProgram, LinearConstraint};
use super::value_objects::{ConstraintSense, SupplyMode};
use std::time::Duration;

/// Demand rows that no enumerated pattern can contribute to.
///
/// Raised before the solver is invoked: no search will ever satisfy a size
/// that appears in zero patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncoveredSizes {
    pub size_indices: Vec<usize>,
}

/// Builds the integer program for the active mode.
///
/// `demand` is indexed like the pattern count vectors. Returns
/// [`UncoveredSizes`] when one or more demanded sizes are absent from every
/// pattern (which includes the empty pattern set).
pub fn build(
    patterns: &[Pattern],
    demand: &[u32],
    mode: SupplyMode,
    time_limit: Option<Duration>,
) -> Result<IntegerProgram, UncoveredSizes> {
    let uncovered: Vec<usize> = (0..demand.len())
        .filter(|&i| !patterns.iter().any(|p| p.counts[i] > 0))
        .collect();
    if !uncovered.is_empty() {
        return Err(UncoveredSizes {
            size_indices: uncovered,
        });
    }

    let mut program = IntegerProgram::new(vec![1.0; patterns.len()])
        .with_name("cutting-stock")
        .with_time_limit(time_limit);

    for (i, &quantity) in demand.iter().enumerate() {
        let coefficients = patterns
            .iter()
            .map(|p| f64::from(p.counts[i]))
            .collect::<Vec<_>>();
        program = program.add_constraint(
            LinearConstraint::new(
                coefficients,
                ConstraintSense::GreaterOrEqual,
                f64::from(quantity),
            )
            .with_name(format!("demand_{i}")),
        );
    }

    if let SupplyMode::Bounded { available_units } = mode {
        program = program.add_constraint(
            LinearConstraint::new(
                vec![1.0; patterns.len()],
                ConstraintSense::LessOrEqual,
                f64::from(available_units),
            )
            .with_name("inventory_cap"),
        );
    }

    log::debug!(
        "built '{}' with {} variables and {} constraints",
        program.name,
        program.num_variables(),
        program.constraints.len()
    );
    Ok(program)
}
