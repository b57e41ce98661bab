//! Decoding of solver output into per-unit cutting instructions.

use super::models::{Pattern, ProblemInput, ScaledProblem};
use super::value_objects::SupplyMode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cutting instructions for one physical master unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCut {
    /// Piece counts per size, aligned with [`CuttingPlan::widths`]
    pub counts: Vec<u32>,
    /// Length consumed by the pieces themselves
    pub pieces_length: Decimal,
    /// Length lost to the blade between cuts
    pub kerf_loss: Decimal,
    /// Unused remainder of the unit
    pub waste: Decimal,
}

impl UnitCut {
    pub fn total_pieces(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// The solved output handed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlan {
    pub mode: SupplyMode,
    /// False only in bounded mode when demand exceeds the inventory
    pub feasible: bool,
    /// Units consumed by the plan; for an infeasible bounded request this
    /// is the true minimum requirement so the shortfall is concrete
    pub units_used: u32,
    /// Units missing from the inventory (zero when feasible)
    pub shortfall: u32,
    pub master_length: Decimal,
    pub kerf: Decimal,
    /// Piece widths in reporting order
    pub widths: Vec<Decimal>,
    /// Demand quantities aligned with `widths`
    pub demand: Vec<u32>,
    /// One entry per physical unit, patterns expanded
    pub per_unit: Vec<UnitCut>,
    pub total_waste: Decimal,
    pub total_waste_percent: f64,
    pub utilization_percent: f64,
}

impl CuttingPlan {
    /// Plan for a request with nothing to cut.
    pub fn empty(problem: &ProblemInput) -> Self {
        Self {
            mode: problem.mode,
            feasible: true,
            units_used: 0,
            shortfall: 0,
            master_length: problem.master_length,
            kerf: problem.kerf,
            widths: problem.widths(),
            demand: problem.demand(),
            per_unit: Vec::new(),
            total_waste: Decimal::ZERO,
            total_waste_percent: 0.0,
            utilization_percent: 100.0,
        }
    }

    /// Bounded-mode outcome when demand cannot fit the inventory.
    ///
    /// Carries no per-unit instructions; `units_used` reports the true
    /// minimum requirement computed without the cap.
    pub fn capacity_infeasible(
        problem: &ProblemInput,
        required_units: u32,
        available_units: u32,
    ) -> Self {
        Self {
            mode: problem.mode,
            feasible: false,
            units_used: required_units,
            shortfall: required_units.saturating_sub(available_units),
            master_length: problem.master_length,
            kerf: problem.kerf,
            widths: problem.widths(),
            demand: problem.demand(),
            per_unit: Vec::new(),
            total_waste: Decimal::ZERO,
            total_waste_percent: 0.0,
            utilization_percent: 0.0,
        }
    }

    /// Pieces produced per size, summed over every unit.
    pub fn produced(&self) -> Vec<u32> {
        let mut produced = vec![0u32; self.widths.len()];
        for unit in &self.per_unit {
            for (i, &c) in unit.counts.iter().enumerate() {
                produced[i] += c;
            }
        }
        produced
    }
}

/// Expands a pattern-usage vector into one entry per physical unit.
///
/// Units appear grouped by pattern in pattern-set order, so the expansion is
/// stable across repeated decodes of the same assignment. Waste per unit is
/// `master_length − (pieces + kerf·(cuts))` with the kerf term dropped for
/// units carrying at most one piece.
pub fn decode(
    assignment: &[u64],
    patterns: &[Pattern],
    problem: &ProblemInput,
    scaled: &ScaledProblem,
) -> CuttingPlan {
    let units_used: u64 = assignment.iter().sum();
    let mut per_unit = Vec::with_capacity(units_used as usize);
    let mut total_waste_scaled: i64 = 0;

    for (pattern, &uses) in patterns.iter().zip(assignment) {
        if uses == 0 {
            continue;
        }
        let pieces_scaled: i64 = pattern
            .counts
            .iter()
            .zip(&scaled.widths)
            .map(|(&c, &w)| i64::from(c) * w)
            .sum();
        let cuts = i64::from(pattern.total_pieces()).saturating_sub(1).max(0);
        let kerf_scaled = cuts * scaled.kerf;
        let waste_scaled = scaled.master_length - pieces_scaled - kerf_scaled;
        debug_assert!(waste_scaled >= 0, "infeasible pattern reached decoding");

        for _ in 0..uses {
            per_unit.push(UnitCut {
                counts: pattern.counts.clone(),
                pieces_length: scaled.unscale(pieces_scaled),
                kerf_loss: scaled.unscale(kerf_scaled),
                waste: scaled.unscale(waste_scaled),
            });
            total_waste_scaled += waste_scaled;
        }
    }

    let consumed_scaled = units_used as i64 * scaled.master_length;
    let total_waste_percent = if consumed_scaled > 0 {
        total_waste_scaled as f64 / consumed_scaled as f64 * 100.0
    } else {
        0.0
    };

    let feasible = match problem.mode {
        SupplyMode::Unbounded => true,
        SupplyMode::Bounded { available_units } => units_used <= u64::from(available_units),
    };
    let shortfall = match problem.mode {
        SupplyMode::Bounded { available_units } if !feasible => {
            (units_used - u64::from(available_units)) as u32
        }
        _ => 0,
    };

    CuttingPlan {
        mode: problem.mode,
        feasible,
        units_used: units_used as u32,
        shortfall,
        master_length: problem.master_length,
        kerf: problem.kerf,
        widths: problem.widths(),
        demand: problem.demand(),
        per_unit,
        total_waste: scaled.unscale(total_waste_scaled),
        total_waste_percent,
        utilization_percent: 100.0 - total_waste_percent,
    }
}

/// Outcome of a compute request: either a plan or a structural report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// A decoded plan; in bounded mode check [`CuttingPlan::feasible`]
    Plan(CuttingPlan),
    /// One or more sizes exceed the master length and fit in no pattern
    StructuralInfeasible { oversize_widths: Vec<Decimal> },
}

impl PlanOutcome {
    pub fn plan(&self) -> Option<&CuttingPlan> {
        match self {
            PlanOutcome::Plan(plan) => Some(plan),
            PlanOutcome::StructuralInfeasible { .. } => None,
        }
    }
}
