// Application use case: run a cutting request through the whole engine

use crate::domain::models::{CutError, Pattern, ProblemInput, ScaledProblem};
use crate::domain::plan::{self, CuttingPlan, PlanOutcome};
use crate::domain::solver_service::{SolverError, SolverOutcome, SolverService};
use crate::domain::value_objects::SupplyMode;
use crate::domain::{formulation, patterns, scaling};
use std::sync::Arc;
use std::time::Duration;

/// Orchestrates validate → scale → enumerate → build → solve → decode.
///
/// The solver is an injected capability instantiated per caller; the
/// optimizer holds no other state, so a single instance can serve
/// concurrent requests without locking.
pub struct CuttingOptimizer {
    solver: Arc<dyn SolverService>,
    time_limit: Option<Duration>,
}

impl CuttingOptimizer {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self {
            solver,
            time_limit: None,
        }
    }

    /// Bounds every solver invocation made on behalf of a request.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Computes a cutting plan for the request.
    ///
    /// Structural and capacity infeasibilities are first-class outcomes;
    /// only malformed input, precision violations and solver failures
    /// surface as errors.
    pub fn optimize(&self, problem: &ProblemInput) -> Result<PlanOutcome, CutError> {
        if problem.pieces.is_empty() {
            return Ok(PlanOutcome::Plan(CuttingPlan::empty(problem)));
        }

        let oversize = problem.oversize_widths();
        if !oversize.is_empty() {
            log::info!(
                "{} size(s) exceed the {} master length",
                oversize.len(),
                problem.master_length
            );
            return Ok(PlanOutcome::StructuralInfeasible {
                oversize_widths: oversize,
            });
        }

        let scaled = scaling::scale(problem)?;
        let patterns = patterns::enumerate(scaled.master_length, scaled.kerf, &scaled.widths);

        let program =
            match formulation::build(&patterns, &scaled.demand, problem.mode, self.time_limit) {
                Ok(program) => program,
                Err(uncovered) => {
                    // The oversize check already screened for this; report
                    // the coverage hole the same way if it ever appears.
                    let oversize_widths = uncovered
                        .size_indices
                        .iter()
                        .map(|&i| problem.pieces[i].width)
                        .collect();
                    return Ok(PlanOutcome::StructuralInfeasible { oversize_widths });
                }
            };

        log::info!(
            "solving '{}' over {} pattern(s) with {}",
            program.name,
            patterns.len(),
            self.solver.name()
        );
        match self.solver.solve(&program)? {
            SolverOutcome::Optimal { assignment, .. } => {
                let decoded = plan::decode(&assignment, &patterns, problem, &scaled);
                log::info!(
                    "optimal plan: {} unit(s), {} total waste",
                    decoded.units_used,
                    decoded.total_waste
                );
                Ok(PlanOutcome::Plan(decoded))
            }
            SolverOutcome::Infeasible => match problem.mode {
                SupplyMode::Bounded { available_units } => {
                    self.quantify_shortfall(problem, &patterns, &scaled, available_units)
                }
                SupplyMode::Unbounded => Err(CutError::Solver(SolverError::ExecutionFailed(
                    "covering program reported infeasible despite full pattern coverage"
                        .to_string(),
                ))),
            },
        }
    }

    /// Re-solves without the inventory cap to learn the true minimum unit
    /// count behind a bounded-mode infeasibility.
    fn quantify_shortfall(
        &self,
        problem: &ProblemInput,
        patterns: &[Pattern],
        scaled: &ScaledProblem,
        available_units: u32,
    ) -> Result<PlanOutcome, CutError> {
        let uncapped =
            formulation::build(patterns, &scaled.demand, SupplyMode::Unbounded, self.time_limit)
                .map_err(|_| {
                    CutError::Solver(SolverError::ExecutionFailed(
                        "shortfall analysis lost pattern coverage".to_string(),
                    ))
                })?;

        match self.solver.solve(&uncapped)? {
            SolverOutcome::Optimal { assignment, .. } => {
                let required: u64 = assignment.iter().sum();
                log::info!(
                    "demand needs {required} unit(s) but only {available_units} available"
                );
                Ok(PlanOutcome::Plan(CuttingPlan::capacity_infeasible(
                    problem,
                    required as u32,
                    available_units,
                )))
            }
            SolverOutcome::Infeasible => Err(CutError::Solver(SolverError::ExecutionFailed(
                "uncapped covering program reported infeasible".to_string(),
            ))),
        }
    }
}
