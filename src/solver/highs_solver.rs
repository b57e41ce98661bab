// HiGHS solver adapter
// Translates the domain integer program to the HiGHS row-problem API

use crate::domain::{
    solver_service::{IntegerProgram, Result, SolverError, SolverOutcome, SolverService},
    value_objects::ConstraintSense,
};
use highs::{HighsModelStatus, RowProblem, Sense};

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, program: &IntegerProgram) -> Result<SolverOutcome> {
        // Validate first
        self.validate(program)?;

        // Use HiGHS RowProblem (add variables first, then constraints)
        let mut pb = RowProblem::default();
        let mut columns = Vec::with_capacity(program.num_variables());
        for &coeff in &program.objective {
            columns.push(pb.add_integer_column(coeff, 0..));
        }

        for constraint in &program.constraints {
            let terms: Vec<_> = constraint
                .coefficients
                .iter()
                .enumerate()
                .filter(|(_, &coeff)| coeff != 0.0)
                .map(|(i, &coeff)| (columns[i], coeff))
                .collect();

            match constraint.sense {
                ConstraintSense::LessOrEqual => {
                    pb.add_row(..=constraint.rhs, &terms);
                }
                ConstraintSense::GreaterOrEqual => {
                    pb.add_row(constraint.rhs.., &terms);
                }
            }
        }

        let mut model = pb.optimise(Sense::Minimise);
        if let Some(limit) = program.time_limit {
            model.set_option("time_limit", limit.as_secs_f64());
        }

        let solved = model.solve();
        match solved.status() {
            HighsModelStatus::Optimal => {
                let values = solved.get_solution().columns().to_vec();
                let assignment: Vec<u64> =
                    values.iter().map(|&v| v.round().max(0.0) as u64).collect();
                let objective = program
                    .objective
                    .iter()
                    .zip(&assignment)
                    .map(|(&coeff, &value)| coeff * value as f64)
                    .sum();
                Ok(SolverOutcome::Optimal {
                    objective,
                    assignment,
                })
            }
            HighsModelStatus::Infeasible => Ok(SolverOutcome::Infeasible),
            HighsModelStatus::ReachedTimeLimit => Err(SolverError::Timeout(
                program.time_limit.unwrap_or_default(),
            )),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => Err(
                SolverError::ExecutionFailed("program is unbounded".to_string()),
            ),
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {status:?}"
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solver_service::LinearConstraint;

    #[test]
    fn solves_a_small_covering_program() {
        // minimize x0 + x1  s.t.  2·x0 + x1 ≥ 4,  x1 ≥ 1
        let program = IntegerProgram::new(vec![1.0, 1.0])
            .add_constraint(LinearConstraint::new(
                vec![2.0, 1.0],
                ConstraintSense::GreaterOrEqual,
                4.0,
            ))
            .add_constraint(LinearConstraint::new(
                vec![0.0, 1.0],
                ConstraintSense::GreaterOrEqual,
                1.0,
            ));

        match HighsSolver::new().solve(&program).unwrap() {
            SolverOutcome::Optimal {
                objective,
                assignment,
            } => {
                assert!(2 * assignment[0] + assignment[1] >= 4);
                assert!(assignment[1] >= 1);
                assert!((objective - 3.0).abs() < 1e-6);
            }
            other => panic!("expected an optimal outcome, got {other:?}"),
        }
    }

    #[test]
    fn reports_infeasibility_instead_of_failing() {
        let program = IntegerProgram::new(vec![1.0])
            .add_constraint(LinearConstraint::new(
                vec![1.0],
                ConstraintSense::GreaterOrEqual,
                2.0,
            ))
            .add_constraint(LinearConstraint::new(
                vec![1.0],
                ConstraintSense::LessOrEqual,
                1.0,
            ));

        assert_eq!(
            HighsSolver::new().solve(&program).unwrap(),
            SolverOutcome::Infeasible
        );
    }
}
