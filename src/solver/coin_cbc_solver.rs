use crate::domain::{
    solver_service::{IntegerProgram, Result, SolverError, SolverOutcome, SolverService},
    value_objects::ConstraintSense,
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolution, SolverModel, Variable as GoodLpVariable,
};

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, program: &IntegerProgram) -> Result<SolverOutcome> {
        // Validate first
        self.validate(program)?;

        // Build variables using good_lp: every decision variable is a
        // non-negative integer
        let mut vars = variables!();
        let mut lp_variables: Vec<GoodLpVariable> = Vec::with_capacity(program.num_variables());
        for _ in 0..program.num_variables() {
            lp_variables.push(vars.add(variable().integer().min(0)));
        }

        // Build objective expression
        let mut obj_expr: Expression = 0.into();
        for (i, &coeff) in program.objective.iter().enumerate() {
            if coeff != 0.0 {
                obj_expr += coeff * lp_variables[i];
            }
        }

        let mut lp_model = vars.minimise(obj_expr).using(coin_cbc::coin_cbc);

        if let Some(limit) = program.time_limit {
            lp_model.set_parameter("sec", &limit.as_secs().max(1).to_string());
        }

        // Build constraints
        for constraint in &program.constraints {
            let mut lhs: Expression = 0.into();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 {
                    lhs += coeff * lp_variables[i];
                }
            }

            lp_model = match constraint.sense {
                ConstraintSense::LessOrEqual => lp_model.with(lhs.leq(constraint.rhs)),
                ConstraintSense::GreaterOrEqual => lp_model.with(lhs.geq(constraint.rhs)),
            };
        }

        // Solve and map the result back to the domain
        match lp_model.solve() {
            Ok(sol) => {
                let assignment: Vec<u64> = lp_variables
                    .iter()
                    .map(|&v| sol.value(v).round().max(0.0) as u64)
                    .collect();
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
            Err(ResolutionError::Infeasible) => Ok(SolverOutcome::Infeasible),
            Err(ResolutionError::Unbounded) => Err(SolverError::ExecutionFailed(
                "program is unbounded".to_string(),
            )),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{e:?}"))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
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

        match CoinCbcSolver::new().solve(&program).unwrap() {
            SolverOutcome::Optimal {
                objective,
                assignment,
            } => {
                assert_eq!(assignment.len(), 2);
                assert!(2 * assignment[0] + assignment[1] >= 4);
                assert!(assignment[1] >= 1);
                assert!((objective - 3.0).abs() < 1e-6);
            }
            other => panic!("expected an optimal outcome, got {other:?}"),
        }
    }

    #[test]
    fn reports_infeasibility_instead_of_failing() {
        // x0 ≥ 2 and x0 ≤ 1 cannot both hold
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
            CoinCbcSolver::new().solve(&program).unwrap(),
            SolverOutcome::Infeasible
        );
    }
}
