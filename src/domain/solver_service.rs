// Domain service interface for integer-program solvers
// Defines the contract that any solver implementation must follow

use super::value_objects::ConstraintSense;
use std::time::Duration;

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("invalid program: {0}")]
    InvalidProgram(String),

    #[error("solver execution failed: {0}")]
    ExecutionFailed(String),

    #[error("solver exceeded the time limit of {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Linear constraint over the program's variables
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub coefficients: Vec<f64>,
    pub sense: ConstraintSense,
    pub rhs: f64,
    pub name: String,
}

impl LinearConstraint {
    pub fn new(coefficients: Vec<f64>, sense: ConstraintSense, rhs: f64) -> Self {
        Self {
            coefficients,
            sense,
            rhs,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Minimization program over non-negative integer variables
#[derive(Debug, Clone)]
pub struct IntegerProgram {
    pub name: String,
    /// Objective coefficients, one per decision variable
    pub objective: Vec<f64>,
    pub constraints: Vec<LinearConstraint>,
    /// Bound on the solve duration, honored by every adapter
    pub time_limit: Option<Duration>,
}

impl IntegerProgram {
    pub fn new(objective: Vec<f64>) -> Self {
        Self {
            name: String::new(),
            objective,
            constraints: Vec::new(),
            time_limit: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn add_constraint(mut self, constraint: LinearConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }
}

/// Outcome of one solver invocation
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome {
    /// Proven-optimal assignment of non-negative integers to the variables
    Optimal { objective: f64, assignment: Vec<u64> },
    /// No assignment satisfies the constraints
    Infeasible,
}

/// Domain service interface for integer-program solvers
///
/// The engine treats the solver as an injected capability: it hands over an
/// objective, constraints and integrality requirements and receives either
/// an optimal assignment or an infeasibility report. Adapters never block
/// past the program's time limit; an expired limit is an error, not a hang.
pub trait SolverService: Send + Sync {
    /// Solve a minimization program
    fn solve(&self, program: &IntegerProgram) -> Result<SolverOutcome>;

    /// Validate a program without solving it
    fn validate(&self, program: &IntegerProgram) -> Result<()> {
        let mut errors = Vec::new();

        if program.objective.is_empty() {
            errors.push("objective must have at least one coefficient".to_string());
        }

        let num_vars = program.num_variables();
        for (i, constraint) in program.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "constraint {} has {} coefficients but the program has {} variables",
                    i,
                    constraint.num_variables(),
                    num_vars
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProgram(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;
}
