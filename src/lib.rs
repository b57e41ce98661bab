// Domain layer: problem model, pattern enumeration, program formulation
pub mod domain;

// Application layer: use case orchestration and text export
pub mod application;

// Solver adapters: concrete implementations of SolverService
#[cfg(feature = "solvers")]
pub mod solver;

// Re-export commonly used types
pub use domain::{
    ConstraintSense, CutError, CuttingPlan, IntegerProgram, LinearConstraint, Pattern, PieceSpec,
    PlanOutcome, ProblemInput, ScaledProblem, SolverBackend, SolverError, SolverOutcome,
    SolverService, SupplyMode, UnitCut,
};

pub use application::{render_plan_text, CuttingOptimizer};

#[cfg(feature = "solvers")]
pub use solver::{CoinCbcSolver, HighsSolver, SolverFactory};
