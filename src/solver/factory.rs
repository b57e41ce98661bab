use crate::domain::{solver_service::SolverService, value_objects::SolverBackend};
use crate::solver::{CoinCbcSolver, HighsSolver};
use std::sync::Arc;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a specific backend
    pub fn create_from_backend(backend: SolverBackend) -> Arc<dyn SolverService> {
        match backend {
            SolverBackend::Auto => Arc::new(HighsSolver::new()),
            SolverBackend::CoinCbc => Arc::new(CoinCbcSolver::new()),
            SolverBackend::Highs => Arc::new(HighsSolver::new()),
        }
    }

    /// Get the default solver (HiGHS)
    pub fn default_solver() -> Arc<dyn SolverService> {
        Arc::new(HighsSolver::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backends_map_to_their_adapters() {
        assert_eq!(
            SolverFactory::create_from_backend(SolverBackend::CoinCbc).name(),
            "COIN-OR CBC"
        );
        assert_eq!(
            SolverFactory::create_from_backend(SolverBackend::Highs).name(),
            "HiGHS"
        );
        assert_eq!(
            SolverFactory::create_from_backend(SolverBackend::Auto).name(),
            "HiGHS"
        );
    }
}
