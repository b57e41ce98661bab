//! End-to-end scenarios against the real solver backends.
//!
//! These run only with the `solvers` feature; the default test run covers
//! the engine with deterministic stub adapters instead.

#![cfg(feature = "solvers")]

use cutplan::{
    CoinCbcSolver, CuttingOptimizer, HighsSolver, PieceSpec, PlanOutcome, ProblemInput,
    SolverService, SupplyMode,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn scenario_pieces() -> Vec<PieceSpec> {
    vec![
        PieceSpec::new(dec!(45.00), 4),
        PieceSpec::new(dec!(36.00), 3),
        PieceSpec::new(dec!(28.00), 2),
    ]
}

fn solve(solver: Arc<dyn SolverService>, mode: SupplyMode) -> PlanOutcome {
    let problem = ProblemInput::new(dec!(120.00), dec!(0.25), scenario_pieces(), mode).unwrap();
    CuttingOptimizer::new(solver).optimize(&problem).unwrap()
}

fn assert_minimal_scenario_plan(outcome: PlanOutcome) {
    let plan = outcome.plan().expect("expected a plan").clone();
    assert!(plan.feasible);
    assert_eq!(plan.units_used, 3);

    // 3 units produce exactly the demand, so every optimal solution loses
    // 360 − 344 − 6×0.25 = 14.50 in total.
    assert_eq!(plan.total_waste, dec!(14.50));

    let produced = plan.produced();
    for (i, &d) in plan.demand.iter().enumerate() {
        assert!(produced[i] >= d, "size {i} under-produced");
    }
    for unit in &plan.per_unit {
        assert!(unit.waste >= Decimal::ZERO);
    }
}

#[test]
fn cbc_finds_the_minimal_unit_count() {
    assert_minimal_scenario_plan(solve(Arc::new(CoinCbcSolver::new()), SupplyMode::Unbounded));
}

#[test]
fn highs_finds_the_minimal_unit_count() {
    assert_minimal_scenario_plan(solve(Arc::new(HighsSolver::new()), SupplyMode::Unbounded));
}

#[test]
fn bounded_supply_matching_the_minimum_is_feasible() {
    assert_minimal_scenario_plan(solve(
        Arc::new(HighsSolver::new()),
        SupplyMode::Bounded { available_units: 3 },
    ));
}

#[test]
fn bounded_supply_below_the_minimum_reports_the_shortfall() {
    for solver in [
        Arc::new(CoinCbcSolver::new()) as Arc<dyn SolverService>,
        Arc::new(HighsSolver::new()) as Arc<dyn SolverService>,
    ] {
        let outcome = solve(solver, SupplyMode::Bounded { available_units: 2 });
        let plan = outcome.plan().expect("expected a plan");
        assert!(!plan.feasible);
        assert_eq!(plan.units_used, 3);
        assert_eq!(plan.shortfall, 1);
        assert!(plan.per_unit.is_empty());
    }
}

#[test]
fn growing_the_inventory_never_breaks_feasibility() {
    for available_units in 3..=5 {
        let outcome = solve(
            Arc::new(HighsSolver::new()),
            SupplyMode::Bounded { available_units },
        );
        let plan = outcome.plan().expect("expected a plan");
        assert!(plan.feasible, "feasible at {available_units} units");
        assert_eq!(plan.units_used, 3);
        assert_eq!(plan.total_waste, dec!(14.50));
    }
}

#[test]
fn single_size_filling_the_master_needs_one_unit_per_piece() {
    let problem = ProblemInput::new(
        dec!(100.00),
        dec!(0.25),
        vec![PieceSpec::new(dec!(100.00), 5)],
        SupplyMode::Unbounded,
    )
    .unwrap();
    let outcome = CuttingOptimizer::new(Arc::new(HighsSolver::new()))
        .optimize(&problem)
        .unwrap();
    let plan = outcome.plan().expect("expected a plan");
    assert_eq!(plan.units_used, 5);
    assert_eq!(plan.total_waste, Decimal::ZERO);
    assert_eq!(plan.utilization_percent, 100.0);
}

#[test]
fn mixed_instance_satisfies_demand_without_negative_waste() {
    let problem = ProblemInput::new(
        dec!(240.0),
        dec!(0.5),
        vec![
            PieceSpec::new(dec!(71.5), 7),
            PieceSpec::new(dec!(50.0), 11),
            PieceSpec::new(dec!(33.25), 5),
            PieceSpec::new(dec!(12.0), 9),
        ],
        SupplyMode::Unbounded,
    )
    .unwrap();

    for solver in [
        Arc::new(CoinCbcSolver::new()) as Arc<dyn SolverService>,
        Arc::new(HighsSolver::new()) as Arc<dyn SolverService>,
    ] {
        let outcome = CuttingOptimizer::new(solver).optimize(&problem).unwrap();
        let plan = outcome.plan().expect("expected a plan").clone();
        let produced = plan.produced();
        for (i, &d) in plan.demand.iter().enumerate() {
            assert!(produced[i] >= d, "size {i} under-produced");
        }
        for unit in &plan.per_unit {
            assert!(unit.waste >= Decimal::ZERO);
        }
        assert_eq!(plan.per_unit.len(), plan.units_used as usize);
    }
}
