// Demo: checking a fixed inventory against demand
//
// The same demand as the unbounded demo needs three masters; with only two
// on hand the plan reports the shortfall instead of cutting instructions.

use cutplan::{
    render_plan_text, CuttingOptimizer, PieceSpec, PlanOutcome, ProblemInput, SolverFactory,
    SupplyMode,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let problem = ProblemInput::new(
        dec!(120.00),
        dec!(0.25),
        vec![
            PieceSpec::new(dec!(45.00), 4),
            PieceSpec::new(dec!(36.00), 3),
            PieceSpec::new(dec!(28.00), 2),
        ],
        SupplyMode::Bounded { available_units: 2 },
    )?;

    let optimizer = CuttingOptimizer::new(SolverFactory::default_solver());
    match optimizer.optimize(&problem)? {
        PlanOutcome::Plan(plan) => {
            if !plan.feasible {
                println!(
                    "Demand needs {} master(s); inventory is short by {}.",
                    plan.units_used, plan.shortfall
                );
            }
            print!("{}", render_plan_text(&plan));
        }
        PlanOutcome::StructuralInfeasible { oversize_widths } => {
            println!("These sizes exceed the master length: {oversize_widths:?}");
        }
    }

    Ok(())
}
