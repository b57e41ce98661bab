// Demo: minimum stock consumption for an open-ended supply
//
// Cuts 4×45.00, 3×36.00 and 2×28.00 from 120.00 masters with a 0.25 kerf
// and prints the resulting cutting list.

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
        SupplyMode::Unbounded,
    )?;

    let optimizer = CuttingOptimizer::new(SolverFactory::default_solver());
    match optimizer.optimize(&problem)? {
        PlanOutcome::Plan(plan) => print!("{}", render_plan_text(&plan)),
        PlanOutcome::StructuralInfeasible { oversize_widths } => {
            println!("These sizes exceed the master length: {oversize_widths:?}");
        }
    }

    Ok(())
}
