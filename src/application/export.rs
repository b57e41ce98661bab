// Plain-text export of a cutting plan
// The payload is a pure function of the plan: rendering the same plan twice
// yields byte-identical text, with no recomputation of any metric.

use crate::domain::plan::CuttingPlan;
use crate::domain::value_objects::SupplyMode;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

const RULE_HEAVY: &str = "======================================================================";
const RULE_LIGHT: &str = "----------------------------------------------------------------------";

/// Renders the downloadable cutting-list payload.
pub fn render_plan_text(plan: &CuttingPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "CUTTING PLAN");
    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out);

    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(out, "Units Required:        {}", plan.units_used);
    if let SupplyMode::Bounded { available_units } = plan.mode {
        let _ = writeln!(out, "Units Available:       {available_units}");
        let _ = writeln!(
            out,
            "Feasible:              {}",
            if plan.feasible { "yes" } else { "no" }
        );
    }
    let _ = writeln!(out, "Master Length:         {}", fixed2(plan.master_length));
    let _ = writeln!(out, "Kerf:                  {}", fixed2(plan.kerf));
    let _ = writeln!(out, "Total Waste:           {}", fixed2(plan.total_waste));
    let _ = writeln!(out, "Total Waste %:         {:.2}%", plan.total_waste_percent);
    let _ = writeln!(out, "Utilization %:         {:.2}%", plan.utilization_percent);

    if plan.feasible {
        let _ = writeln!(out);
        let _ = writeln!(out, "CUTTING PLAN BY UNIT");
        let _ = writeln!(out, "{RULE_LIGHT}");

        for (index, unit) in plan.per_unit.iter().enumerate() {
            let waste_percent = (unit.waste / plan.master_length)
                .to_f64()
                .unwrap_or(0.0)
                * 100.0;
            let _ = writeln!(out);
            let _ = writeln!(out, "Unit {}:", index + 1);
            let _ = writeln!(
                out,
                "  Pieces: {} | Kerf: {} | Waste: {} ({waste_percent:.1}%)",
                fixed2(unit.pieces_length),
                fixed2(unit.kerf_loss),
                fixed2(unit.waste),
            );

            // Cut lines listed by ascending width.
            let mut cuts: Vec<(Decimal, u32)> = plan
                .widths
                .iter()
                .zip(&unit.counts)
                .filter(|(_, &count)| count > 0)
                .map(|(&width, &count)| (width, count))
                .collect();
            cuts.sort_by(|a, b| a.0.cmp(&b.0));
            for (width, count) in cuts {
                let _ = writeln!(out, "    - {count} x {}", fixed2(width));
            }
        }
    } else {
        let _ = writeln!(out);
        let _ = writeln!(out, "DEMAND EXCEEDS INVENTORY");
        let _ = writeln!(out, "{RULE_LIGHT}");
        let _ = writeln!(out, "Required Units:        {}", plan.units_used);
        if let SupplyMode::Bounded { available_units } = plan.mode {
            let _ = writeln!(out, "Available Units:       {available_units}");
        }
        let _ = writeln!(out, "Short By:              {}", plan.shortfall);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE_HEAVY}");
    out
}

/// Two-decimal rendering for lengths, e.g. `120.00`.
fn fixed2(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
