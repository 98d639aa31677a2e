//! Human-readable plan dump.

use std::fmt;

use crate::model::CuttingPlan;
use crate::report::{waste, WasteReport};

/// Display wrapper rendering a plan as a plain-text cut list.
pub struct PlanSummary<'a> {
    plan: &'a CuttingPlan,
    failure: Option<&'a str>,
}

impl<'a> PlanSummary<'a> {
    /// Wrap a plan and an optional failure reason.
    pub fn new(plan: &'a CuttingPlan, failure: Option<&'a str>) -> Self {
        Self { plan, failure }
    }
}

impl fmt::Display for PlanSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;

        match plan.panels.first() {
            Some(panel) => writeln!(
                f,
                "Panels required: {} ({} x {})",
                plan.panel_count(),
                panel.width,
                panel.height
            )?,
            None => writeln!(f, "Panels required: 0")?,
        }
        writeln!(f, "Cuts placed: {}", plan.placements.len())?;

        for panel in &plan.panels {
            writeln!(f)?;
            writeln!(f, "Panel {}", panel.index)?;
            for placed in plan.placements_on(panel.index) {
                writeln!(
                    f,
                    "  #{:<4} {:<20} {:>7} x {:<7} at ({}, {}){}",
                    placed.request_id,
                    placed.source_ref,
                    placed.x,
                    placed.y,
                    placed.pos_x,
                    placed.pos_y,
                    if placed.rotated { " rotated" } else { "" }
                )?;
            }
        }

        let leftovers = waste(&plan.offcuts);
        if !leftovers.is_empty() {
            writeln!(f)?;
            writeln!(f, "Leftover offcuts: {}", leftovers.len())?;
            for offcut in leftovers {
                writeln!(
                    f,
                    "  panel {}: {} x {} at ({}, {})",
                    offcut.panel_index, offcut.x, offcut.y, offcut.pos_x, offcut.pos_y
                )?;
            }
        }

        let report = WasteReport::from_plan(plan);
        writeln!(f)?;
        writeln!(
            f,
            "Waste: {:.2} sq in, utilization {:.1}%",
            report.waste_area,
            report.utilization * 100.0
        )?;

        if let Some(reason) = self.failure {
            writeln!(f, "FAILED: {}", reason)?;
        }

        Ok(())
    }
}

/// Render a plan as a plain-text cut list.
pub fn generate_summary(plan: &CuttingPlan, failure: Option<&str>) -> String {
    PlanSummary::new(plan, failure).to_string()
}
