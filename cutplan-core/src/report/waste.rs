//! Unused material derived from the offcut pool.

use serde::{Deserialize, Serialize};

use crate::model::{CuttingPlan, Offcut};

/// Offcuts that were never consumed.
///
/// Works on any pool snapshot, so it can be called mid-run for diagnostics
/// as well as on a finished plan.
pub fn waste(offcuts: &[Offcut]) -> Vec<&Offcut> {
    offcuts.iter().filter(|o| !o.used).collect()
}

/// Total area of the offcuts that were never consumed.
pub fn waste_area(offcuts: &[Offcut]) -> f64 {
    offcuts.iter().filter(|o| !o.used).map(Offcut::area).sum()
}

/// Summary of material use for a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteReport {
    /// Number of leftover offcuts.
    pub offcut_count: usize,
    /// Area of leftover offcuts.
    pub waste_area: f64,
    /// Area covered by placed pieces.
    pub placed_area: f64,
    /// Area of all panels opened.
    pub stock_area: f64,
    /// Placed area as a fraction of stock area (0 when no panel was opened).
    pub utilization: f64,
}

impl WasteReport {
    /// Build the report for a plan.
    pub fn from_plan(plan: &CuttingPlan) -> Self {
        let placed_area = plan.placed_area();
        let stock_area = plan.stock_area();
        let utilization = if stock_area > 0.0 {
            placed_area / stock_area
        } else {
            0.0
        };

        Self {
            offcut_count: waste(&plan.offcuts).len(),
            waste_area: waste_area(&plan.offcuts),
            placed_area,
            stock_area,
            utilization,
        }
    }

    /// Area lost to kerf: stock not accounted for by pieces or leftovers.
    pub fn kerf_loss(&self) -> f64 {
        (self.stock_area - self.placed_area - self.waste_area).max(0.0)
    }
}
