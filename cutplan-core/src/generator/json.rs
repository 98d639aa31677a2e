//! JSON serialization of the output boundary.

use serde::Serialize;

use crate::error::Result;
use crate::model::CuttingPlan;
use crate::report::WasteReport;

/// Everything a consumer needs from one run.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    /// The plan, partial when `failure` is set.
    pub plan: &'a CuttingPlan,
    /// Waste totals derived from the plan.
    pub waste: WasteReport,
    /// Why the run stopped early, if it did.
    pub failure: Option<&'a str>,
}

impl<'a> PlanReport<'a> {
    /// Build the report for a plan.
    pub fn new(plan: &'a CuttingPlan, failure: Option<&'a str>) -> Self {
        Self {
            plan,
            waste: WasteReport::from_plan(plan),
            failure,
        }
    }
}

/// Render a plan as pretty-printed JSON.
pub fn generate_json(plan: &CuttingPlan, failure: Option<&str>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PlanReport::new(plan, failure))?)
}
