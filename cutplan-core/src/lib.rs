//! cutplan-core - Core library for cabinet cut lists and panel packing.
//!
//! This library turns cabinet box dimensions into rectangular cut requests
//! and packs them onto standard stock panels with a first-fit-decreasing
//! guillotine heuristic, reusing leftover offcuts before opening new panels.
//!
//! # Example
//!
//! ```no_run
//! use cutplan_core::{parse_input_file, plan_cabinets, generate_summary, PanelConfig};
//! use std::path::Path;
//!
//! let job = parse_input_file(Path::new("kitchen.json")).unwrap();
//! let config = job.panel.unwrap_or_default();
//! let plan = plan_cabinets(&job.cabinets, config).unwrap();
//! println!("{}", generate_summary(&plan, None));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod packing;
pub mod parser;
pub mod report;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::PanelConfig;
pub use error::{ErrorCode, PlanError, PlanFailure, Result};
pub use generator::{generate_json, generate_summary};
pub use model::{
    Cabinet, CabinetKind, CutRequest, CuttingPlan, NormalizedCut, Offcut, Panel, PlacedCut,
};
pub use packing::{pack, PackingEngine};
pub use parser::{parse_input_file, parse_input_str, Job};
pub use report::WasteReport;
pub use transform::create_cut_requests;
pub use validation::{validate_cabinets, ValidationResult};

/// Plan a set of cabinets.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Translate cabinets into cut requests
/// 2. Normalize and sort the requests
/// 3. Place each request on an offcut or a new panel
///
/// A translation failure yields an empty partial plan; a packing failure
/// yields whatever was placed before it.
pub fn plan_cabinets(
    cabinets: &[Cabinet],
    config: PanelConfig,
) -> std::result::Result<CuttingPlan, PlanFailure> {
    let requests = create_cut_requests(cabinets)?;
    tracing::debug!(
        "{} cabinet(s) translated to {} cut request(s)",
        cabinets.len(),
        requests.len()
    );

    pack(config, &requests)
}
