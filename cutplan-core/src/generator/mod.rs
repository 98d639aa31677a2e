//! Plan output generators.

mod json;
mod summary;

pub use json::{generate_json, PlanReport};
pub use summary::{generate_summary, PlanSummary};
