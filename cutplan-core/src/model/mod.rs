//! Data model types for cut planning.

mod cabinet;
mod cut;
mod offcut;
mod plan;

pub use cabinet::{Cabinet, CabinetKind};
pub use cut::{CutRequest, NormalizedCut};
pub use offcut::Offcut;
pub use plan::{CuttingPlan, Panel, PlacedCut};
