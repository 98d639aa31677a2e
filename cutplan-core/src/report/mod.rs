//! Waste and utilization reporting.

mod waste;

pub use waste::{waste, waste_area, WasteReport};
