//! Cut request transformations applied before packing.

mod cabinet;
mod normalize;
mod sort;

pub use cabinet::{create_cut_requests, cuts_for_cabinet};
pub use normalize::{normalize, normalize_all};
pub use sort::sort_decreasing;
