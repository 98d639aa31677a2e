//! Guillotine panel packing.
//!
//! Cuts are normalized (long side on X), sorted by decreasing long side, and
//! placed one at a time: first into the oldest offcut that strictly contains
//! them, otherwise at the origin of a freshly opened panel.

mod allocator;
mod engine;
mod pool;

pub use allocator::PanelAllocator;
pub use engine::{pack, PackingEngine};
pub use pool::{OffcutPool, Placement};
