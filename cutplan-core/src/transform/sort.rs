//! First-fit-decreasing ordering.

use crate::model::NormalizedCut;

/// Order cuts by long side, largest first.
///
/// The sort is stable, so cuts with equal long sides keep their input order
/// and identical input always yields identical plans.
pub fn sort_decreasing(mut cuts: Vec<NormalizedCut>) -> Vec<NormalizedCut> {
    cuts.sort_by(|a, b| b.x.total_cmp(&a.x));
    cuts
}
