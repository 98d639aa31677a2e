//! Offcut pool: first-fit reuse of leftover panel regions.
//!
//! The pool is an append-only arena. Consuming an offcut flips its `used`
//! flag and appends its guillotine children; nothing is ever removed, so the
//! arena doubles as an audit trail of every region the run produced.

use crate::config::float_cmp;
use crate::model::{NormalizedCut, Offcut};

/// Where a cut was put and which way round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Panel holding the piece.
    pub panel_index: usize,
    /// Left edge within the panel.
    pub pos_x: f64,
    /// Bottom edge within the panel.
    pub pos_y: f64,
    /// True when the long side runs along panel Y.
    pub rotated: bool,
}

/// Leftover regions of every panel opened so far, in creation order.
#[derive(Debug, Clone, Default)]
pub struct OffcutPool {
    offcuts: Vec<Offcut>,
    kerf: f64,
}

impl OffcutPool {
    /// Create an empty pool. `kerf` is subtracted from every remainder.
    pub fn new(kerf: f64) -> Self {
        Self {
            offcuts: Vec::new(),
            kerf,
        }
    }

    /// All offcuts ever created, consumed ones included.
    pub fn offcuts(&self) -> &[Offcut] {
        &self.offcuts
    }

    /// Offcuts still available for matching.
    pub fn unused(&self) -> impl Iterator<Item = &Offcut> {
        self.offcuts.iter().filter(|o| !o.used)
    }

    /// Number of offcuts ever created.
    pub fn len(&self) -> usize {
        self.offcuts.len()
    }

    /// Whether the pool has never held an offcut.
    pub fn is_empty(&self) -> bool {
        self.offcuts.is_empty()
    }

    /// Give up the arena, e.g. to store it in a plan.
    pub fn into_offcuts(self) -> Vec<Offcut> {
        self.offcuts
    }

    /// Append an offcut and return its arena index.
    pub fn insert(&mut self, offcut: Offcut) -> usize {
        self.offcuts.push(offcut);
        self.offcuts.len() - 1
    }

    /// Find the oldest unused offcut that strictly contains `cut`.
    ///
    /// Returns the arena index and whether the cut is rotated. When both
    /// orientations fit, the rotated one (long side along panel Y) wins. Both
    /// tests are strict, so an offcut with a side exactly equal to the cut's
    /// is never a match.
    pub fn find_fit(&self, cut: &NormalizedCut) -> Option<(usize, bool)> {
        self.offcuts
            .iter()
            .enumerate()
            .filter(|(_, o)| !o.used)
            .find_map(|(idx, o)| {
                if o.y > cut.x && o.x > cut.y {
                    Some((idx, true))
                } else if o.x > cut.x && o.y > cut.y {
                    Some((idx, false))
                } else {
                    None
                }
            })
    }

    /// Take `cut` from the first fitting offcut, splitting the rest.
    ///
    /// Returns `None` when no unused offcut can hold the cut; the pool is
    /// left untouched in that case.
    pub fn try_fit(&mut self, cut: &NormalizedCut) -> Option<Placement> {
        let (idx, rotated) = self.find_fit(cut)?;
        self.offcuts[idx].used = true;

        let region = self.offcuts[idx].clone();
        tracing::trace!(
            "offcut {} ({} x {}) on panel {} consumed",
            idx,
            region.x,
            region.y,
            region.panel_index
        );
        self.split(&region, Some(idx), cut, rotated);

        Some(Placement {
            panel_index: region.panel_index,
            pos_x: region.pos_x,
            pos_y: region.pos_y,
            rotated,
        })
    }

    /// Guillotine-split `region` around a cut placed at its corner.
    ///
    /// A direct placement cuts across panel Y first: one child to the right
    /// of the piece at the piece's height, one strip of full region width
    /// above it. A rotated placement cuts across panel X first: one child
    /// above the piece at the piece's width, one strip of full region height
    /// to its right. The children and the piece tile the region exactly
    /// (less kerf), so no area is ever offered twice.
    pub(crate) fn split(
        &mut self,
        region: &Offcut,
        parent: Option<usize>,
        cut: &NormalizedCut,
        rotated: bool,
    ) {
        let kerf = self.kerf;
        let (fx, fy) = if rotated {
            (cut.y, cut.x)
        } else {
            (cut.x, cut.y)
        };
        let rem_x = region.x - fx - kerf;
        let rem_y = region.y - fy - kerf;
        let (left, bottom) = (region.pos_x, region.pos_y);

        // Child beyond the piece's long side first, then the full-length strip.
        let children = if rotated {
            [
                (fx, rem_y, left, bottom + fy + kerf, rem_y),
                (rem_x, region.y, left + fx + kerf, bottom, rem_x),
            ]
        } else {
            [
                (rem_x, fy, left + fx + kerf, bottom, rem_x),
                (region.x, rem_y, left, bottom + fy + kerf, rem_y),
            ]
        };

        for (x, y, pos_x, pos_y, remainder) in children {
            if !float_cmp::is_positive(remainder) {
                continue;
            }
            let mut child = Offcut::new(region.panel_index, x, y, pos_x, pos_y);
            child.parent = parent;
            self.insert(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cut(request_id: usize, x: f64, y: f64) -> NormalizedCut {
        NormalizedCut {
            request_id,
            source_ref: "test".to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_empty_pool_has_no_fit() {
        let mut pool = OffcutPool::new(0.0);
        assert!(pool.try_fit(&cut(0, 5.0, 5.0)).is_none());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_direct_fit_splits_into_two_children() {
        let mut pool = OffcutPool::new(0.0);
        // Too short along Y to take the cut rotated.
        pool.insert(Offcut::new(0, 20.0, 6.0, 50.0, 0.0));

        let placement = pool.try_fit(&cut(0, 8.0, 4.0)).unwrap();
        assert_eq!(
            placement,
            Placement {
                panel_index: 0,
                pos_x: 50.0,
                pos_y: 0.0,
                rotated: false
            }
        );

        let offcuts = pool.offcuts();
        assert_eq!(offcuts.len(), 3);
        assert!(offcuts[0].used);
        assert_eq!(
            offcuts[1],
            Offcut::new(0, 12.0, 4.0, 58.0, 0.0).with_parent(0)
        );
        assert_eq!(
            offcuts[2],
            Offcut::new(0, 20.0, 2.0, 50.0, 4.0).with_parent(0)
        );
    }

    #[test]
    fn test_rotated_fit_when_only_rotation_works() {
        let mut pool = OffcutPool::new(0.0);
        pool.insert(Offcut::new(1, 6.0, 40.0, 90.0, 0.0));

        let placement = pool.try_fit(&cut(0, 30.0, 5.0)).unwrap();
        assert!(placement.rotated);
        assert_eq!(placement.panel_index, 1);

        let offcuts = pool.offcuts();
        assert_eq!(offcuts.len(), 3);
        // Above the piece, as wide as the piece.
        assert_eq!(offcuts[1], Offcut::new(1, 5.0, 10.0, 90.0, 30.0).with_parent(0));
        // Right of the piece, full region height.
        assert_eq!(offcuts[2], Offcut::new(1, 1.0, 40.0, 95.0, 0.0).with_parent(0));
    }

    #[test]
    fn test_rotated_preferred_when_both_orientations_fit() {
        let mut pool = OffcutPool::new(0.0);
        pool.insert(Offcut::new(0, 20.0, 20.0, 0.0, 0.0));
        let placement = pool.try_fit(&cut(0, 10.0, 5.0)).unwrap();
        assert!(placement.rotated);

        let children: Vec<(f64, f64)> = pool.unused().map(|o| (o.x, o.y)).collect();
        assert_eq!(children, vec![(5.0, 10.0), (15.0, 20.0)]);
    }

    #[test]
    fn test_exact_fit_is_not_a_match() {
        let mut pool = OffcutPool::new(0.0);
        pool.insert(Offcut::new(0, 22.5, 4.0, 0.0, 44.0));
        pool.insert(Offcut::new(0, 4.0, 22.5, 0.0, 0.0));
        pool.insert(Offcut::new(0, 4.0, 30.0, 0.0, 0.0));
        pool.insert(Offcut::new(0, 30.0, 4.0, 0.0, 0.0));

        // Zero-waste candidates in both orientations and single-equal-side
        // candidates are all skipped.
        assert!(pool.find_fit(&cut(0, 22.5, 4.0)).is_none());
        assert!(pool.try_fit(&cut(0, 22.5, 4.0)).is_none());
        assert!(pool.offcuts().iter().all(|o| !o.used));
    }

    #[test]
    fn test_first_fit_takes_oldest_not_best() {
        let mut pool = OffcutPool::new(0.0);
        pool.insert(Offcut::new(0, 50.0, 40.0, 0.0, 0.0));
        pool.insert(Offcut::new(0, 11.0, 6.0, 60.0, 0.0));

        let placement = pool.try_fit(&cut(0, 10.0, 5.0)).unwrap();
        assert_eq!(placement.pos_x, 0.0);
        assert!(pool.offcuts()[0].used);
        assert!(!pool.offcuts()[1].used);
    }

    #[test]
    fn test_used_offcut_is_never_matched_again() {
        let mut pool = OffcutPool::new(0.0);
        pool.insert(Offcut::new(0, 10.0, 10.0, 0.0, 0.0));

        assert!(pool.try_fit(&cut(0, 9.0, 9.0)).is_some());
        // Children are 1 wide; the consumed parent would have fit again.
        assert!(pool.try_fit(&cut(1, 9.0, 9.0)).is_none());
        assert_eq!(pool.unused().count(), 2);
    }

    #[test]
    fn test_kerf_shrinks_children_and_drops_slivers() {
        let mut pool = OffcutPool::new(0.125);
        pool.insert(Offcut::new(0, 10.0, 5.1, 0.0, 0.0));

        pool.try_fit(&cut(0, 6.0, 5.0)).unwrap();
        let children: Vec<&Offcut> = pool.unused().collect();

        // 5.1 - 5.0 - 0.125 leaves nothing above the piece.
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].x, 3.875);
        assert_eq!(children[0].y, 5.0);
        assert_eq!(children[0].pos_x, 6.125);
    }
}
