//! Cutting plan produced by the packing engine.

use serde::{Deserialize, Serialize};

use super::Offcut;

/// A stock sheet opened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Allocation order, dense from 0.
    pub index: usize,
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub height: f64,
}

impl Panel {
    /// Area of the panel.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Where a cut request landed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCut {
    /// Id of the placed request.
    pub request_id: usize,
    /// Reference to the originating cabinet.
    pub source_ref: String,
    /// Panel holding the piece.
    pub panel_index: usize,
    /// Left edge within the panel.
    pub pos_x: f64,
    /// Bottom edge within the panel.
    pub pos_y: f64,
    /// Long side of the piece.
    pub x: f64,
    /// Short side of the piece.
    pub y: f64,
    /// True when the long side runs along panel Y.
    pub rotated: bool,
}

impl PlacedCut {
    /// Extent of the piece along panel X.
    pub fn extent_x(&self) -> f64 {
        if self.rotated {
            self.y
        } else {
            self.x
        }
    }

    /// Extent of the piece along panel Y.
    pub fn extent_y(&self) -> f64 {
        if self.rotated {
            self.x
        } else {
            self.y
        }
    }

    /// Area of the piece.
    pub fn area(&self) -> f64 {
        self.x * self.y
    }
}

/// Complete result of a packing run.
///
/// `offcuts` keeps every offcut ever created, consumed ones included, in
/// creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlan {
    /// Panels in allocation order.
    pub panels: Vec<Panel>,
    /// Placements in placement order.
    pub placements: Vec<PlacedCut>,
    /// Offcut pool history.
    pub offcuts: Vec<Offcut>,
}

impl CuttingPlan {
    /// Number of stock panels required.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Total area of all panels.
    pub fn stock_area(&self) -> f64 {
        self.panels.iter().map(Panel::area).sum()
    }

    /// Total area of all placed pieces.
    pub fn placed_area(&self) -> f64 {
        self.placements.iter().map(PlacedCut::area).sum()
    }

    /// Placements on one panel, in placement order.
    pub fn placements_on(&self, panel_index: usize) -> impl Iterator<Item = &PlacedCut> {
        self.placements
            .iter()
            .filter(move |p| p.panel_index == panel_index)
    }

    /// Find the placement for a request.
    pub fn placement_for(&self, request_id: usize) -> Option<&PlacedCut> {
        self.placements.iter().find(|p| p.request_id == request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(request_id: usize, panel_index: usize, rotated: bool) -> PlacedCut {
        PlacedCut {
            request_id,
            source_ref: "wall-24-30-12".to_string(),
            panel_index,
            pos_x: 0.0,
            pos_y: 0.0,
            x: 30.0,
            y: 12.0,
            rotated,
        }
    }

    #[test]
    fn test_extents_follow_rotation() {
        let direct = placed(0, 0, false);
        assert_eq!((direct.extent_x(), direct.extent_y()), (30.0, 12.0));

        let rotated = placed(1, 0, true);
        assert_eq!((rotated.extent_x(), rotated.extent_y()), (12.0, 30.0));
    }

    #[test]
    fn test_plan_totals() {
        let plan = CuttingPlan {
            panels: vec![
                Panel {
                    index: 0,
                    width: 96.0,
                    height: 48.0,
                },
                Panel {
                    index: 1,
                    width: 96.0,
                    height: 48.0,
                },
            ],
            placements: vec![placed(0, 0, false), placed(1, 1, true), placed(2, 1, false)],
            offcuts: Vec::new(),
        };

        assert_eq!(plan.panel_count(), 2);
        assert_eq!(plan.stock_area(), 9216.0);
        assert_eq!(plan.placed_area(), 1080.0);
        assert_eq!(plan.placements_on(1).count(), 2);
        assert_eq!(plan.placement_for(2).map(|p| p.panel_index), Some(1));
        assert!(plan.placement_for(7).is_none());
    }
}
