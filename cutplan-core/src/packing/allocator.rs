//! Stock panel allocation.

use crate::config::PanelConfig;
use crate::error::{PlanError, Result};
use crate::model::{NormalizedCut, Offcut, Panel};

use super::pool::{OffcutPool, Placement};

/// Opens stock panels when no offcut can hold a cut.
#[derive(Debug, Clone)]
pub struct PanelAllocator {
    config: PanelConfig,
    panels: Vec<Panel>,
}

impl PanelAllocator {
    /// Create an allocator for panels of the configured size.
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            panels: Vec::new(),
        }
    }

    /// Panels opened so far, in allocation order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Give up the allocated panels.
    pub fn into_panels(self) -> Vec<Panel> {
        self.panels
    }

    /// Check that a fresh panel can hold `cut` in some orientation.
    pub fn check_placeable(&self, cut: &NormalizedCut) -> Result<()> {
        if self.config.can_hold(cut.x, cut.y) {
            Ok(())
        } else {
            Err(PlanError::UnfittableRequest {
                request_id: cut.request_id,
                x: cut.x,
                y: cut.y,
                panel_width: self.config.width,
                panel_height: self.config.height,
            })
        }
    }

    /// Open a new panel, place `cut` at its origin, and seed `pool` with the
    /// panel's leftover area.
    ///
    /// The cut goes in direct orientation when it fits that way, rotated
    /// otherwise. Nothing is allocated when the cut fits neither way.
    pub fn new_panel(&mut self, cut: &NormalizedCut, pool: &mut OffcutPool) -> Result<Placement> {
        self.check_placeable(cut)?;

        let index = self.panels.len();
        let panel = Panel {
            index,
            width: self.config.width,
            height: self.config.height,
        };
        self.panels.push(panel);

        let rotated = !(cut.x <= panel.width && cut.y <= panel.height);
        let whole = Offcut::new(index, panel.width, panel.height, 0.0, 0.0);
        pool.split(&whole, None, cut, rotated);

        tracing::debug!(
            "opened panel {} for request {}{}",
            index,
            cut.request_id,
            if rotated { " (rotated)" } else { "" }
        );

        Ok(Placement {
            panel_index: index,
            pos_x: 0.0,
            pos_y: 0.0,
            rotated,
        })
    }
}
