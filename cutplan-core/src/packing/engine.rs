//! Packing engine: normalize, sort, then fit-or-allocate each cut.

use crate::config::PanelConfig;
use crate::error::{PlanError, PlanFailure, Result};
use crate::model::{CutRequest, CuttingPlan, NormalizedCut, PlacedCut};
use crate::transform::{normalize_all, sort_decreasing};

use super::allocator::PanelAllocator;
use super::pool::OffcutPool;

/// Run phases. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    Start,
    Normalizing,
    Sorting,
    Placing,
    Done,
    Failed,
}

/// Single-use packing engine.
///
/// An engine owns its offcut pool and panel allocator exclusively and is
/// consumed by [`PackingEngine::run`], so no state carries over between runs.
#[derive(Debug)]
pub struct PackingEngine {
    state: EngineState,
    pool: OffcutPool,
    allocator: PanelAllocator,
    placements: Vec<PlacedCut>,
}

impl PackingEngine {
    /// Create an engine for panels of the given configuration.
    pub fn new(config: PanelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: EngineState::Start,
            pool: OffcutPool::new(config.kerf),
            allocator: PanelAllocator::new(config),
            placements: Vec::new(),
        })
    }

    /// Pack `requests` and return the finished plan.
    ///
    /// The first invalid or unfittable request aborts the run; the returned
    /// failure carries every placement made up to that point.
    pub fn run(mut self, requests: &[CutRequest]) -> std::result::Result<CuttingPlan, PlanFailure> {
        self.transition(EngineState::Normalizing);
        let cuts = match normalize_all(requests) {
            Ok(cuts) => cuts,
            Err(err) => return Err(self.fail(err)),
        };

        self.transition(EngineState::Sorting);
        let cuts = sort_decreasing(cuts);

        self.transition(EngineState::Placing);
        for cut in &cuts {
            if let Err(err) = self.place(cut) {
                return Err(self.fail(err));
            }
        }

        self.transition(EngineState::Done);
        tracing::debug!(
            "placed {} cut(s) on {} panel(s), {} offcut(s) created",
            self.placements.len(),
            self.allocator.panels().len(),
            self.pool.len()
        );
        Ok(self.into_plan())
    }

    /// Place one cut from an offcut if possible, else on a new panel.
    fn place(&mut self, cut: &NormalizedCut) -> Result<()> {
        let placement = match self.pool.try_fit(cut) {
            Some(placement) => {
                tracing::debug!(
                    "request {} ({} x {}) taken from offcut on panel {}",
                    cut.request_id,
                    cut.x,
                    cut.y,
                    placement.panel_index
                );
                placement
            }
            None => self.allocator.new_panel(cut, &mut self.pool)?,
        };

        self.placements.push(PlacedCut {
            request_id: cut.request_id,
            source_ref: cut.source_ref.clone(),
            panel_index: placement.panel_index,
            pos_x: placement.pos_x,
            pos_y: placement.pos_y,
            x: cut.x,
            y: cut.y,
            rotated: placement.rotated,
        });
        Ok(())
    }

    fn transition(&mut self, next: EngineState) {
        tracing::trace!("engine {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail(mut self, err: PlanError) -> PlanFailure {
        self.transition(EngineState::Failed);
        tracing::debug!("run aborted: {}", err);
        PlanFailure::new(err, self.into_plan())
    }

    fn into_plan(self) -> CuttingPlan {
        CuttingPlan {
            panels: self.allocator.into_panels(),
            placements: self.placements,
            offcuts: self.pool.into_offcuts(),
        }
    }
}

/// Pack `requests` onto panels of the given configuration.
pub fn pack(
    config: PanelConfig,
    requests: &[CutRequest],
) -> std::result::Result<CuttingPlan, PlanFailure> {
    PackingEngine::new(config)?.run(requests)
}
