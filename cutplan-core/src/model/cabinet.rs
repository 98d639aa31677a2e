//! Cabinet definitions as read from a job file.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PlanError;

/// Cabinet construction kinds with a known cut formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinetKind {
    /// Floor-standing cabinet with a toe kick.
    Base,
    /// Wall-hung cabinet.
    Wall,
}

impl FromStr for CabinetKind {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(CabinetKind::Base),
            "wall" => Ok(CabinetKind::Wall),
            _ => Err(PlanError::UnknownCabinetKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CabinetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CabinetKind::Base => write!(f, "base"),
            CabinetKind::Wall => write!(f, "wall"),
        }
    }
}

/// A cabinet box to be built.
///
/// The kind is kept as written in the input so an unsupported kind surfaces
/// as [`PlanError::UnknownCabinetKind`] during translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    /// Construction kind, e.g. `base` or `wall`.
    pub kind: String,
    /// Outside width.
    pub width: f64,
    /// Outside height.
    pub height: f64,
    /// Outside depth.
    pub depth: f64,
}

impl Cabinet {
    /// Create a new cabinet.
    pub fn new(kind: impl Into<String>, width: f64, height: f64, depth: f64) -> Self {
        Self {
            kind: kind.into(),
            width,
            height,
            depth,
        }
    }

    /// Resolve the kind against the formula table.
    pub fn kind(&self) -> Result<CabinetKind, PlanError> {
        self.kind.parse()
    }

    /// Identifier tying cut requests back to this cabinet, e.g. `wall-24-30-12`.
    pub fn reference(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.kind, self.width, self.height, self.depth
        )
    }
}
