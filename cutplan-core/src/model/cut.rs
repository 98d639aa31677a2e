//! Rectangular cut requests before and after orientation normalization.

use serde::{Deserialize, Serialize};

/// A single rectangular piece of material required by a cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    /// Dense request identifier, unique within a job.
    pub id: usize,
    /// Reference to the originating cabinet.
    pub source_ref: String,
    /// First dimension as given by the cut formula.
    pub width: f64,
    /// Second dimension as given by the cut formula.
    pub height: f64,
}

impl CutRequest {
    /// Create a new cut request.
    pub fn new(id: usize, source_ref: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id,
            source_ref: source_ref.into(),
            width,
            height,
        }
    }

    /// Area of the requested piece.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A cut request with its long side on X.
///
/// Only produced by [`crate::transform::normalize`], which guarantees `x >= y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCut {
    /// Id of the request this cut came from.
    pub request_id: usize,
    /// Reference to the originating cabinet.
    pub source_ref: String,
    /// Long side.
    pub x: f64,
    /// Short side.
    pub y: f64,
}

impl NormalizedCut {
    /// Area of the piece.
    pub fn area(&self) -> f64 {
        self.x * self.y
    }
}
