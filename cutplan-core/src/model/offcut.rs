//! Leftover panel regions available for reuse.

use serde::{Deserialize, Serialize};

/// A leftover rectangle on a panel.
///
/// Dimensions are measured along panel axes: `x` is the extent along the
/// panel's X, `y` along its Y. An offcut is never resized; consuming it sets
/// `used` and produces child offcuts instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offcut {
    /// Panel this offcut belongs to.
    pub panel_index: usize,
    /// Extent along panel X.
    pub x: f64,
    /// Extent along panel Y.
    pub y: f64,
    /// Left edge within the panel.
    pub pos_x: f64,
    /// Bottom edge within the panel.
    pub pos_y: f64,
    /// Whether a cut has been taken from this offcut.
    pub used: bool,
    /// Pool index of the offcut this one was split from (None for panel seeds).
    pub parent: Option<usize>,
}

impl Offcut {
    /// Create a new, unused offcut.
    pub fn new(panel_index: usize, x: f64, y: f64, pos_x: f64, pos_y: f64) -> Self {
        Self {
            panel_index,
            x,
            y,
            pos_x,
            pos_y,
            used: false,
            parent: None,
        }
    }

    /// Record the offcut this one was split from.
    pub fn with_parent(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Area of the offcut.
    pub fn area(&self) -> f64 {
        self.x * self.y
    }

    /// Get the right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.pos_x + self.x
    }

    /// Get the top edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.pos_y + self.y
    }
}
