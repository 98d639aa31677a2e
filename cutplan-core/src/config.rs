//! Configuration constants and settings for the planner.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default stock panel width (long side, inches).
pub const DEFAULT_PANEL_WIDTH: f64 = 96.0;

/// Default stock panel height (short side, inches).
pub const DEFAULT_PANEL_HEIGHT: f64 = 48.0;

/// Default blade width. Zero disables kerf compensation.
pub const DEFAULT_KERF: f64 = 0.0;

/// Stock panel configuration for one planning run.
///
/// Every panel allocated in a run has these dimensions. Missing fields in an
/// input file fall back to a 4' x 8' sheet with no kerf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Panel extent along X.
    pub width: f64,
    /// Panel extent along Y.
    pub height: f64,
    /// Material lost to each cut, subtracted from every remainder.
    pub kerf: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANEL_WIDTH,
            height: DEFAULT_PANEL_HEIGHT,
            kerf: DEFAULT_KERF,
        }
    }
}

impl PanelConfig {
    /// Create a panel configuration with no kerf.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            kerf: DEFAULT_KERF,
        }
    }

    /// Set the kerf.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Area of one panel.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check that dimensions are finite and positive and kerf is non-negative.
    pub fn validate(&self) -> Result<()> {
        let dims_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        let kerf_ok = self.kerf.is_finite() && self.kerf >= 0.0;

        if dims_ok && kerf_ok {
            Ok(())
        } else {
            Err(PlanError::InvalidPanel {
                width: self.width,
                height: self.height,
                kerf: self.kerf,
            })
        }
    }

    /// Whether a piece of `x` by `y` fits on an empty panel, either way round.
    ///
    /// Uses non-strict comparison: a piece the exact size of the panel fits.
    pub fn can_hold(&self, x: f64, y: f64) -> bool {
        (x <= self.width && y <= self.height) || (x <= self.height && y <= self.width)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a remainder is large enough to keep as an offcut.
    #[inline]
    pub fn is_positive(a: f64) -> bool {
        a > EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four_by_eight() {
        let config = PanelConfig::default();
        assert_eq!(config.width, 96.0);
        assert_eq!(config.height, 48.0);
        assert_eq!(config.kerf, 0.0);
        assert_eq!(config.area(), 4608.0);
    }

    #[test]
    fn test_validate_rejects_bad_panels() {
        assert!(PanelConfig::default().validate().is_ok());
        assert!(PanelConfig::new(0.0, 48.0).validate().is_err());
        assert!(PanelConfig::new(96.0, -1.0).validate().is_err());
        assert!(PanelConfig::new(f64::INFINITY, 48.0).validate().is_err());
        assert!(PanelConfig::default().with_kerf(-0.125).validate().is_err());
        assert!(PanelConfig::default().with_kerf(0.125).validate().is_ok());
    }

    #[test]
    fn test_can_hold_either_orientation() {
        let config = PanelConfig::default();
        assert!(config.can_hold(96.0, 48.0));
        assert!(config.can_hold(48.0, 96.0));
        assert!(config.can_hold(90.0, 40.0));
        assert!(!config.can_hold(100.0, 50.0));
        assert!(!config.can_hold(97.0, 10.0));
    }

    #[test]
    fn test_partial_panel_section_uses_defaults() {
        let config: PanelConfig = serde_json::from_str(r#"{"kerf": 0.125}"#).unwrap();
        assert_eq!(config.width, 96.0);
        assert_eq!(config.height, 48.0);
        assert_eq!(config.kerf, 0.125);
    }

    #[test]
    fn test_misspelled_panel_key_is_rejected() {
        let err = serde_json::from_str::<PanelConfig>(r#"{"widht": 120}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `widht`"));
    }

    #[test]
    fn test_is_positive() {
        assert!(float_cmp::is_positive(0.5));
        assert!(!float_cmp::is_positive(0.0));
        assert!(!float_cmp::is_positive(0.00001));
        assert!(!float_cmp::is_positive(-2.0));
    }
}
