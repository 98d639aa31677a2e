//! Pre-flight validation of a job.
//!
//! Unlike the packing engine, which stops at the first bad request,
//! validation walks the whole job and reports every problem it finds.

use crate::config::{float_cmp, PanelConfig};
use crate::model::{Cabinet, CutRequest};
use crate::transform::{cuts_for_cabinet, normalize};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate cabinets and the cut requests they translate to.
pub fn validate_cabinets(cabinets: &[Cabinet], config: &PanelConfig) -> ValidationResult {
    let mut result = validate_config(config);

    if cabinets.is_empty() {
        result.add_warning("No cabinets in job");
    }

    let mut next_id = 0;
    for (idx, cabinet) in cabinets.iter().enumerate() {
        let pieces = match cuts_for_cabinet(cabinet) {
            Ok(pieces) => pieces,
            Err(err) => {
                result.add_error(format!("Cabinet {}: {}", idx + 1, err));
                continue;
            }
        };

        let source_ref = cabinet.reference();
        let requests: Vec<CutRequest> = pieces
            .into_iter()
            .map(|(width, height)| {
                let request = CutRequest::new(next_id, source_ref.clone(), width, height);
                next_id += 1;
                request
            })
            .collect();

        result.merge(validate_requests(&requests, config));
    }

    result
}

/// Validate individual cut requests against the panel size.
pub fn validate_requests(requests: &[CutRequest], config: &PanelConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for request in requests {
        let label = format!("Request {} ({})", request.id, request.source_ref);

        let (x, y) = match normalize(request) {
            Ok(cut) => (cut.x, cut.y),
            Err(_) => {
                result.add_error(format!(
                    "{}: Invalid dimensions ({}x{})",
                    label, request.width, request.height
                ));
                continue;
            }
        };

        if !config.can_hold(x, y) {
            result.add_error(format!(
                "{}: {}x{} does not fit a {}x{} panel",
                label, x, y, config.width, config.height
            ));
            continue;
        }

        let long = config.width.max(config.height);
        let short = config.width.min(config.height);
        if float_cmp::approx_eq(x, long) && float_cmp::approx_eq(y, short) {
            result.add_warning(format!("{}: Uses a whole panel", label));
        }
    }

    result
}

fn validate_config(config: &PanelConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();
    if let Err(err) = config.validate() {
        result.add_error(err.to_string());
    } else if config.kerf > 0.0 && config.kerf >= config.width.min(config.height) {
        result.add_warning(format!(
            "Kerf {} is as large as the panel's short side",
            config.kerf
        ));
    }
    result
}
