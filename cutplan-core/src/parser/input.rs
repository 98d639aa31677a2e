//! Typed JSON job input.
//!
//! Three document shapes are accepted:
//!
//! ```text
//! [["base", 24, 34.5, 24], ["wall", 30, 30, 12]]
//! [{"kind": "wall", "width": 24, "height": 30, "depth": 12}]
//! {"panel": {"width": 96, "height": 48, "kerf": 0.125}, "cabinets": [...]}
//! ```
//!
//! Rows and records may be mixed within one cabinet list.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::config::PanelConfig;
use crate::error::{PlanError, Result};
use crate::model::Cabinet;

/// A parsed job: cabinets to build and an optional panel override.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Panel section from the file, if present.
    pub panel: Option<PanelConfig>,
    /// Cabinets in file order.
    pub cabinets: Vec<Cabinet>,
}

#[derive(Debug, Deserialize)]
struct CabinetRow(String, f64, f64, f64);

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CabinetRecord {
    kind: String,
    width: f64,
    height: f64,
    depth: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JobDocument {
    #[serde(default)]
    panel: Option<PanelConfig>,
    cabinets: Vec<Value>,
}

/// Parse a job file.
pub fn parse_input_file(path: &Path) -> Result<Job> {
    if !path.exists() {
        return Err(PlanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(PlanError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_input_str(&content)
}

/// Parse job JSON from a string.
pub fn parse_input_str(content: &str) -> Result<Job> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| PlanError::malformed(format!("invalid JSON ({})", e)))?;

    let (panel, entries) = match document {
        Value::Array(entries) => (None, entries),
        job @ Value::Object(_) => {
            let job: JobDocument = serde_json::from_value(job)
                .map_err(|e| PlanError::malformed(format!("job object: {}", e)))?;
            (job.panel, job.cabinets)
        }
        _ => {
            return Err(PlanError::malformed(
                "expected a cabinet list or a job object",
            ));
        }
    };

    let cabinets = entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| cabinet_from_value(entry, idx + 1))
        .collect::<Result<Vec<_>>>()?;
    for (idx, cabinet) in cabinets.iter().enumerate() {
        check_cabinet(cabinet, idx + 1)?;
    }

    tracing::debug!(
        "parsed {} cabinet(s){}",
        cabinets.len(),
        if panel.is_some() { " with panel section" } else { "" }
    );

    Ok(Job { panel, cabinets })
}

/// Read one cabinet entry, either a `[kind, w, h, d]` row or a record.
fn cabinet_from_value(entry: Value, number: usize) -> Result<Cabinet> {
    let parsed = match entry {
        row @ Value::Array(_) => serde_json::from_value(row).map(|r: CabinetRow| {
            let CabinetRow(kind, width, height, depth) = r;
            Cabinet::new(kind, width, height, depth)
        }),
        record @ Value::Object(_) => serde_json::from_value(record)
            .map(|r: CabinetRecord| Cabinet::new(r.kind, r.width, r.height, r.depth)),
        other => {
            return Err(PlanError::malformed(format!(
                "cabinet {}: expected a row or a record, got {}",
                number, other
            )));
        }
    };
    parsed.map_err(|e| PlanError::malformed(format!("cabinet {}: {}", number, e)))
}

fn check_cabinet(cabinet: &Cabinet, number: usize) -> Result<()> {
    let dims = [
        ("width", cabinet.width),
        ("height", cabinet.height),
        ("depth", cabinet.depth),
    ];
    for (name, value) in dims {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlanError::malformed(format!(
                "cabinet {}: {} must be positive, got {}",
                number, name, value
            )));
        }
    }
    if cabinet.kind.trim().is_empty() {
        return Err(PlanError::malformed(format!(
            "cabinet {}: kind is empty",
            number
        )));
    }
    Ok(())
}
