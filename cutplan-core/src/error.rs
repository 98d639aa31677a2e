//! Error types for cut planning.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::CuttingPlan;

/// Error codes for cut planning, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input file not found (-1)
    FileNotFound = -1,
    /// Empty input file (-2)
    EmptyFile = -2,
    /// Input document is malformed (-3)
    MalformedInput = -3,
    /// Panel configuration is unusable (-4)
    InvalidPanel = -4,
    /// Cut request with a non-positive dimension (E100)
    InvalidDimension = 100,
    /// Cut request larger than a panel in both orientations (E101)
    UnfittableRequest = 101,
    /// Cabinet kind missing from the formula table (E200)
    UnknownCabinetKind = 200,
    /// Output could not be serialized (E300)
    Serialization = 300,
}

/// Main error type for cut planning.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Invalid panel configuration: {width} x {height} with kerf {kerf}")]
    InvalidPanel { width: f64, height: f64, kerf: f64 },

    #[error("Cut request {request_id} has invalid dimensions ({width} x {height})")]
    InvalidDimension {
        request_id: usize,
        width: f64,
        height: f64,
    },

    #[error("Cut request {request_id} ({x} x {y}) does not fit a {panel_width} x {panel_height} panel in either orientation")]
    UnfittableRequest {
        request_id: usize,
        x: f64,
        y: f64,
        panel_width: f64,
        panel_height: f64,
    },

    #[error("Unknown cabinet kind: '{kind}'")]
    UnknownCabinetKind { kind: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlanError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlanError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PlanError::MalformedInput { .. } => ErrorCode::MalformedInput,
            PlanError::InvalidPanel { .. } => ErrorCode::InvalidPanel,
            PlanError::InvalidDimension { .. } => ErrorCode::InvalidDimension,
            PlanError::UnfittableRequest { .. } => ErrorCode::UnfittableRequest,
            PlanError::UnknownCabinetKind { .. } => ErrorCode::UnknownCabinetKind,
            PlanError::Io(_) => ErrorCode::FileNotFound,
            PlanError::Serialization(_) => ErrorCode::Serialization,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Shorthand for a [`PlanError::MalformedInput`].
    pub fn malformed(message: impl Into<String>) -> Self {
        PlanError::MalformedInput {
            message: message.into(),
        }
    }
}

/// A run that aborted, together with whatever plan was built before the failure.
///
/// The partial plan is diagnostic only: it holds every placement made before
/// the failing request and the offcut pool as it stood at that moment.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct PlanFailure {
    /// What stopped the run.
    pub error: PlanError,
    /// Plan state at the moment of failure.
    pub partial: CuttingPlan,
}

impl PlanFailure {
    /// Wrap an error with the partial plan built so far.
    pub fn new(error: PlanError, partial: CuttingPlan) -> Self {
        Self { error, partial }
    }

    /// Human-readable failure reason, as rendered in reports.
    pub fn reason(&self) -> String {
        self.error.to_string()
    }
}

impl From<PlanError> for PlanFailure {
    fn from(error: PlanError) -> Self {
        Self::new(error, CuttingPlan::default())
    }
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;
