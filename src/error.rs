//! Error types for the aerotrim core.
//!
//! This module provides a unified error type [`AerotrimError`] that covers
//! all error conditions that can occur during mesh/profile validation,
//! beam geometry extraction, and trim solving.

use thiserror::Error;

/// Result type alias using [`AerotrimError`].
pub type Result<T> = std::result::Result<T, AerotrimError>;

/// Unified error type for all aerotrim operations.
#[derive(Error, Debug)]
pub enum AerotrimError {
    // ============ Mesh Validation Errors ============
    /// Mesh dimensions below the 2x2 minimum
    #[error("Mesh too small: {nx} chordwise x {ny} spanwise stations (need at least 2 x 2)")]
    MeshTooSmall { nx: usize, ny: usize },

    /// Point count does not match the declared grid dimensions
    #[error("Mesh point count {points} does not match {nx} x {ny} grid")]
    MeshPointCountMismatch { nx: usize, ny: usize, points: usize },

    /// Mesh contains a NaN or infinite coordinate
    #[error("Non-finite mesh point at chordwise station {chordwise}, spanwise station {spanwise}")]
    NonFiniteMeshPoint { chordwise: usize, spanwise: usize },

    /// Spanwise stations are not monotonically ordered along the span
    #[error("Spanwise ordering is not monotonic at station {station}")]
    NonMonotonicSpan { station: usize },

    /// Invalid planform parameter
    #[error("Invalid planform: {message}")]
    InvalidPlanform { message: String },

    // ============ Airfoil Profile Errors ============
    /// Profile has no points
    #[error("Airfoil profile has no points")]
    EmptyProfile,

    /// Upper and lower surface point counts differ
    #[error("Airfoil profile surfaces are not paired: {upper} upper vs {lower} lower points")]
    MismatchedProfile { upper: usize, lower: usize },

    /// Profile endpoints have no thickness to weight the shear center by
    #[error("Airfoil profile has zero thickness at both endpoints")]
    ZeroThicknessProfile,

    // ============ Geometry Extraction Errors ============
    /// Element chord collapsed during FEM projection or twist normalization
    #[error("Degenerate geometry at element {element}: chord {fem_chord:.3e} is too small for twist normalization")]
    DegenerateElement { element: usize, fem_chord: f64 },

    // ============ Trim Solver Errors ============
    /// Jacobian is numerically singular and the Newton step cannot be computed
    #[error("Singular Jacobian at trim iteration {iteration}")]
    SingularJacobian { iteration: usize },

    /// Newton iteration did not converge within the iteration budget
    #[error("Trim did not converge after {iterations} iterations (residual: {residual:.2e})")]
    TrimNotConverged {
        iterations: usize,
        residual: f64,
        /// Control-variable values at the last iterate
        controls: Vec<f64>,
    },

    /// Vector or matrix dimensions disagree
    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Failure propagated from the external analysis function
    #[error("Analysis evaluation failed: {source}")]
    Analysis {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AerotrimError {
    /// Create an invalid planform error
    pub fn invalid_planform(message: impl Into<String>) -> Self {
        Self::InvalidPlanform {
            message: message.into(),
        }
    }

    /// Create a degenerate element error
    pub fn degenerate_element(element: usize, fem_chord: f64) -> Self {
        Self::DegenerateElement { element, fem_chord }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Wrap an external analysis failure
    pub fn analysis(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Analysis {
            source: Box::new(source),
        }
    }
}
