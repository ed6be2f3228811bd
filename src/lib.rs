//! # Aerotrim Core
//!
//! Structural beam geometry extraction and Newton trim solving for lifting
//! surfaces.
//!
//! This library provides:
//! - A panel-mesh representation for lifting surfaces, with validation and
//!   an analytic planform generator
//! - Beam geometry extraction: per-spanwise-element streamwise chord,
//!   elastic-axis-normal (FEM) chord, and FEM twist
//! - A Newton trim solver that drives control variables (angle of attack,
//!   control-surface twist) until target aerodynamic coefficients are met
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`mesh`] - Lifting-surface mesh grid, generation, and validation
//! - [`airfoil`] - Cross-section profiles and shear-center location
//! - [`surface`] - Typed surface and flight-state configuration records
//! - [`geometry`] - Beam geometry extraction along the elastic axis
//! - [`trim`] - Newton trim iteration over an external analysis function
//!
//! ## Trim method
//!
//! The aerodynamic/structural analysis is treated as a black box c(x)
//! returning coefficients and their sensitivities. Each trim iteration:
//!
//! 1. Evaluates the analysis at the current control variables
//! 2. Forms the error e = c_target - c(x) and checks its Euclidean norm
//! 3. Solves J delta = e with a dense LU decomposition
//! 4. Updates x += delta
//!
//! Convergence is exact in one step for affine analyses and locally
//! quadratic otherwise.

pub mod airfoil;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod surface;
pub mod trim;

// Re-export main types for convenience
pub use airfoil::AirfoilProfile;
pub use error::{AerotrimError, Result};
pub use geometry::{extract_beam_geometry, ElementGeometry};
pub use mesh::Mesh;
pub use trim::{AnalysisFunction, TrimSolution, TrimSolver};

/// Air density at sea level in kg/m^3
pub const SEA_LEVEL_DENSITY: f64 = 1.225;
