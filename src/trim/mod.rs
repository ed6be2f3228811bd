//! Newton trim solver.
//!
//! This module provides the numerical engine for trimming a flight
//! condition: driving a set of control variables until externally computed
//! aerodynamic coefficients match their targets.
//!
//! ## Newton trim iteration
//!
//! The external analysis is a black-box function c(x) from control
//! variables to coefficients. Each iteration solves the linearized system
//!
//! ```text
//! J * delta = e
//!
//! where e = c_target - c(x)      (error vector)
//!       J = dc/dx at x           (sensitivity matrix)
//! ```
//!
//! and updates x += delta until ||e|| falls below tolerance. The Jacobian
//! is supplied by the analysis itself; the solver does not care whether it
//! comes from analytic derivatives, finite differences, or complex step.

mod analysis;
mod linear;
mod newton;

pub use analysis::{AnalysisFunction, FdAnalysis, Jacobian, LinearAnalysis};
pub use linear::{DenseSystem, Singular};
pub use newton::{TrimSolution, TrimSolver};

/// Convergence tolerance on the error norm.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Maximum Newton iterations per trim solve.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Pivot magnitude below which the Jacobian is treated as singular.
pub const SINGULARITY_THRESHOLD: f64 = 1e-15;
