//! Lifting-surface mesh representation, generation, and validation.
//!
//! This module provides the internal representation of a lifting-surface
//! panel mesh. The [`Mesh`] struct holds an ordered 2-D grid of 3-D points
//! indexed by (chordwise station, spanwise station) in a form suitable for
//! beam geometry extraction.

mod grid;
mod planform;
mod validate;

pub use grid::Mesh;
pub use planform::PlanformConfig;
pub use validate::validate_mesh;
