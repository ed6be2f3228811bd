//! Analytic planform mesh generation.
//!
//! Builds trapezoidal lifting-surface meshes from a handful of planform
//! parameters. This is the in-crate mesh provider used by tests and the CLI;
//! meshes deformed by an external geometry pipeline enter through
//! [`Mesh::from_points`] instead.

use nalgebra::Point3;

use crate::error::{AerotrimError, Result};

use super::Mesh;

/// Configuration for an analytically generated trapezoidal planform.
///
/// The surface spans from the root at y = 0 to the tip at y = `semispan`,
/// with x pointing aft (leading to trailing edge) and z up.
#[derive(Debug, Clone)]
pub struct PlanformConfig {
    /// Semispan length, root to tip.
    pub semispan: f64,
    /// Chord length at the root station.
    pub root_chord: f64,
    /// Taper ratio: tip chord over root chord. 1 is untapered, 0 goes to a
    /// point at the tip.
    pub taper: f64,
    /// Leading-edge sweep angle in degrees (positive aft).
    pub sweep: f64,
    /// Dihedral angle in degrees (positive tip-up).
    pub dihedral: f64,
    /// Geometric twist at the tip in degrees (positive leading-edge-up),
    /// varying linearly from zero at the root. Sections rotate about their
    /// local quarter chord.
    pub tip_twist: f64,
    /// Number of chordwise stations (>= 2).
    pub num_chordwise: usize,
    /// Number of spanwise stations (>= 2).
    pub num_spanwise: usize,
}

impl Default for PlanformConfig {
    fn default() -> Self {
        Self {
            semispan: 10.0,
            root_chord: 2.0,
            taper: 1.0,
            sweep: 0.0,
            dihedral: 0.0,
            tip_twist: 0.0,
            num_chordwise: 2,
            num_spanwise: 5,
        }
    }
}

impl PlanformConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the semispan.
    pub fn with_semispan(mut self, semispan: f64) -> Self {
        self.semispan = semispan;
        self
    }

    /// Set the root chord.
    pub fn with_root_chord(mut self, root_chord: f64) -> Self {
        self.root_chord = root_chord;
        self
    }

    /// Set the taper ratio.
    pub fn with_taper(mut self, taper: f64) -> Self {
        self.taper = taper;
        self
    }

    /// Set the leading-edge sweep angle in degrees.
    pub fn with_sweep(mut self, sweep: f64) -> Self {
        self.sweep = sweep;
        self
    }

    /// Set the dihedral angle in degrees.
    pub fn with_dihedral(mut self, dihedral: f64) -> Self {
        self.dihedral = dihedral;
        self
    }

    /// Set the linear tip twist in degrees.
    pub fn with_tip_twist(mut self, tip_twist: f64) -> Self {
        self.tip_twist = tip_twist;
        self
    }

    /// Set the grid dimensions.
    pub fn with_grid(mut self, num_chordwise: usize, num_spanwise: usize) -> Self {
        self.num_chordwise = num_chordwise;
        self.num_spanwise = num_spanwise;
        self
    }

    /// Generate the planform mesh.
    ///
    /// # Errors
    ///
    /// Returns [`AerotrimError::InvalidPlanform`] for non-finite or
    /// out-of-range parameters and [`AerotrimError::MeshTooSmall`] for grid
    /// dimensions below 2.
    pub fn build(&self) -> Result<Mesh> {
        self.validate()?;

        let nx = self.num_chordwise;
        let ny = self.num_spanwise;
        let sweep_slope = self.sweep.to_radians().tan();
        let dihedral_slope = self.dihedral.to_radians().tan();

        let mut points = vec![Point3::origin(); nx * ny];
        for j in 0..ny {
            let eta = j as f64 / (ny - 1) as f64;
            let y = eta * self.semispan;
            let chord = self.root_chord * (1.0 - (1.0 - self.taper) * eta);
            let x_le = sweep_slope * y;
            let z = dihedral_slope * y;

            // Section twist rotates about the local quarter chord in the
            // x-z plane, leading edge up for positive angles.
            let twist = (self.tip_twist * eta).to_radians();
            let (sin_t, cos_t) = twist.sin_cos();
            let x_pivot = x_le + 0.25 * chord;

            for i in 0..nx {
                let frac = i as f64 / (nx - 1) as f64;
                let dx = x_le + frac * chord - x_pivot;
                points[i * ny + j] = Point3::new(
                    x_pivot + dx * cos_t,
                    y,
                    z - dx * sin_t,
                );
            }
        }

        Mesh::from_points(nx, ny, points)
    }

    fn validate(&self) -> Result<()> {
        if !(self.semispan.is_finite() && self.semispan > 0.0) {
            return Err(AerotrimError::invalid_planform(
                "semispan must be finite and positive",
            ));
        }
        if !(self.root_chord.is_finite() && self.root_chord > 0.0) {
            return Err(AerotrimError::invalid_planform(
                "root chord must be finite and positive",
            ));
        }
        if !(self.taper.is_finite() && self.taper >= 0.0) {
            return Err(AerotrimError::invalid_planform(
                "taper ratio must be finite and non-negative",
            ));
        }
        if !(self.sweep.is_finite() && self.sweep.abs() < 89.0) {
            return Err(AerotrimError::invalid_planform(
                "sweep angle must be within (-89, 89) degrees",
            ));
        }
        if !(self.dihedral.is_finite() && self.dihedral.abs() < 89.0) {
            return Err(AerotrimError::invalid_planform(
                "dihedral angle must be within (-89, 89) degrees",
            ));
        }
        if !self.tip_twist.is_finite() {
            return Err(AerotrimError::invalid_planform(
                "tip twist must be finite",
            ));
        }
        if self.num_chordwise < 2 || self.num_spanwise < 2 {
            return Err(AerotrimError::MeshTooSmall {
                nx: self.num_chordwise,
                ny: self.num_spanwise,
            });
        }
        Ok(())
    }
}
