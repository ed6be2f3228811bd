//! Surface and flight-state configuration records.
//!
//! Required geometric and physical parameters are carried in explicit,
//! statically-typed records with documented defaults rather than loosely
//! typed key/value maps.

use nalgebra::Point3;

use crate::airfoil::AirfoilProfile;
use crate::SEA_LEVEL_DENSITY;

/// How the reference area of a surface is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SRefType {
    /// Total wetted area of the surface.
    Wetted,
    /// Area projected onto the x-y plane.
    #[default]
    Projected,
}

/// Configuration for one lifting surface.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Name of the surface.
    pub name: String,
    /// If true, model one half of the surface reflected across y = 0.
    pub symmetry: bool,
    /// Reference-area convention.
    pub s_ref_type: SRefType,
    /// Lift coefficient of the surface at zero angle of attack.
    pub cl0: f64,
    /// Drag coefficient of the surface at zero angle of attack.
    pub cd0: f64,
    /// Thickness-over-chord ratio.
    pub t_over_c: f64,
    /// Chordwise location of maximum thickness.
    pub c_max_t: f64,
    /// Cross-section profile used to locate the structural shear center.
    pub profile: AirfoilProfile,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            name: "wing".to_string(),
            symmetry: true,
            s_ref_type: SRefType::Projected,
            cl0: 0.0,
            cd0: 0.0,
            t_over_c: 0.15,
            c_max_t: 0.303,
            profile: AirfoilProfile::constant_thickness(0.15),
        }
    }
}

impl SurfaceConfig {
    /// Create a configuration with default values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the cross-section profile.
    pub fn with_profile(mut self, profile: AirfoilProfile) -> Self {
        self.profile = profile;
        self
    }
}

/// Freestream flight state for a trim case.
///
/// Defaults describe a transonic cruise condition and provide the initial
/// angle of attack for trim solves.
#[derive(Debug, Clone)]
pub struct FlightCondition {
    /// Freestream speed in m/s.
    pub speed: f64,
    /// Angle of attack in degrees.
    pub alpha: f64,
    /// Sideslip angle in degrees.
    pub beta: f64,
    /// Freestream Mach number.
    pub mach: f64,
    /// Reynolds number per unit length, 1/m.
    pub reynolds_per_length: f64,
    /// Air density in kg/m^3.
    pub density: f64,
    /// Moment reference point (center of gravity) in m.
    pub moment_ref: Point3<f64>,
    /// Total reference area in m^2.
    pub s_ref: f64,
}

impl Default for FlightCondition {
    fn default() -> Self {
        Self {
            speed: 248.136,
            alpha: 5.0,
            beta: 0.0,
            mach: 0.84,
            reynolds_per_length: 1.0e6,
            density: 0.38,
            moment_ref: Point3::new(33.68, 0.0, 4.52),
            s_ref: 383.7,
        }
    }
}

impl FlightCondition {
    /// Cruise defaults at sea-level density, for low-altitude cases.
    pub fn sea_level() -> Self {
        Self {
            density: SEA_LEVEL_DENSITY,
            mach: 0.2,
            speed: 68.0,
            ..Self::default()
        }
    }

    /// Freestream dynamic pressure in Pa.
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.density * self.speed * self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_defaults() {
        let surface = SurfaceConfig::new("tail");
        assert_eq!(surface.name, "tail");
        assert!(surface.symmetry);
        assert_eq!(surface.s_ref_type, SRefType::Projected);
        assert!((surface.profile.shear_center_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_dynamic_pressure() {
        let condition = FlightCondition {
            speed: 10.0,
            density: 2.0,
            ..FlightCondition::default()
        };
        assert!((condition.dynamic_pressure() - 100.0).abs() < 1e-12);
    }
}
