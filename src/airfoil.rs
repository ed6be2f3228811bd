//! Airfoil cross-section profiles.
//!
//! A profile describes the upper and lower surface of a representative
//! cross-section in normalized chord coordinates. The beam geometry
//! extractor uses it for one thing only: locating the structural shear
//! center as a chordwise fraction, by weighting the endpoint stations with
//! their local thickness.

use crate::error::{AerotrimError, Result};

/// A single profile surface point in normalized chord coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Chordwise fraction (0 at the leading edge, 1 at the trailing edge).
    pub x: f64,
    /// Thickness fraction above or below the chord line.
    pub y: f64,
}

impl ProfilePoint {
    /// Create a profile point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An airfoil cross-section described by paired upper and lower surfaces.
///
/// The two point sequences are paired index-for-index: `upper[i]` and
/// `lower[i]` share a chordwise station, and the first and last indices are
/// the stations used for shear-center interpolation. The cross-section is
/// assumed uniform across the span.
#[derive(Debug, Clone)]
pub struct AirfoilProfile {
    upper: Vec<ProfilePoint>,
    lower: Vec<ProfilePoint>,
}

impl AirfoilProfile {
    /// Create a profile from paired upper and lower surface points.
    ///
    /// # Errors
    ///
    /// Returns an error if either sequence is empty, the sequences have
    /// different lengths, or the endpoint stations carry no net thickness
    /// (leaving the shear center undefined).
    pub fn new(upper: Vec<ProfilePoint>, lower: Vec<ProfilePoint>) -> Result<Self> {
        if upper.is_empty() || lower.is_empty() {
            return Err(AerotrimError::EmptyProfile);
        }
        if upper.len() != lower.len() {
            return Err(AerotrimError::MismatchedProfile {
                upper: upper.len(),
                lower: lower.len(),
            });
        }

        let profile = Self { upper, lower };
        let (front, rear) = profile.endpoint_thicknesses();
        let total = front + rear;
        if !(total.is_finite() && total > 0.0) {
            return Err(AerotrimError::ZeroThicknessProfile);
        }
        Ok(profile)
    }

    /// Create a profile from separate coordinate arrays, as commonly read
    /// from airfoil data tables.
    pub fn from_arrays(
        x_upper: &[f64],
        y_upper: &[f64],
        x_lower: &[f64],
        y_lower: &[f64],
    ) -> Result<Self> {
        if x_upper.len() != y_upper.len() {
            return Err(AerotrimError::dimension_mismatch(
                "upper surface coordinates",
                x_upper.len(),
                y_upper.len(),
            ));
        }
        if x_lower.len() != y_lower.len() {
            return Err(AerotrimError::dimension_mismatch(
                "lower surface coordinates",
                x_lower.len(),
                y_lower.len(),
            ));
        }
        let upper = x_upper
            .iter()
            .zip(y_upper)
            .map(|(&x, &y)| ProfilePoint::new(x, y))
            .collect();
        let lower = x_lower
            .iter()
            .zip(y_lower)
            .map(|(&x, &y)| ProfilePoint::new(x, y))
            .collect();
        Self::new(upper, lower)
    }

    /// A rectangular cross-section of uniform thickness, spanning the full
    /// chord. Useful as a default when no airfoil data is available; its
    /// shear center sits at mid-chord.
    pub fn constant_thickness(thickness: f64) -> Self {
        let half = 0.5 * thickness.max(1e-12); // Minimum thickness keeps the shear center defined
        Self {
            upper: vec![ProfilePoint::new(0.0, half), ProfilePoint::new(1.0, half)],
            lower: vec![ProfilePoint::new(0.0, -half), ProfilePoint::new(1.0, -half)],
        }
    }

    /// Upper surface points.
    pub fn upper(&self) -> &[ProfilePoint] {
        &self.upper
    }

    /// Lower surface points.
    pub fn lower(&self) -> &[ProfilePoint] {
        &self.lower
    }

    /// The shear-center chordwise fraction.
    ///
    /// Weighted average of the chordwise positions of the first and last
    /// profile stations, weighted by the local thickness at each. This
    /// assumes the same spar thickness at the front and rear station.
    pub fn shear_center_fraction(&self) -> f64 {
        let (front, rear) = self.endpoint_thicknesses();
        let front_x = self.upper[0].x;
        let rear_x = self.upper[self.upper.len() - 1].x;
        (front_x * front + rear_x * rear) / (front + rear)
    }

    fn endpoint_thicknesses(&self) -> (f64, f64) {
        let last = self.upper.len() - 1;
        let front = self.upper[0].y - self.lower[0].y;
        let rear = self.upper[last].y - self.lower[last].y;
        (front, rear)
    }
}
