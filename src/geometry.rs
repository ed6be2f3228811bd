//! Structural beam geometry extraction.
//!
//! Derives per-spanwise-element beam quantities from a lifting-surface mesh
//! and an airfoil cross-section:
//!
//! 1. The streamwise chord of each element, midpoint-averaged from the two
//!    bounding spanwise stations.
//! 2. The FEM chord: the streamwise chord projected onto the plane normal to
//!    the local elastic-axis direction, accounting for sweep and taper of
//!    the structural axis.
//! 3. The FEM twist: the average local surface twist at the two bounding
//!    stations, scaled into the structural reference frame by the chord
//!    ratio.
//!
//! The elastic axis runs through the shear center of each cross-section,
//! located chordwise by thickness-weighted interpolation of the airfoil
//! profile endpoints.

use nalgebra::{Point3, Vector3};

use crate::airfoil::AirfoilProfile;
use crate::error::{AerotrimError, Result};
use crate::mesh::{validate_mesh, Mesh};

/// Minimum FEM chord accepted during twist normalization. Elements whose
/// projected chord falls below this are reported as degenerate rather than
/// dividing toward infinity.
pub const MIN_FEM_CHORD: f64 = 1e-12;

/// Minimum vector norm accepted when normalizing a projection direction.
const MIN_PROJECTION: f64 = 1e-12;

/// Structural beam quantities for one spanwise element.
///
/// Element `i` spans mesh stations `i` and `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    /// Chord length parallel to the flow direction, averaged at the element
    /// midpoint.
    pub streamwise_chord: f64,
    /// Chord length measured normal to the elastic axis. Never exceeds the
    /// streamwise chord; equal to it at zero sweep.
    pub fem_chord: f64,
    /// Local surface twist in radians, in the structural reference frame.
    /// Always finite.
    pub fem_twist: f64,
}

/// Extract beam geometry for every spanwise element of a mesh.
///
/// Pure function over its inputs: the mesh and profile are not mutated, and
/// a new collection is returned per call.
///
/// # Errors
///
/// Fails fast on malformed meshes ([`AerotrimError::NonFiniteMeshPoint`],
/// [`AerotrimError::NonMonotonicSpan`]) and on degenerate element geometry
/// ([`AerotrimError::DegenerateElement`]). Never emits NaN or infinity: the
/// one deliberate numeric recovery is the inverse-cosine clamp, which maps
/// dot-product ratios just above 1 (floating-point rounding) to a zero
/// angle.
pub fn extract_beam_geometry(
    mesh: &Mesh,
    profile: &AirfoilProfile,
) -> Result<Vec<ElementGeometry>> {
    validate_mesh(mesh)?;

    let ny = mesh.num_spanwise();
    let chord_vectors: Vec<Vector3<f64>> = (0..ny).map(|j| mesh.chord_vector(j)).collect();
    let station_chords: Vec<f64> = chord_vectors.iter().map(|v| v.norm()).collect();

    // Shear-center fraction is constant across the span (uniform airfoil).
    let w = profile.shear_center_fraction();
    let nodes: Vec<Point3<f64>> = (0..ny)
        .map(|j| {
            let le = mesh.leading_edge(j);
            let te = mesh.trailing_edge(j);
            Point3::from(le.coords.lerp(&te.coords, w))
        })
        .collect();

    let mut elements = Vec::with_capacity(ny - 1);
    for elem in 0..ny - 1 {
        let streamwise_chord = 0.5 * (station_chords[elem] + station_chords[elem + 1]);

        // Sweep/taper correction: cosine of the angle between the elastic
        // axis element and its projection out of the chordwise direction.
        let elem_vec = nodes[elem + 1] - nodes[elem];
        let mut in_plane = elem_vec;
        in_plane.x = 0.0;
        let cos_sweep = projection_cosine(&elem_vec, &in_plane);

        let fem_chord = streamwise_chord * cos_sweep;
        if fem_chord < MIN_FEM_CHORD {
            return Err(AerotrimError::degenerate_element(elem, fem_chord));
        }

        // Local twist at each bounding station, from the station chord
        // vector and its projection out of the vertical.
        let theta_0 = station_twist(&chord_vectors[elem])
            .ok_or_else(|| AerotrimError::degenerate_element(elem, station_chords[elem]))?;
        let theta_1 = station_twist(&chord_vectors[elem + 1])
            .ok_or_else(|| AerotrimError::degenerate_element(elem, station_chords[elem + 1]))?;

        let fem_twist = 0.5 * (theta_0 + theta_1) * streamwise_chord / fem_chord;

        elements.push(ElementGeometry {
            streamwise_chord,
            fem_chord,
            fem_twist,
        });
    }

    Ok(elements)
}

/// Cosine of the angle between a vector and its projection, clamped into
/// [0, 1]. Returns 0 when either vector is too short to normalize, which
/// drives the caller's degenerate-chord check.
fn projection_cosine(full: &Vector3<f64>, projected: &Vector3<f64>) -> f64 {
    let denom = full.norm() * projected.norm();
    if denom < MIN_PROJECTION {
        return 0.0;
    }
    (full.dot(projected) / denom).min(1.0)
}

/// Local twist angle of a station chord vector: the angle between the
/// vector and its projection out of the vertical (z) direction.
///
/// Returns `None` when the chord vector or its projection is too short to
/// normalize (coincident leading and trailing edge, or a purely vertical
/// chord).
fn station_twist(chord: &Vector3<f64>) -> Option<f64> {
    let mut horizontal = *chord;
    horizontal.z = 0.0;
    let denom = chord.norm() * horizontal.norm();
    if denom < MIN_PROJECTION {
        return None;
    }
    Some(angle_from_ratio(chord.dot(&horizontal) / denom))
}

/// Inverse cosine with the domain clamp: ratios above 1 from floating-point
/// rounding map to a zero angle instead of a NaN.
fn angle_from_ratio(ratio: f64) -> f64 {
    if ratio > 1.0 {
        0.0
    } else {
        ratio.acos()
    }
}
