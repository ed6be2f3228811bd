//! Mesh grid structure.

use nalgebra::{Point3, Vector3};

use crate::error::{AerotrimError, Result};

/// An ordered 2-D grid of 3-D points describing a lifting surface.
///
/// Points are indexed by (chordwise station, spanwise station). The first
/// chordwise row is the leading edge and the last is the trailing edge;
/// spanwise stations are ordered monotonically along the span. The mesh is
/// read-only once constructed.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Grid points, chordwise-major: index = chordwise * ny + spanwise
    points: Vec<Point3<f64>>,
    /// Number of chordwise stations (nx)
    nx: usize,
    /// Number of spanwise stations (ny)
    ny: usize,
}

impl Mesh {
    /// Create a mesh from a flat, chordwise-major point list.
    ///
    /// `points[i * ny + j]` is the point at chordwise station `i` and
    /// spanwise station `j`.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is below 2 or the point count
    /// does not match the declared grid size.
    pub fn from_points(nx: usize, ny: usize, points: Vec<Point3<f64>>) -> Result<Self> {
        if nx < 2 || ny < 2 {
            return Err(AerotrimError::MeshTooSmall { nx, ny });
        }
        if points.len() != nx * ny {
            return Err(AerotrimError::MeshPointCountMismatch {
                nx,
                ny,
                points: points.len(),
            });
        }
        Ok(Self { points, nx, ny })
    }

    /// Number of chordwise stations.
    pub fn num_chordwise(&self) -> usize {
        self.nx
    }

    /// Number of spanwise stations.
    pub fn num_spanwise(&self) -> usize {
        self.ny
    }

    /// Number of spanwise elements (one less than the station count).
    pub fn num_elements(&self) -> usize {
        self.ny - 1
    }

    /// The point at the given chordwise and spanwise station.
    pub fn point(&self, chordwise: usize, spanwise: usize) -> Point3<f64> {
        self.points[chordwise * self.ny + spanwise]
    }

    /// The leading-edge point at a spanwise station.
    pub fn leading_edge(&self, spanwise: usize) -> Point3<f64> {
        self.point(0, spanwise)
    }

    /// The trailing-edge point at a spanwise station.
    pub fn trailing_edge(&self, spanwise: usize) -> Point3<f64> {
        self.point(self.nx - 1, spanwise)
    }

    /// The chord vector at a spanwise station (trailing minus leading edge).
    pub fn chord_vector(&self, spanwise: usize) -> Vector3<f64> {
        self.trailing_edge(spanwise) - self.leading_edge(spanwise)
    }

    /// All grid points in chordwise-major order.
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }
}
