//! Mesh validation.

use crate::error::{AerotrimError, Result};

use super::Mesh;

/// Validate a mesh for beam geometry extraction.
///
/// Checks:
/// - All coordinates are finite
/// - Spanwise stations are strictly monotonic along the span
///
/// Grid dimensions are already enforced by [`Mesh::from_points`].
pub fn validate_mesh(mesh: &Mesh) -> Result<()> {
    for i in 0..mesh.num_chordwise() {
        for j in 0..mesh.num_spanwise() {
            let p = mesh.point(i, j);
            if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                return Err(AerotrimError::NonFiniteMeshPoint {
                    chordwise: i,
                    spanwise: j,
                });
            }
        }
    }

    // Spanwise ordering is judged by the leading-edge span coordinate. The
    // direction (root-to-tip or tip-to-root) is set by the first pair and
    // must not reverse or stall.
    let first_step = mesh.leading_edge(1).y - mesh.leading_edge(0).y;
    if first_step == 0.0 {
        return Err(AerotrimError::NonMonotonicSpan { station: 0 });
    }
    for j in 1..mesh.num_spanwise() - 1 {
        let step = mesh.leading_edge(j + 1).y - mesh.leading_edge(j).y;
        if step == 0.0 || step.signum() != first_step.signum() {
            return Err(AerotrimError::NonMonotonicSpan { station: j });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn strip_mesh(ys: &[f64]) -> Mesh {
        let mut points = Vec::new();
        for x in [0.0, 1.0] {
            for &y in ys {
                points.push(Point3::new(x, y, 0.0));
            }
        }
        Mesh::from_points(2, ys.len(), points).unwrap()
    }

    #[test]
    fn test_accepts_monotonic_span() {
        assert!(validate_mesh(&strip_mesh(&[0.0, 1.0, 2.5, 4.0])).is_ok());
        // Tip-to-root ordering is also valid
        assert!(validate_mesh(&strip_mesh(&[4.0, 2.5, 1.0, 0.0])).is_ok());
    }

    #[test]
    fn test_rejects_reversed_span() {
        let result = validate_mesh(&strip_mesh(&[0.0, 2.0, 1.0]));
        assert!(matches!(
            result,
            Err(AerotrimError::NonMonotonicSpan { station: 1 })
        ));
    }

    #[test]
    fn test_rejects_repeated_station() {
        let result = validate_mesh(&strip_mesh(&[0.0, 0.0, 1.0]));
        assert!(matches!(
            result,
            Err(AerotrimError::NonMonotonicSpan { station: 0 })
        ));
    }

    #[test]
    fn test_rejects_non_finite_point() {
        let mut points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        points[2].z = f64::NAN;
        let mesh = Mesh::from_points(2, 2, points).unwrap();
        assert!(matches!(
            validate_mesh(&mesh),
            Err(AerotrimError::NonFiniteMeshPoint {
                chordwise: 1,
                spanwise: 0
            })
        ));
    }
}
