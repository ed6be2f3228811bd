//! Newton-Raphson iteration for trim solving.

use crate::error::{AerotrimError, Result};

use super::analysis::AnalysisFunction;
use super::linear::DenseSystem;
use super::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Newton trim solver.
///
/// Drives a control-variable vector until the analysis coefficients match
/// their targets within tolerance. The component order of controls,
/// targets, and coefficients is fixed by the caller and never reordered
/// here; reordering between calls would silently corrupt convergence.
#[derive(Debug, Clone)]
pub struct TrimSolver {
    /// Maximum Newton iterations
    pub max_iterations: usize,
    /// Convergence tolerance on the Euclidean error norm
    pub tolerance: f64,
}

impl Default for TrimSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a converged trim solve.
#[derive(Debug, Clone)]
pub struct TrimSolution {
    /// Converged control-variable values
    pub controls: Vec<f64>,
    /// Coefficients observed at the converged controls
    pub coefficients: Vec<f64>,
    /// Number of Newton updates performed
    pub iterations: usize,
    /// Euclidean error norm at each iteration, including the converged one
    pub residual_history: Vec<f64>,
}

impl TrimSolver {
    /// Create a solver with default settings.
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set the maximum number of Newton iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance on the error norm.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Solve for trim: find controls such that the analysis coefficients
    /// match `targets` within tolerance, starting from `initial`.
    ///
    /// Each iteration performs exactly one coefficient evaluation and,
    /// unless converged, exactly one Jacobian evaluation followed by a
    /// dense linear solve and a control update. The analysis is never
    /// retried on failure; its errors propagate untouched.
    ///
    /// # Errors
    ///
    /// - [`AerotrimError::DimensionMismatch`] if `initial` and `targets`
    ///   disagree in length, the target vector is empty, or the analysis
    ///   returns mis-shaped coefficients or Jacobians.
    /// - [`AerotrimError::SingularJacobian`] if the linear solve cannot
    ///   proceed at some iteration.
    /// - [`AerotrimError::TrimNotConverged`] if the iteration budget is
    ///   exhausted; carries the last iterate and the error norm observed at
    ///   the start of the final iteration.
    pub fn solve<A>(
        &self,
        analysis: &mut A,
        initial: &[f64],
        targets: &[f64],
    ) -> Result<TrimSolution>
    where
        A: AnalysisFunction + ?Sized,
    {
        let n = targets.len();
        if n == 0 {
            return Err(AerotrimError::dimension_mismatch("trim targets", 1, 0));
        }
        if initial.len() != n {
            return Err(AerotrimError::dimension_mismatch(
                "control variables",
                n,
                initial.len(),
            ));
        }

        let mut controls = initial.to_vec();
        let mut residual_history = Vec::new();
        let mut system = DenseSystem::new(n);
        let mut residual = f64::INFINITY;

        for iteration in 0..self.max_iterations {
            let coefficients = analysis.evaluate(&controls)?;
            if coefficients.len() != n {
                return Err(AerotrimError::dimension_mismatch(
                    "coefficient vector",
                    n,
                    coefficients.len(),
                ));
            }

            let error: Vec<f64> = targets
                .iter()
                .zip(&coefficients)
                .map(|(target, observed)| target - observed)
                .collect();
            residual = error.iter().map(|e| e * e).sum::<f64>().sqrt();
            residual_history.push(residual);

            if residual <= self.tolerance {
                return Ok(TrimSolution {
                    controls,
                    coefficients,
                    iterations: iteration,
                    residual_history,
                });
            }

            let jacobian = analysis.sensitivities(&controls)?;
            if jacobian.rows() != n {
                return Err(AerotrimError::dimension_mismatch(
                    "Jacobian rows",
                    n,
                    jacobian.rows(),
                ));
            }
            if jacobian.cols() != n {
                return Err(AerotrimError::dimension_mismatch(
                    "Jacobian columns",
                    n,
                    jacobian.cols(),
                ));
            }

            for i in 0..n {
                for j in 0..n {
                    system.set(i, j, jacobian.get(i, j));
                }
                system.set_rhs(i, error[i]);
            }

            system
                .factor()
                .and_then(|()| system.solve())
                .map_err(|_| AerotrimError::SingularJacobian { iteration })?;

            for (control, delta) in controls.iter_mut().zip(system.solution()) {
                *control += delta;
            }
        }

        Err(AerotrimError::TrimNotConverged {
            iterations: self.max_iterations,
            residual,
            controls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trim::analysis::{Jacobian, LinearAnalysis};
    use approx::assert_relative_eq;

    /// The longitudinal trim surrogate: CL and CM as affine functions of
    /// angle of attack and tail twist.
    fn longitudinal_surrogate() -> LinearAnalysis {
        let matrix =
            Jacobian::from_row_major(2, 2, vec![0.08, 0.02, -0.01, 0.03]).unwrap();
        LinearAnalysis::new(matrix, vec![0.0, 0.0]).unwrap()
    }

    #[test]
    fn test_linear_trim_converges_in_one_iteration() {
        let mut analysis = longitudinal_surrogate();
        let solver = TrimSolver::new().with_tolerance(1e-3);

        let solution = solver
            .solve(&mut analysis, &[5.0, 0.0], &[0.5, 0.0])
            .unwrap();

        // Newton is exact for an affine model: one update lands on the
        // solution of 0.08 a + 0.02 t = 0.5, -0.01 a + 0.03 t = 0,
        // which is a = 75/13, t = 25/13.
        assert_eq!(solution.iterations, 1);
        assert_relative_eq!(solution.controls[0], 75.0 / 13.0, epsilon = 1e-9);
        assert_relative_eq!(solution.controls[1], 25.0 / 13.0, epsilon = 1e-9);
        assert_relative_eq!(solution.coefficients[0], 0.5, epsilon = 1e-9);
        assert!(solution.coefficients[1].abs() < 1e-9);
        assert_eq!(solution.residual_history.len(), 2);
        assert!(*solution.residual_history.last().unwrap() <= 1e-3);
    }

    #[test]
    fn test_linear_trim_is_exact_for_any_reachable_target() {
        let matrix = Jacobian::from_row_major(2, 2, vec![1.2, -0.3, 0.5, 2.0]).unwrap();
        let mut analysis = LinearAnalysis::new(matrix, vec![0.7, -1.1]).unwrap();
        let solver = TrimSolver::new().with_tolerance(1e-10);

        let solution = solver
            .solve(&mut analysis, &[3.0, -4.0], &[2.5, 0.25])
            .unwrap();
        assert_eq!(solution.iterations, 1);
        assert_relative_eq!(solution.coefficients[0], 2.5, epsilon = 1e-10);
        assert_relative_eq!(solution.coefficients[1], 0.25, epsilon = 1e-10);
    }

    #[test]
    fn test_already_trimmed_initial_guess() {
        let mut analysis = longitudinal_surrogate();
        let solver = TrimSolver::new().with_tolerance(1e-6);

        // Evaluate the surrogate at the known solution.
        let solution = solver
            .solve(&mut analysis, &[75.0 / 13.0, 25.0 / 13.0], &[0.5, 0.0])
            .unwrap();
        assert_eq!(solution.iterations, 0);
        assert_eq!(solution.residual_history.len(), 1);
    }

    /// Quadratic two-variable analysis with an analytic Jacobian that is
    /// well conditioned near the solution.
    struct QuadraticAnalysis;

    impl AnalysisFunction for QuadraticAnalysis {
        fn evaluate(&mut self, x: &[f64]) -> crate::error::Result<Vec<f64>> {
            Ok(vec![
                0.1 * x[0] + 0.01 * x[0] * x[0] + 0.02 * x[1],
                -0.01 * x[0] + 0.03 * x[1] + 0.005 * x[1] * x[1],
            ])
        }

        fn sensitivities(&mut self, x: &[f64]) -> crate::error::Result<Jacobian> {
            Jacobian::from_row_major(
                2,
                2,
                vec![0.1 + 0.02 * x[0], 0.02, -0.01, 0.03 + 0.01 * x[1]],
            )
        }
    }

    #[test]
    fn test_nonlinear_trim_converges_within_budget() {
        let solver = TrimSolver::new()
            .with_tolerance(1e-10)
            .with_max_iterations(20);
        let solution = solver
            .solve(&mut QuadraticAnalysis, &[0.0, 0.0], &[0.5, 0.0])
            .unwrap();

        assert!(solution.iterations <= 20);
        // Local quadratic behavior: the residual shrinks monotonically
        // once the iterate is near the solution.
        let history = &solution.residual_history;
        for pair in history[1..].windows(2) {
            assert!(pair[1] < pair[0]);
        }
        // The converged controls reproduce the targets.
        let coefficients = QuadraticAnalysis.evaluate(&solution.controls).unwrap();
        assert_relative_eq!(coefficients[0], 0.5, epsilon = 1e-9);
        assert!(coefficients[1].abs() < 1e-9);
    }

    #[test]
    fn test_singular_jacobian_reported_not_looped() {
        let matrix = Jacobian::from_row_major(2, 2, vec![1.0, 1.0, 2.0, 2.0]).unwrap();
        let mut analysis = LinearAnalysis::new(matrix, vec![0.0, 0.0]).unwrap();
        let solver = TrimSolver::new();

        let result = solver.solve(&mut analysis, &[0.0, 0.0], &[1.0, 0.0]);
        assert!(matches!(
            result,
            Err(AerotrimError::SingularJacobian { iteration: 0 })
        ));
    }

    /// Constant coefficients with a claimed unit sensitivity: the error
    /// never shrinks, so the iteration budget must trip.
    struct StubbornAnalysis;

    impl AnalysisFunction for StubbornAnalysis {
        fn evaluate(&mut self, _x: &[f64]) -> crate::error::Result<Vec<f64>> {
            Ok(vec![0.0])
        }

        fn sensitivities(&mut self, _x: &[f64]) -> crate::error::Result<Jacobian> {
            Jacobian::from_row_major(1, 1, vec![1.0])
        }
    }

    #[test]
    fn test_iteration_budget_reports_last_iterate() {
        let solver = TrimSolver::new().with_max_iterations(5).with_tolerance(1e-12);

        let result = solver.solve(&mut StubbornAnalysis, &[0.0], &[1.0]);
        match result {
            Err(AerotrimError::TrimNotConverged {
                iterations,
                residual,
                controls,
            }) => {
                assert_eq!(iterations, 5);
                assert!((residual - 1.0).abs() < 1e-12);
                // Each Newton update stepped the control by the full error.
                assert!((controls[0] - 5.0).abs() < 1e-12);
            }
            other => panic!("expected TrimNotConverged, got {other:?}"),
        }
    }

    #[test]
    fn test_dimension_mismatches_rejected() {
        let mut analysis = longitudinal_surrogate();
        let solver = TrimSolver::new();
        assert!(matches!(
            solver.solve(&mut analysis, &[1.0], &[0.5, 0.0]),
            Err(AerotrimError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            solver.solve(&mut analysis, &[], &[]),
            Err(AerotrimError::DimensionMismatch { .. })
        ));
    }
}
