//! Analysis function interface and reference implementations.
//!
//! The trim solver treats the aerodynamic/structural analysis as a black
//! box: a function from control variables to coefficients, plus the
//! Jacobian of those coefficients with respect to the controls. Anything
//! implementing [`AnalysisFunction`] can be trimmed, regardless of how its
//! sensitivities are produced.

use crate::error::{AerotrimError, Result};

/// Default perturbation step for finite-difference sensitivities.
pub const DEFAULT_FD_STEP: f64 = 1e-6;

/// A dense sensitivity matrix: rows are coefficients, columns are control
/// variables, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Jacobian {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Jacobian {
    /// Create a zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if the data length is not rows x cols.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(AerotrimError::dimension_mismatch(
                "Jacobian data",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Number of coefficient rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of control-variable columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Set entry at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }
}

/// External aerodynamic/structural analysis as seen by the trim solver.
///
/// Both methods are functions of the control-variable vector; any internal
/// model state mutation is the implementor's concern. Units and ordering of
/// controls and coefficients are fixed by the caller at solver construction
/// and must stay consistent across both calls. Implementations must
/// document their reentrancy if shared across concurrent solves.
pub trait AnalysisFunction {
    /// Evaluate the coefficient vector at the given control values.
    ///
    /// # Errors
    ///
    /// Implementation-defined; failures propagate out of the trim solve
    /// untouched.
    fn evaluate(&mut self, controls: &[f64]) -> Result<Vec<f64>>;

    /// Evaluate the Jacobian of the coefficients with respect to the
    /// control variables at the given control values.
    ///
    /// # Errors
    ///
    /// Implementation-defined; failures propagate out of the trim solve
    /// untouched.
    fn sensitivities(&mut self, controls: &[f64]) -> Result<Jacobian>;
}

/// Affine analysis surrogate: `c = A x + b` with exact Jacobian `A`.
///
/// Useful for linearized trim studies and as a deterministic stand-in for a
/// full analysis in tests and demos.
#[derive(Debug, Clone)]
pub struct LinearAnalysis {
    matrix: Jacobian,
    offset: Vec<f64>,
}

impl LinearAnalysis {
    /// Create a surrogate from its sensitivity matrix and zero-control
    /// coefficient offset.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if the offset length differs from the
    /// matrix row count.
    pub fn new(matrix: Jacobian, offset: Vec<f64>) -> Result<Self> {
        if offset.len() != matrix.rows() {
            return Err(AerotrimError::dimension_mismatch(
                "coefficient offset",
                matrix.rows(),
                offset.len(),
            ));
        }
        Ok(Self { matrix, offset })
    }
}

impl AnalysisFunction for LinearAnalysis {
    fn evaluate(&mut self, controls: &[f64]) -> Result<Vec<f64>> {
        if controls.len() != self.matrix.cols() {
            return Err(AerotrimError::dimension_mismatch(
                "control variables",
                self.matrix.cols(),
                controls.len(),
            ));
        }
        let coefficients = (0..self.matrix.rows())
            .map(|i| {
                let row: f64 = controls
                    .iter()
                    .enumerate()
                    .map(|(j, x)| self.matrix.get(i, j) * x)
                    .sum();
                row + self.offset[i]
            })
            .collect();
        Ok(coefficients)
    }

    fn sensitivities(&mut self, _controls: &[f64]) -> Result<Jacobian> {
        Ok(self.matrix.clone())
    }
}

/// Forward finite-difference adapter.
///
/// Wraps a coefficient evaluator and derives the Jacobian by perturbing one
/// control at a time: one nominal evaluation plus one perturbed evaluation
/// per control column.
pub struct FdAnalysis<F> {
    evaluator: F,
    step: f64,
}

impl<F> FdAnalysis<F>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>>,
{
    /// Wrap an evaluator with the default step.
    pub fn new(evaluator: F) -> Self {
        Self {
            evaluator,
            step: DEFAULT_FD_STEP,
        }
    }

    /// Set the forward-difference perturbation step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

impl<F> AnalysisFunction for FdAnalysis<F>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>>,
{
    fn evaluate(&mut self, controls: &[f64]) -> Result<Vec<f64>> {
        (self.evaluator)(controls)
    }

    fn sensitivities(&mut self, controls: &[f64]) -> Result<Jacobian> {
        let base = (self.evaluator)(controls)?;
        let mut jacobian = Jacobian::zeros(base.len(), controls.len());
        let mut perturbed = controls.to_vec();

        for col in 0..controls.len() {
            perturbed[col] += self.step;
            let shifted = (self.evaluator)(&perturbed)?;
            if shifted.len() != base.len() {
                return Err(AerotrimError::dimension_mismatch(
                    "coefficient vector",
                    base.len(),
                    shifted.len(),
                ));
            }
            for row in 0..base.len() {
                jacobian.set(row, col, (shifted[row] - base[row]) / self.step);
            }
            perturbed[col] = controls[col];
        }

        Ok(jacobian)
    }
}
