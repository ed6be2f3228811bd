//! Dense linear system assembly and solving.

use thiserror::Error;

use super::SINGULARITY_THRESHOLD;

/// Marker error for a numerically singular system.
///
/// Raised when a pivot falls below [`SINGULARITY_THRESHOLD`] during
/// factorization. Callers embedded in an iteration loop wrap this with
/// their own diagnostic context.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("matrix is numerically singular")]
pub struct Singular;

/// Dense square system `A x = b`, solved by LU decomposition.
#[derive(Debug)]
pub struct DenseSystem {
    /// System matrix A (row-major)
    a: Vec<f64>,
    /// Right-hand side b
    b: Vec<f64>,
    /// Solution vector x
    x: Vec<f64>,
    /// Matrix dimension
    size: usize,
    /// LU decomposition of A
    lu: Vec<f64>,
    /// Pivot indices for LU decomposition
    pivots: Vec<usize>,
}

impl DenseSystem {
    /// Create a new system of the given dimension, zero-initialized.
    pub fn new(size: usize) -> Self {
        Self {
            a: vec![0.0; size * size],
            b: vec![0.0; size],
            x: vec![0.0; size],
            size,
            lu: vec![0.0; size * size],
            pivots: vec![0; size],
        }
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.a[row * self.size + col]
    }

    /// Set matrix element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] = value;
    }

    /// Set right-hand side element.
    pub fn set_rhs(&mut self, row: usize, value: f64) {
        self.b[row] = value;
    }

    /// The solution vector from the last successful [`solve`](Self::solve).
    pub fn solution(&self) -> &[f64] {
        &self.x
    }

    /// Perform LU decomposition with partial pivoting.
    ///
    /// # Errors
    ///
    /// Returns [`Singular`] if no usable pivot is found in some column.
    pub fn factor(&mut self) -> Result<(), Singular> {
        let n = self.size;
        self.lu.copy_from_slice(&self.a);

        for i in 0..n {
            self.pivots[i] = i;
        }

        for k in 0..n {
            // Find pivot
            let mut max_val = self.lu[k * n + k].abs();
            let mut max_row = k;

            for i in (k + 1)..n {
                let val = self.lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < SINGULARITY_THRESHOLD {
                return Err(Singular);
            }

            // Swap rows if needed
            if max_row != k {
                self.pivots.swap(k, max_row);
                for j in 0..n {
                    self.lu.swap(k * n + j, max_row * n + j);
                }
            }

            // Eliminate
            let pivot = self.lu[k * n + k];
            for i in (k + 1)..n {
                let factor = self.lu[i * n + k] / pivot;
                self.lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    self.lu[i * n + j] -= factor * self.lu[k * n + j];
                }
            }
        }

        Ok(())
    }

    /// Solve the system using the pre-computed LU decomposition.
    ///
    /// # Errors
    ///
    /// Returns [`Singular`] if a diagonal entry of U is below the
    /// singularity threshold.
    pub fn solve(&mut self) -> Result<(), Singular> {
        let n = self.size;

        // Apply pivot permutation to b
        for i in 0..n {
            self.x[i] = self.b[self.pivots[i]];
        }

        // Forward substitution (L * y = Pb)
        for i in 0..n {
            for j in 0..i {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
            let diag = self.lu[i * n + i];
            if diag.abs() < SINGULARITY_THRESHOLD {
                return Err(Singular);
            }
            self.x[i] /= diag;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_2x2() {
        let mut system = DenseSystem::new(2);
        system.set(0, 0, 2.0);
        system.set(0, 1, 1.0);
        system.set(1, 0, 1.0);
        system.set(1, 1, 3.0);
        system.set_rhs(0, 5.0);
        system.set_rhs(1, 10.0);

        system.factor().unwrap();
        system.solve().unwrap();

        // x = [1, 3]
        assert!((system.solution()[0] - 1.0).abs() < 1e-12);
        assert!((system.solution()[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pivoting_handles_zero_diagonal() {
        // Leading diagonal entry is zero; partial pivoting must swap rows.
        let mut system = DenseSystem::new(3);
        let a = [[0.0, 2.0, 1.0], [1.0, 0.0, 1.0], [2.0, 1.0, 0.0]];
        let b = [7.0, 4.0, 5.0];
        for i in 0..3 {
            for j in 0..3 {
                system.set(i, j, a[i][j]);
            }
            system.set_rhs(i, b[i]);
        }

        system.factor().unwrap();
        system.solve().unwrap();

        // Verify A x = b
        for i in 0..3 {
            let mut acc = 0.0;
            for j in 0..3 {
                acc += a[i][j] * system.solution()[j];
            }
            assert!((acc - b[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_singular_matrix_detected() {
        let mut system = DenseSystem::new(2);
        system.set(0, 0, 1.0);
        system.set(0, 1, 2.0);
        system.set(1, 0, 2.0);
        system.set(1, 1, 4.0);
        system.set_rhs(0, 1.0);
        system.set_rhs(1, 2.0);

        assert_eq!(system.factor(), Err(Singular));
    }

    #[test]
    fn test_refactor_after_update() {
        let mut system = DenseSystem::new(1);
        system.set(0, 0, 2.0);
        system.set_rhs(0, 8.0);
        system.factor().unwrap();
        system.solve().unwrap();
        assert!((system.solution()[0] - 4.0).abs() < 1e-12);

        system.set(0, 0, 4.0);
        system.factor().unwrap();
        system.solve().unwrap();
        assert!((system.solution()[0] - 2.0).abs() < 1e-12);
    }
}
