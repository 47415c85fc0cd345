//! Dense matrices over a field, stored in row-major order.
//!
//! Sized for the systems that arise here: a Padé denominator of degree n
//! needs an n x n solve, so everything is straightforward Gauss-Jordan
//! with exact arithmetic and no pivot-magnitude heuristics (any non-zero
//! pivot is exact).

use std::ops::{Index, IndexMut};

use polyapprox_rings::Field;

/// A dense matrix over a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<F> {
    /// Matrix entries in row-major order.
    data: Vec<F>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<F: Field> DenseMatrix<F> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![F::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have unequal lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<F>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<F> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "rows have unequal lengths");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        for col in 0..self.num_cols {
            self.data
                .swap(r1 * self.num_cols + col, r2 * self.num_cols + col);
        }
    }

    fn scale_row(&mut self, row: usize, factor: &F) {
        for col in 0..self.num_cols {
            let idx = row * self.num_cols + col;
            self.data[idx] = self.data[idx].clone() * factor.clone();
        }
    }

    /// Adds `factor` times row `src` to row `dst`.
    fn add_scaled_row(&mut self, dst: usize, src: usize, factor: &F) {
        for col in 0..self.num_cols {
            let term = self.data[src * self.num_cols + col].clone() * factor.clone();
            let idx = dst * self.num_cols + col;
            self.data[idx] = self.data[idx].clone() + term;
        }
    }

    /// Reduced row echelon form by Gauss-Jordan elimination.
    ///
    /// Returns the reduced matrix and its rank.
    #[must_use]
    pub fn rref(&self) -> (Self, usize) {
        let mut m = self.clone();
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < m.num_rows && pivot_col < m.num_cols {
            // First non-zero entry in the column at or below pivot_row
            let Some(src_row) = (pivot_row..m.num_rows).find(|&r| !m[(r, pivot_col)].is_zero())
            else {
                pivot_col += 1;
                continue;
            };

            m.swap_rows(pivot_row, src_row);

            let pivot_inv = m[(pivot_row, pivot_col)]
                .inv()
                .expect("pivot is non-zero");
            m.scale_row(pivot_row, &pivot_inv);

            // Eliminate the column everywhere else
            for row in 0..m.num_rows {
                if row != pivot_row && !m[(row, pivot_col)].is_zero() {
                    let factor = -m[(row, pivot_col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivot_row += 1;
            pivot_col += 1;
        }

        let rank = pivot_row;
        (m, rank)
    }

    /// Solves the linear system Ax = b.
    ///
    /// Returns `None` if the system is inconsistent. If the system is
    /// underdetermined, free variables are set to zero.
    ///
    /// # Panics
    ///
    /// Panics if `b.len()` differs from the number of rows.
    #[must_use]
    pub fn solve(&self, b: &[F]) -> Option<Vec<F>> {
        assert_eq!(b.len(), self.num_rows);

        // Augmented matrix [A | b]
        let mut aug = Self::zeros(self.num_rows, self.num_cols + 1);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                aug[(i, j)] = self[(i, j)].clone();
            }
            aug[(i, self.num_cols)] = b[i].clone();
        }

        let (rref, _) = aug.rref();

        // A row of the form [0 ... 0 | c] with c != 0 means no solution.
        // The pivot of such a row sits in the augmented column, so every
        // row must be checked, not just those past the rank.
        for row in 0..self.num_rows {
            let coeffs_zero = (0..self.num_cols).all(|col| rref[(row, col)].is_zero());
            if coeffs_zero && !rref[(row, self.num_cols)].is_zero() {
                return None;
            }
        }

        let mut x = vec![F::zero(); self.num_cols];
        for row in 0..self.num_rows {
            if let Some(col) = (0..self.num_cols).find(|&col| !rref[(row, col)].is_zero()) {
                x[col] = rref[(row, self.num_cols)].clone();
            }
        }

        Some(x)
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (row, col): (usize, usize)) -> &F {
        &self.data[row * self.num_cols + col]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut F {
        &mut self.data[row * self.num_cols + col]
    }
}
