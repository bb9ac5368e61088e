use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};
use std::fmt;
use std::ops::{Add, Sub, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Xavier (Glorot) uniform initialization: samples from
    /// U(-limit, limit) with limit = sqrt(6 / (fan_in + fan_out)).
    ///
    /// Shape: (rows, cols). `cols` is the fan-in, `rows` the fan-out, so the
    /// matrix multiplies column vectors from the left.
    ///
    /// The generator is seeded from `seed` alone: two calls with the same
    /// seed and shape return identical matrices.
    pub fn xavier(rows: usize, cols: usize, seed: u64) -> Matrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let limit = (6.0 / (rows + cols) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-limit..limit);
            }
        }
        res
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Builds a matrix from row vectors. All rows must have equal length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have the same length"
        );
        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Adds a `rows × 1` column vector to every column (bias broadcast).
    pub fn add_column(&self, column: &Matrix) -> Matrix {
        if column.rows != self.rows || column.cols != 1 {
            panic!("Column vector is of incorrect size")
        }

        let mut res = self.clone();
        for (row, bias) in res.data.iter_mut().zip(column.data.iter()) {
            for x in row.iter_mut() {
                *x += bias[0];
            }
        }
        res
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.rows, other.rows);
        assert_eq!(self.cols, other.cols);
        let data = self.data.iter().zip(other.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();
        Matrix { rows: self.rows, cols: self.cols, data }
    }

    /// Sums every row, returning a `rows × 1` column vector.
    pub fn sum_columns(&self) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: 1,
            data: self.data.iter().map(|row| vec![row.iter().sum()]).collect(),
        }
    }

    /// Gathers the given columns, in order, into a new matrix.
    pub fn select_columns(&self, indices: &[usize]) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: indices.len(),
            data: self.data.iter()
                .map(|row| indices.iter().map(|&j| row[j]).collect())
                .collect(),
        }
    }

    /// Keeps the first `cols` columns.
    pub fn truncate_columns(&self, cols: usize) -> Matrix {
        let cols = cols.min(self.cols);
        Matrix {
            rows: self.rows,
            cols,
            data: self.data.iter().map(|row| row[..cols].to_vec()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter().flat_map(|row| row.iter())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

/// Prints rows in bracketed form. Wide matrices show only the first and last
/// three columns.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const EDGE: usize = 3;
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            let cells: Vec<String> = if row.len() > 2 * EDGE {
                row[..EDGE].iter()
                    .map(|x| format!("{x:.6}"))
                    .chain(std::iter::once("...".to_string()))
                    .chain(row[row.len() - EDGE..].iter().map(|x| format!("{x:.6}")))
                    .collect()
            } else {
                row.iter().map(|x| format!("{x:.6}")).collect()
            };
            write!(f, "[{}]", cells.join(" "))?;
        }
        write!(f, "]")
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res =  Matrix::zeros(self.rows, rhs.cols);

        // i-k-j order walks both operands row-wise.
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i][k];
                if a == 0.0 {
                    continue;
                }
                let rhs_row = &rhs.data[k];
                let out_row = &mut res.data[i];
                for j in 0..rhs.cols {
                    out_row[j] += a * rhs_row[j];
                }
            }
        }

        res
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_matches_hand_computation() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![5.0], vec![6.0]]);
        let c = &a * &b;
        assert_eq!(c.data, vec![vec![17.0], vec![39.0]]);
    }

    #[test]
    fn xavier_is_seeded_and_bounded() {
        let a = Matrix::xavier(12, 5, 1);
        let b = Matrix::xavier(12, 5, 1);
        assert_eq!(a, b);

        let limit = (6.0f64 / 17.0).sqrt();
        assert!(a.iter().all(|x| x.abs() < limit));
        assert_ne!(a, Matrix::xavier(12, 5, 2));
    }

    #[test]
    fn column_broadcast_and_row_sums() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let bias = Matrix::from_data(vec![vec![10.0], vec![-1.0]]);
        let shifted = m.add_column(&bias);
        assert_eq!(shifted.data, vec![vec![11.0, 12.0, 13.0], vec![3.0, 4.0, 5.0]]);
        assert_eq!(m.sum_columns().data, vec![vec![6.0], vec![15.0]]);
    }

    #[test]
    fn select_and_truncate_columns() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.select_columns(&[2, 0]).data, vec![vec![3.0, 1.0], vec![6.0, 4.0]]);
        assert_eq!(m.truncate_columns(2).shape(), (2, 2));
        assert_eq!(m.truncate_columns(10).shape(), (2, 3));
    }

    #[test]
    fn display_abbreviates_wide_rows() {
        let m = Matrix::from_data(vec![(0..10).map(|x| x as f64).collect()]);
        let text = m.to_string();
        assert!(text.contains("..."));
        assert!(text.starts_with("[[0.000000 1.000000 2.000000 ..."));
    }
}
