use serde::{Serialize, Deserialize};

use crate::error::NetError;
use crate::math::matrix::Matrix;

/// Real and imaginary part of one complex sample.
pub const INPUT_SIZE: usize = 2;
pub const HIDDEN1_SIZE: usize = 5;
pub const HIDDEN2_SIZE: usize = 12;
pub const OUTPUT_SIZE: usize = 2;

/// Seed the parameter set is initialized from unless configured otherwise.
pub const DEFAULT_INIT_SEED: u64 = 1;

/// Weights and biases of the three dense layers.
///
/// Shapes are fixed: `w1` 5×2, `b1` 5×1, `w2` 12×5, `b2` 12×1,
/// `w3` 2×12, `b3` 2×1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
    pub w3: Matrix,
    pub b3: Matrix,
}

impl ParameterSet {
    /// Xavier-uniform weights and zero biases. Every weight matrix draws from
    /// its own generator seeded with `seed`, so the result depends on the
    /// seed alone.
    pub fn initialize(seed: u64) -> ParameterSet {
        ParameterSet {
            w1: Matrix::xavier(HIDDEN1_SIZE, INPUT_SIZE, seed),
            b1: Matrix::zeros(HIDDEN1_SIZE, 1),
            w2: Matrix::xavier(HIDDEN2_SIZE, HIDDEN1_SIZE, seed),
            b2: Matrix::zeros(HIDDEN2_SIZE, 1),
            w3: Matrix::xavier(OUTPUT_SIZE, HIDDEN2_SIZE, seed),
            b3: Matrix::zeros(OUTPUT_SIZE, 1),
        }
    }

    /// The expected `(name, rows, cols)` of every array.
    pub fn shapes() -> [(&'static str, usize, usize); 6] {
        [
            ("W1", HIDDEN1_SIZE, INPUT_SIZE),
            ("b1", HIDDEN1_SIZE, 1),
            ("W2", HIDDEN2_SIZE, HIDDEN1_SIZE),
            ("b2", HIDDEN2_SIZE, 1),
            ("W3", OUTPUT_SIZE, HIDDEN2_SIZE),
            ("b3", OUTPUT_SIZE, 1),
        ]
    }

    /// The arrays in `shapes()` order, paired with their names.
    pub fn named(&self) -> [(&'static str, &Matrix); 6] {
        [
            ("W1", &self.w1),
            ("b1", &self.b1),
            ("W2", &self.w2),
            ("b2", &self.b2),
            ("W3", &self.w3),
            ("b3", &self.b3),
        ]
    }

    pub fn check_shapes(&self) -> Result<(), NetError> {
        for ((name, rows, cols), (_, matrix)) in Self::shapes().into_iter().zip(self.named()) {
            if matrix.shape() != (rows, cols) {
                return Err(NetError::ShapeMismatch {
                    what: name.to_string(),
                    expected: (rows, cols),
                    got: matrix.shape(),
                });
            }
        }
        Ok(())
    }
}
