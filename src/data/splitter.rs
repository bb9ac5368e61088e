use num_complex::Complex32;

use crate::data::loader::SamplePair;
use crate::math::matrix::Matrix;

/// The four 2×N feature matrices fed to training and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSplits {
    pub x_train: Matrix,
    pub y_train: Matrix,
    pub x_test: Matrix,
    pub y_test: Matrix,
}

impl SamplePair {
    /// Cuts both arrays to the shorter of the two lengths.
    pub fn truncated(mut self) -> SamplePair {
        let len = self.x.len().min(self.y.len());
        self.x.truncate(len);
        self.y.truncate(len);
        self
    }
}

/// Splits complex samples into a 2×N matrix: row 0 holds the real parts,
/// row 1 the imaginary parts, columns in sample order.
pub fn split_complex(samples: &[Complex32]) -> Matrix {
    Matrix {
        rows: 2,
        cols: samples.len(),
        data: vec![
            samples.iter().map(|c| c.re as f64).collect(),
            samples.iter().map(|c| c.im as f64).collect(),
        ],
    }
}

/// Reassembles `real + j·imag` column by column from a 2×N matrix.
pub fn merge_complex(features: &Matrix) -> Vec<Complex32> {
    assert_eq!(features.rows, 2, "feature matrix must have a real and an imaginary row");
    features.data[0].iter()
        .zip(features.data[1].iter())
        .map(|(&re, &im)| Complex32::new(re as f32, im as f32))
        .collect()
}

/// Turns the train and test sample pairs into feature matrices. Each pair is
/// first truncated so its X and Y matrices have equal width.
pub fn complex_divide(train: SamplePair, test: SamplePair) -> FeatureSplits {
    let train = train.truncated();
    let test = test.truncated();

    FeatureSplits {
        x_train: split_complex(&train.x),
        y_train: split_complex(&train.y),
        x_test: split_complex(&test.x),
        y_test: split_complex(&test.y),
    }
}
