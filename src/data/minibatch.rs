use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::math::matrix::Matrix;

/// One column slice of a shuffled (X, Y) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MiniBatch {
    pub x: Matrix,
    pub y: Matrix,
}

impl MiniBatch {
    pub fn width(&self) -> usize {
        self.x.cols
    }
}

/// Number of mini-batches an epoch processes.
///
/// Only whole batches count: the remainder of `total_columns /
/// minibatch_size` is dropped. A batch wider than the data set collapses to
/// a single batch holding every column.
pub fn batch_count(total_columns: usize, minibatch_size: usize) -> usize {
    assert!(minibatch_size > 0, "minibatch_size must be at least 1");
    if total_columns == 0 {
        0
    } else {
        (total_columns / minibatch_size).max(1)
    }
}

/// Shuffles the columns of `x` and `y` with a generator seeded by `seed`
/// and cuts them into `batch_count` consecutive batches.
///
/// # Panics
/// Panics if `x` and `y` differ in width or `minibatch_size == 0`.
pub fn random_mini_batches(x: &Matrix, y: &Matrix, minibatch_size: usize, seed: u64) -> Vec<MiniBatch> {
    assert_eq!(x.cols, y.cols, "x and y must have the same number of columns");
    let m = x.cols;

    let mut permutation: Vec<usize> = (0..m).collect();
    permutation.shuffle(&mut StdRng::seed_from_u64(seed));

    (0..batch_count(m, minibatch_size))
        .map(|k| {
            let start = k * minibatch_size;
            let end = (start + minibatch_size).min(m);
            let columns = &permutation[start..end];
            MiniBatch {
                x: x.select_columns(columns),
                y: y.select_columns(columns),
            }
        })
        .collect()
}
