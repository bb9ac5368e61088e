use crate::math::matrix::Matrix;

/// Squared error of the *sum* of prediction and target:
/// `mean((predicted + expected)²)`.
///
/// This is the cost the equalizer has always been trained with. It reaches
/// zero when the network predicts the negated target.
pub struct AdditiveLoss;

impl AdditiveLoss {
    /// Scalar cost, averaged over every element.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.len() as f64;
        Self::error_metric(predicted, expected).iter()
            .map(|e| e * e)
            .sum::<f64>() / n
    }

    /// Per-element gradient: 2·(predicted + expected) / n
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        let scale = 2.0 / predicted.len() as f64;
        Self::error_metric(predicted, expected).map(|e| e * scale)
    }

    /// Element-wise `predicted + expected`, reported as train/test accuracy.
    pub fn error_metric(predicted: &Matrix, expected: &Matrix) -> Matrix {
        predicted.clone() + expected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_negated_target() {
        let y = Matrix::from_data(vec![vec![1.0, -2.0], vec![0.5, 3.0]]);
        let p = y.map(|v| -v);
        assert_eq!(AdditiveLoss::loss(&p, &y), 0.0);
        assert!(AdditiveLoss::derivative(&p, &y).iter().all(|&g| g == 0.0));
    }

    #[test]
    fn averages_over_all_elements() {
        let p = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 0.0]]);
        let y = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 2.0]]);
        // (2² + 2²) / 4
        assert_eq!(AdditiveLoss::loss(&p, &y), 2.0);
        assert_eq!(AdditiveLoss::derivative(&p, &y).data, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }
}
