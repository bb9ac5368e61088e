use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.len() as f64;
        Self::error_metric(predicted, expected).iter()
            .map(|e| e * e)
            .sum::<f64>() / n
    }

    /// Per-element gradient: 2·(predicted - expected) / n
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        let scale = 2.0 / predicted.len() as f64;
        Self::error_metric(predicted, expected).map(|e| e * scale)
    }

    /// Element-wise residual `predicted - expected`.
    pub fn error_metric(predicted: &Matrix, expected: &Matrix) -> Matrix {
        predicted.clone() - expected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_target() {
        let y = Matrix::from_data(vec![vec![1.0, -2.0], vec![0.5, 3.0]]);
        assert_eq!(MseLoss::loss(&y, &y), 0.0);
        assert_eq!(MseLoss::loss(&y.map(|v| v + 1.0), &y), 1.0);
    }
}
