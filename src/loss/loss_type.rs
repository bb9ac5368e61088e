use serde::{Serialize, Deserialize};

use crate::loss::additive::AdditiveLoss;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;

/// Selects which cost the training loop minimizes and which error metric it
/// reports.
///
/// - `Additive` - `mean((predicted + expected)²)`, metric `predicted + expected`.
///   The default, and the cost existing equalizer runs were trained with.
/// - `Mse`      - `mean((predicted - expected)²)`, metric `predicted - expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    Additive,
    Mse,
}

impl LossType {
    pub fn loss(&self, predicted: &Matrix, expected: &Matrix) -> f64 {
        match self {
            LossType::Additive => AdditiveLoss::loss(predicted, expected),
            LossType::Mse => MseLoss::loss(predicted, expected),
        }
    }

    pub fn derivative(&self, predicted: &Matrix, expected: &Matrix) -> Matrix {
        match self {
            LossType::Additive => AdditiveLoss::derivative(predicted, expected),
            LossType::Mse => MseLoss::derivative(predicted, expected),
        }
    }

    pub fn error_metric(&self, predicted: &Matrix, expected: &Matrix) -> Matrix {
        match self {
            LossType::Additive => AdditiveLoss::error_metric(predicted, expected),
            LossType::Mse => MseLoss::error_metric(predicted, expected),
        }
    }
}
