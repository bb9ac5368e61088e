use serde::{Serialize, Deserialize};

/// Element-wise activation applied after a dense layer's linear transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    ReLU,
    Tanh,
    /// Output layer of a regression head: z passes through unchanged.
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Identity => x,
        }
    }

    /// Element-wise derivative, evaluated at the pre-activation `x`.
    /// ReLU uses 0 at the kink.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::Identity => 1.0,
        }
    }
}
