use crate::{activation::activation::ActivationFunction, layers::dense::{Layer, LayerGradients}};
use crate::math::matrix::Matrix;
use crate::network::parameters::ParameterSet;

/// The equalizer network: LINEAR → ReLU → LINEAR → TANH → LINEAR.
#[derive(Debug, Clone)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds the three dense layers from a parameter set.
    pub fn equalizer(params: ParameterSet) -> Network {
        let ParameterSet { w1, b1, w2, b2, w3, b3 } = params;
        Network {
            layers: vec![
                Layer::from_parts(w1, b1, ActivationFunction::ReLU),
                Layer::from_parts(w2, b2, ActivationFunction::Tanh),
                Layer::from_parts(w3, b3, ActivationFunction::Identity),
            ],
        }
    }

    /// Snapshot of the current weights and biases.
    pub fn parameters(&self) -> ParameterSet {
        ParameterSet {
            w1: self.layers[0].weights.clone(),
            b1: self.layers[0].biases.clone(),
            w2: self.layers[1].weights.clone(),
            b2: self.layers[1].biases.clone(),
            w3: self.layers[2].weights.clone(),
            b3: self.layers[2].biases.clone(),
        }
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &Matrix) -> Matrix {
        let mut current = input.clone();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        current
    }

    /// Forward pass for evaluation; leaves the caches alone.
    pub fn predict(&self, input: &Matrix) -> Matrix {
        self.layers.iter().fold(input.clone(), |current, layer| layer.forward(&current))
    }

    /// Backpropagates ∂L/∂output through the batch seen by the last
    /// `forward` call. Returns `(weights_grad, biases_grad)` per layer,
    /// input layer first.
    pub fn backward(&self, output_delta: Matrix) -> Vec<(Matrix, Matrix)> {
        let mut grads = Vec::with_capacity(self.layers.len());
        let mut delta = output_delta;
        for layer in self.layers.iter().rev() {
            let LayerGradients { weights, biases, input_delta } = layer.compute_gradients(&delta);
            grads.push((weights, biases));
            delta = input_delta;
        }
        grads.reverse();
        grads
    }
}

/// `z3 = W3·tanh(W2·relu(W1·x + b1) + b2) + b3` for every column of `x`.
pub fn forward_propagation(x: &Matrix, params: &ParameterSet) -> Matrix {
    let z1 = (&params.w1 * x).add_column(&params.b1);
    let a1 = z1.map(|v| ActivationFunction::ReLU.function(v));
    let z2 = (&params.w2 * &a1).add_column(&params.b2);
    let a2 = z2.map(|v| ActivationFunction::Tanh.function(v));
    (&params.w3 * &a2).add_column(&params.b3)
}
