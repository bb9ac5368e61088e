use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Gradients of one layer for one mini-batch.
#[derive(Debug, Clone)]
pub struct LayerGradients {
    pub weights: Matrix,
    pub biases: Matrix,
    /// ∂L/∂input, handed to the previous layer.
    pub input_delta: Matrix,
}

/// Fully connected layer over column-major batches: each column of the input
/// is one sample, `z = W·x + b`, `a = σ(z)`.
#[derive(Debug, Clone)]
pub struct Layer{
    pre_neurons: Matrix,  // pre-activation values (z = Wx + b) needed for correct derivative
    inputs: Matrix,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction
}

impl Layer {
    /// Xavier-initialized weights (`size × input_size`) and zero biases.
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction, seed: u64) -> Layer {
        Layer::from_parts(
            Matrix::xavier(size, input_size, seed),
            Matrix::zeros(size, 1),
            activation,
        )
    }

    pub fn from_parts(weights: Matrix, biases: Matrix, activation: ActivationFunction) -> Layer {
        assert_eq!(biases.shape(), (weights.rows, 1), "bias must be a column matching the weight rows");
        Layer {
            pre_neurons: Matrix::default(),
            inputs: Matrix::default(),
            weights,
            biases,
            activator: activation
        }
    }

    /// Forward pass without touching the backprop caches.
    pub fn forward(&self, input: &Matrix) -> Matrix {
        let z = (&self.weights * input).add_column(&self.biases);
        z.map(|x| self.activator.function(x))
    }

    /// Forward pass that remembers input and z for `compute_gradients`.
    pub fn feed_from(&mut self, input: &Matrix) -> Matrix {
        let z = (&self.weights * input).add_column(&self.biases);
        let a = z.map(|x| self.activator.function(x));
        self.inputs = input.clone();
        self.pre_neurons = z;
        a
    }

    /// Backward pass for the batch last seen by `feed_from`.
    /// `delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(&self, delta: &Matrix) -> LayerGradients {
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // δ = error ⊙ σ'(z)
        let layer_delta = delta.hadamard(&act_derivative);

        LayerGradients {
            weights: &layer_delta * &self.inputs.transpose(),
            biases: layer_delta.sum_columns(),
            input_delta: &self.weights.transpose() * &layer_delta,
        }
    }
}
