use crate::{math::matrix::Matrix, network::network::Network};

/// First and second moment estimates for one layer.
#[derive(Debug, Clone)]
struct Moments {
    m_weights: Matrix,
    v_weights: Matrix,
    m_biases: Matrix,
    v_biases: Matrix,
}

/// Adam optimizer with bias-corrected moment estimates and a fixed
/// learning rate.
#[derive(Debug, Clone)]
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    moments: Vec<Moments>,
    t: usize,
}

impl Adam {
    pub fn new(learning_rate: f64) -> Adam {
        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            moments: Vec::new(),
            t: 0,
        }
    }

    /// Number of updates applied so far.
    pub fn steps(&self) -> usize {
        self.t
    }

    /// Applies one update to every layer of `network`. `grads` holds
    /// `(weights_grad, biases_grad)` per layer, input layer first.
    pub fn step(&mut self, network: &mut Network, grads: Vec<(Matrix, Matrix)>) {
        assert_eq!(grads.len(), network.layers.len(), "one gradient pair per layer");

        if self.moments.is_empty() {
            self.moments = network.layers.iter()
                .map(|layer| Moments {
                    m_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
                    v_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
                    m_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
                    v_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
                })
                .collect();
        }

        self.t += 1;
        let t = i32::try_from(self.t).unwrap_or(i32::MAX);
        let bc1 = 1.0 - self.beta1.powi(t);
        let bc2 = 1.0 - self.beta2.powi(t);

        let update = Update {
            learning_rate: self.learning_rate,
            beta1: self.beta1,
            beta2: self.beta2,
            epsilon: self.epsilon,
            bc1,
            bc2,
        };

        for ((layer, moments), (w_grad, b_grad)) in network.layers.iter_mut()
            .zip(self.moments.iter_mut())
            .zip(grads)
        {
            update.apply(&mut layer.weights, &w_grad, &mut moments.m_weights, &mut moments.v_weights);
            update.apply(&mut layer.biases, &b_grad, &mut moments.m_biases, &mut moments.v_biases);
        }
    }
}

/// Hyperparameters and bias corrections of a single step.
struct Update {
    learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    bc1: f64,
    bc2: f64,
}

impl Update {
    fn apply(&self, params: &mut Matrix, grad: &Matrix, m: &mut Matrix, v: &mut Matrix) {
        assert_eq!(params.shape(), grad.shape(), "gradient does not match parameter shape");
        for i in 0..params.rows {
            for j in 0..params.cols {
                let g = grad.data[i][j];
                m.data[i][j] = self.beta1 * m.data[i][j] + (1.0 - self.beta1) * g;
                v.data[i][j] = self.beta2 * v.data[i][j] + (1.0 - self.beta2) * g * g;
                let m_hat = m.data[i][j] / self.bc1;
                let v_hat = v.data[i][j] / self.bc2;
                params.data[i][j] -= self.learning_rate * m_hat / (v_hat.sqrt() + self.epsilon);
            }
        }
    }
}
