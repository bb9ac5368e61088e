pub mod error;
pub mod math;
pub mod activation;
pub mod data;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod report;
pub mod logging;

// Convenience re-exports
pub use error::NetError;
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use data::{complex_divide, load_complex64, load_pair, split_complex, FeatureSplits, SamplePair};
pub use layers::dense::Layer;
pub use network::{forward_propagation, Network, ParameterSet};
pub use loss::{AdditiveLoss, LossType, MseLoss};
pub use optim::adam::Adam;
pub use train::{train_model, TrainConfig, TrainOutcome};
