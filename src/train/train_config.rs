use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::NetError;
use crate::loss::loss_type::LossType;
use crate::network::parameters::DEFAULT_INIT_SEED;

/// Configuration for a training run.
///
/// # Fields
/// - `learning_rate`  - fixed Adam step size
/// - `epochs`         - total number of passes over the training data
/// - `minibatch_size` - columns per mini-batch; the remainder of each epoch
///                      is dropped
/// - `shuffle_seed`   - base seed; epoch `i` shuffles with `shuffle_seed + i + 1`
/// - `init_seed`      - seed for the Xavier weight initialization
/// - `print_cost`     - print cost lines and record the cost history
/// - `report_every`   - print `Cost after epoch` every this many epochs
/// - `history_every`  - record the epoch cost every this many epochs
/// - `loss`           - which cost to minimize
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub minibatch_size: usize,
    pub shuffle_seed: u64,
    pub init_seed: u64,
    pub print_cost: bool,
    pub report_every: usize,
    pub history_every: usize,
    pub loss: LossType,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.0001,
            epochs: 10,
            minibatch_size: 10000,
            shuffle_seed: 3,
            init_seed: DEFAULT_INIT_SEED,
            print_cost: true,
            report_every: 10,
            history_every: 5,
            loss: LossType::Additive,
        }
    }
}

impl TrainConfig {
    /// Defaults with the three headline hyperparameters replaced.
    pub fn new(learning_rate: f64, epochs: usize, minibatch_size: usize) -> Self {
        TrainConfig {
            learning_rate,
            epochs,
            minibatch_size,
            ..TrainConfig::default()
        }
    }

    /// Reads a (possibly partial) JSON config over the defaults.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainConfig, NetError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NetError> {
        if self.minibatch_size == 0 {
            return Err(NetError::Config("minibatch_size must be at least 1".into()));
        }
        if self.report_every == 0 || self.history_every == 0 {
            return Err(NetError::Config("report_every and history_every must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: TrainConfig = serde_json::from_str(r#"{ "epochs": 40, "loss": "mse" }"#).unwrap();
        assert_eq!(config.epochs, 40);
        assert_eq!(config.loss, LossType::Mse);
        assert_eq!(config.learning_rate, 0.0001);
        assert_eq!(config.minibatch_size, 10000);
    }

    #[test]
    fn zero_batch_is_rejected() {
        let config = TrainConfig::new(0.01, 1, 0);
        assert!(matches!(config.validate(), Err(NetError::Config(_))));
    }

    #[test]
    fn unknown_loss_is_a_config_error() {
        let path = std::env::temp_dir().join(format!("ferrite-eq-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "loss": "huber" }"#).unwrap();
        assert!(matches!(TrainConfig::load_json(&path), Err(NetError::Config(_))));
        std::fs::remove_file(&path).unwrap();
    }
}
