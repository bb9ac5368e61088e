use crate::data::splitter::FeatureSplits;
use crate::error::NetError;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{TrainOutcome, Trainer};

/// Trains the equalizer on `splits` and returns the final parameters, the
/// cost history and the train/test error metric.
///
/// # Errors
/// - `NetError::ShapeMismatch` if a feature matrix does not have 2 rows or an
///   X/Y pair differs in width
/// - `NetError::EmptyDataset` if the training set has no columns
/// - `NetError::Config` if the config has a zero batch size or report period
///
/// Numeric divergence is not checked: NaN or Inf costs propagate into the
/// returned parameters.
pub fn train_model(splits: &FeatureSplits, config: &TrainConfig) -> Result<TrainOutcome, NetError> {
    Ok(Trainer::new(splits, config)?.run())
}
