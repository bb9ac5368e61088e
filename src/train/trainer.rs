use std::time::Instant;

use tracing::{debug, info};

use crate::data::minibatch::{batch_count, random_mini_batches, MiniBatch};
use crate::data::splitter::FeatureSplits;
use crate::error::NetError;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::network::parameters::{ParameterSet, INPUT_SIZE, OUTPUT_SIZE};
use crate::optim::adam::Adam;
use crate::report::lines::cost_line;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Where a `Trainer` currently is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainPhase {
    Initializing,
    EpochRunning,
    MinibatchRunning,
    Reporting,
    Evaluating,
    Done,
}

/// Everything a finished run hands back.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    /// Final weights and biases.
    pub parameters: ParameterSet,
    /// Epoch costs sampled every `history_every` epochs.
    pub costs: Vec<f64>,
    /// One entry per epoch.
    pub epochs: Vec<EpochStats>,
    /// Error metric over the full training set.
    pub train_error: Matrix,
    /// Error metric over the full test set.
    pub test_error: Matrix,
    /// Optimizer steps taken.
    pub steps: usize,
}

/// Mini-batch Adam over the equalizer network.
///
/// `new` validates the data and builds the model, `run` drives the epochs,
/// reporting and final evaluation.
pub struct Trainer<'a> {
    splits: &'a FeatureSplits,
    config: &'a TrainConfig,
    network: Network,
    optimizer: Adam,
    seed: u64,
    phase: TrainPhase,
    costs: Vec<f64>,
    epochs: Vec<EpochStats>,
}

impl<'a> Trainer<'a> {
    pub fn new(splits: &'a FeatureSplits, config: &'a TrainConfig) -> Result<Trainer<'a>, NetError> {
        config.validate()?;
        check_pair("X_train", &splits.x_train, "Y_train", &splits.y_train)?;
        check_pair("X_test", &splits.x_test, "Y_test", &splits.y_test)?;
        if splits.x_train.cols == 0 {
            return Err(NetError::EmptyDataset);
        }

        let parameters = ParameterSet::initialize(config.init_seed);
        parameters.check_shapes()?;

        info!(
            train_columns = splits.x_train.cols,
            test_columns = splits.x_test.cols,
            learning_rate = config.learning_rate,
            epochs = config.epochs,
            minibatch_size = config.minibatch_size,
            "trainer initialized"
        );

        Ok(Trainer {
            splits,
            config,
            network: Network::equalizer(parameters),
            optimizer: Adam::new(config.learning_rate),
            seed: config.shuffle_seed,
            phase: TrainPhase::Initializing,
            costs: Vec::new(),
            epochs: Vec::with_capacity(config.epochs),
        })
    }

    pub fn phase(&self) -> TrainPhase {
        self.phase
    }

    fn enter(&mut self, phase: TrainPhase) {
        debug!(from = ?self.phase, to = ?phase, "phase");
        self.phase = phase;
    }

    /// Runs every epoch, then evaluates on the full train and test sets.
    pub fn run(mut self) -> TrainOutcome {
        for epoch in 0..self.config.epochs {
            let stats = self.run_epoch(epoch);
            self.report(&stats);
            self.epochs.push(stats);
        }

        let (train_error, test_error) = self.evaluate();
        self.enter(TrainPhase::Done);
        info!(steps = self.optimizer.steps(), "parameters have been trained");

        TrainOutcome {
            parameters: self.network.parameters(),
            costs: self.costs,
            epochs: self.epochs,
            train_error,
            test_error,
            steps: self.optimizer.steps(),
        }
    }

    /// One reshuffle and one pass over the whole mini-batches.
    pub fn run_epoch(&mut self, epoch: usize) -> EpochStats {
        self.enter(TrainPhase::EpochRunning);
        let t_start = Instant::now();

        self.seed += 1;
        let splits = self.splits;
        let (x, y) = (&splits.x_train, &splits.y_train);
        let num_minibatches = batch_count(x.cols, self.config.minibatch_size);
        let minibatches = random_mini_batches(x, y, self.config.minibatch_size, self.seed);

        self.enter(TrainPhase::MinibatchRunning);
        let mut epoch_cost = 0.0;
        for minibatch in &minibatches {
            let minibatch_cost = self.run_minibatch(minibatch);
            epoch_cost += minibatch_cost / num_minibatches as f64;
        }

        let used: usize = minibatches.iter().map(MiniBatch::width).sum();
        EpochStats {
            epoch,
            total_epochs: self.config.epochs,
            seed: self.seed,
            cost: epoch_cost,
            batches: minibatches.len(),
            dropped_columns: x.cols - used,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        }
    }

    /// Forward, cost, backward and one optimizer step. Returns the cost
    /// measured before the step.
    fn run_minibatch(&mut self, minibatch: &MiniBatch) -> f64 {
        let loss = self.config.loss;
        let output = self.network.forward(&minibatch.x);
        let cost = loss.loss(&output, &minibatch.y);
        let grads = self.network.backward(loss.derivative(&output, &minibatch.y));
        self.optimizer.step(&mut self.network, grads);
        cost
    }

    fn report(&mut self, stats: &EpochStats) {
        self.enter(TrainPhase::Reporting);
        debug!(
            epoch = stats.epoch,
            cost = stats.cost,
            batches = stats.batches,
            dropped = stats.dropped_columns,
            elapsed_ms = stats.elapsed_ms,
            "epoch finished"
        );

        if let Some(line) = cost_line(self.config, stats.epoch, stats.cost) {
            println!("{line}");
        }
        if self.config.print_cost && stats.epoch % self.config.history_every == 0 {
            self.costs.push(stats.cost);
        }
    }

    /// Error metric of the current parameters over the full train and test
    /// matrices.
    pub fn evaluate(&mut self) -> (Matrix, Matrix) {
        self.enter(TrainPhase::Evaluating);
        let loss = self.config.loss;
        let splits = self.splits;
        let train = loss.error_metric(&self.network.predict(&splits.x_train), &splits.y_train);
        let test = loss.error_metric(&self.network.predict(&splits.x_test), &splits.y_test);
        (train, test)
    }
}

/// Both matrices must have the input/output row count and equal width.
fn check_pair(x_name: &str, x: &Matrix, y_name: &str, y: &Matrix) -> Result<(), NetError> {
    if x.rows != INPUT_SIZE {
        return Err(NetError::ShapeMismatch {
            what: x_name.to_string(),
            expected: (INPUT_SIZE, x.cols),
            got: x.shape(),
        });
    }
    if y.shape() != (OUTPUT_SIZE, x.cols) {
        return Err(NetError::ShapeMismatch {
            what: y_name.to_string(),
            expected: (OUTPUT_SIZE, x.cols),
            got: y.shape(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_splits(cols: usize) -> FeatureSplits {
        let x = Matrix::from_data(vec![
            (0..cols).map(|j| (j as f64 * 0.37).sin()).collect(),
            (0..cols).map(|j| (j as f64 * 0.11).cos()).collect(),
        ]);
        let y = x.map(|v| 0.5 * v);
        FeatureSplits { x_train: x.clone(), y_train: y.clone(), x_test: x, y_test: y }
    }

    fn quiet(epochs: usize, minibatch_size: usize) -> TrainConfig {
        TrainConfig { print_cost: false, ..TrainConfig::new(0.01, epochs, minibatch_size) }
    }

    #[test]
    fn starts_initializing_and_ends_evaluating() {
        let splits = tiny_splits(20);
        let config = quiet(1, 10);
        let mut trainer = Trainer::new(&splits, &config).unwrap();
        assert_eq!(trainer.phase(), TrainPhase::Initializing);

        let stats = trainer.run_epoch(0);
        assert_eq!(trainer.phase(), TrainPhase::MinibatchRunning);
        assert_eq!(stats.batches, 2);
        assert_eq!(stats.seed, 4);

        trainer.evaluate();
        assert_eq!(trainer.phase(), TrainPhase::Evaluating);
    }

    #[test]
    fn seed_increments_every_epoch() {
        let splits = tiny_splits(12);
        let config = quiet(3, 4);
        let outcome = Trainer::new(&splits, &config).unwrap().run();
        let seeds: Vec<u64> = outcome.epochs.iter().map(|s| s.seed).collect();
        assert_eq!(seeds, vec![4, 5, 6]);
        assert_eq!(outcome.steps, 9);
    }

    #[test]
    fn history_only_recorded_when_printing() {
        let splits = tiny_splits(8);
        let config = quiet(6, 8);
        let outcome = Trainer::new(&splits, &config).unwrap().run();
        assert!(outcome.costs.is_empty());

        let config = TrainConfig { print_cost: true, ..quiet(11, 8) };
        let outcome = Trainer::new(&splits, &config).unwrap().run();
        // epochs 0, 5 and 10
        assert_eq!(outcome.costs.len(), 3);
        assert_eq!(outcome.costs[1], outcome.epochs[5].cost);
    }

    #[test]
    fn prints_cost_on_epochs_zero_and_ten() {
        let splits = tiny_splits(8);
        let config = TrainConfig { print_cost: true, ..quiet(11, 8) };
        let outcome = Trainer::new(&splits, &config).unwrap().run();

        let printed: Vec<usize> = outcome.epochs.iter()
            .filter(|s| cost_line(&config, s.epoch, s.cost).is_some())
            .map(|s| s.epoch)
            .collect();
        assert_eq!(printed, vec![0, 10]);

        let first = cost_line(&config, 0, outcome.epochs[0].cost).unwrap();
        assert_eq!(first, format!("Cost after epoch 0: {:.6}", outcome.epochs[0].cost));
        let digits = first.rsplit('.').next().unwrap();
        assert_eq!(digits.len(), 6);
    }

    #[test]
    fn rejects_mismatched_widths() {
        let mut splits = tiny_splits(10);
        splits.y_test = splits.y_test.truncate_columns(9);
        let config = quiet(1, 10);
        match Trainer::new(&splits, &config) {
            Err(NetError::ShapeMismatch { what, .. }) => assert_eq!(what, "Y_test"),
            Err(e) => panic!("expected ShapeMismatch, got {e}"),
            Ok(_) => panic!("expected ShapeMismatch"),
        }
    }

    #[test]
    fn rejects_wrong_feature_rows() {
        let mut splits = tiny_splits(10);
        splits.x_train = Matrix::zeros(3, 10);
        let config = quiet(1, 10);
        assert!(matches!(Trainer::new(&splits, &config), Err(NetError::ShapeMismatch { .. })));
    }

    #[test]
    fn rejects_empty_training_set() {
        let splits = tiny_splits(0);
        let config = quiet(1, 10);
        assert!(matches!(Trainer::new(&splits, &config), Err(NetError::EmptyDataset)));
    }
}
