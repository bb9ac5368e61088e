//! Console lines of a training run.

use crate::math::matrix::Matrix;
use crate::train::train_config::TrainConfig;

/// `Cost after epoch <i>: <cost>` on every `report_every`-th epoch (0-based),
/// `None` otherwise or when cost printing is off.
pub fn cost_line(config: &TrainConfig, epoch: usize, cost: f64) -> Option<String> {
    (config.print_cost && epoch % config.report_every == 0)
        .then(|| format!("Cost after epoch {epoch}: {cost:.6}"))
}

/// The train and test error metric lines printed after training.
pub fn accuracy_lines(train_error: &Matrix, test_error: &Matrix) -> [String; 2] {
    [
        format!("Train Accuracy: {train_error}"),
        format!("Test Accuracy: {test_error}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_lines_on_report_epochs_only() {
        let config = TrainConfig::default();
        let lines: Vec<(usize, String)> = (0..11)
            .filter_map(|epoch| cost_line(&config, epoch, 0.25 + epoch as f64).map(|l| (epoch, l)))
            .collect();
        assert_eq!(
            lines,
            vec![
                (0, "Cost after epoch 0: 0.250000".to_string()),
                (10, "Cost after epoch 10: 10.250000".to_string()),
            ]
        );
    }

    #[test]
    fn silent_when_printing_is_off() {
        let config = TrainConfig { print_cost: false, ..TrainConfig::default() };
        assert_eq!(cost_line(&config, 0, 1.0), None);
    }

    #[test]
    fn accuracy_lines_carry_the_metric() {
        let train = Matrix::from_data(vec![vec![0.5], vec![-1.0]]);
        let test = Matrix::from_data(vec![vec![2.0, 0.0], vec![0.25, 1.0]]);
        let [train_line, test_line] = accuracy_lines(&train, &test);
        assert_eq!(train_line, "Train Accuracy: [[0.500000]\n [-1.000000]]");
        assert_eq!(test_line, "Test Accuracy: [[2.000000 0.000000]\n [0.250000 1.000000]]");
    }
}
