use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use ferrite_eq::report::{accuracy_lines, render_cost_chart};
use ferrite_eq::{complex_divide, load_pair, logging, train_model, NetError, TrainConfig};

/// Trains the complex-sample equalizer on X_train/Y_train and reports its
/// error on X_test/Y_test.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding the X_train, Y_train, X_test and Y_test files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,
    /// JSON file overriding the default hyperparameters
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Skip the cost chart
    #[arg(long)]
    no_chart: bool,
}

fn run(cli: Cli) -> Result<(), NetError> {
    let config = match &cli.config {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };

    let train = load_pair(cli.data_dir.join("X_train"), cli.data_dir.join("Y_train"))?;
    let test = load_pair(cli.data_dir.join("X_test"), cli.data_dir.join("Y_test"))?;
    let splits = complex_divide(train, test);

    let outcome = train_model(&splits, &config)?;

    if !cli.no_chart {
        print!("{}", render_cost_chart(&outcome.costs, config.learning_rate));
    }
    println!("Parameters have been trained");
    for line in accuracy_lines(&outcome.train_error, &outcome.test_error) {
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = logging::install_logger() {
        eprintln!("failed to install logger: {e}");
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
