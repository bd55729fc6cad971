use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;

use launchboard::core::Dataset;
use launchboard::server::{DEFAULT_BIND_ADDR, serve};
use launchboard::telemetry::init_default_tracing;

const DEFAULT_DATASET_PATH: &str = "data/spacex_launch_dash.csv";

#[tokio::main]
async fn main() -> ExitCode {
    let _ = init_default_tracing();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_owned());

    let dataset = match Dataset::from_csv_path(&path) {
        Ok(dataset) => Arc::new(dataset),
        Err(err) => {
            error!(%path, error = %err, "failed to load dataset");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = serve(DEFAULT_BIND_ADDR, dataset).await {
        error!(error = %err, "server exited");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
