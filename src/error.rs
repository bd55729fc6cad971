use std::path::PathBuf;

use thiserror::Error;

pub type DashResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to open dataset {path}: {source}")]
    DatasetOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("dataset contains no records")]
    EmptyDataset,

    #[cfg(feature = "server")]
    #[error("server error: {0}")]
    Server(String),
}
