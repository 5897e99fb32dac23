use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons the static host refuses to start.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("dist directory {} not found (build the UI with `dx build --release`)", .0.display())]
    MissingDist(PathBuf),

    #[error("no index.html in {}", .0.display())]
    MissingIndex(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
