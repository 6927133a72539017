use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("source path '{}' does not exist", path.display())]
    SourcePathMissing { path: PathBuf },
    #[error("source path '{}' is not a directory", path.display())]
    SourcePathNotADirectory { path: PathBuf },
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
