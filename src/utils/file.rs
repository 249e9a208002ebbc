use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub async fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::IoError(e),
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    serde_json::from_str(&content).map_err(|source| FileError::JsonError {
        path: path.to_path_buf(),
        source,
    })
}
