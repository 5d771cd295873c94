//! Error type for the I/O and configuration edges of the tool.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Config { path: PathBuf, source: serde_json::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
