use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A build worker died before sending its partial index.
    #[error("worker for chunk {chunk} exited without a result")]
    Worker { chunk: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
