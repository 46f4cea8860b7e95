//! Error types for erasure coding operations

use crate::matrix::MatrixError;
use thiserror::Error;

/// Errors that can occur while building or using the erasure coder.
#[derive(Debug, Error)]
pub enum ErasureError {
    /// The coder supports exactly two parity shards
    #[error("the number of parity shards is not equal to 2")]
    ParityNonEqualTwo,

    /// At least one data shard is required
    #[error("cannot create an encoder with less than one data shard")]
    InvShardNum,

    /// Data plus parity shards must fit in the field
    #[error("cannot create an encoder with more than 256 total shards")]
    MaxShardNum,

    /// The shard sequence has the wrong count or carries no data
    #[error("no shard data")]
    ShardNoData,

    /// Shard buffers within a set must share one length
    #[error("shard sizes do not match")]
    ShardSize,

    /// Fewer shards survive than are needed to recover the data
    #[error("too few shards given")]
    TooFewShards,

    /// The input does not hold enough bytes for the requested shards
    #[error("not enough data to fill the number of requested shards")]
    ShortData,

    /// A required data shard is erased and must be reconstructed first
    #[error("reconstruction required as one or more required data shards are empty")]
    ReconstructRequired,

    /// A matrix operation failed, e.g. a singular surviving-row matrix
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// The join sink failed to accept bytes
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with ErasureError.
pub type Result<T> = std::result::Result<T, ErasureError>;
