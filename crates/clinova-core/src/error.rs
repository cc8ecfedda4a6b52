use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown role code: {0}")]
    UnknownRole(u8),

    #[error("block number out of range: {0}")]
    BlockOutOfRange(u8),
}
