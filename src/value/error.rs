use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(
        "empty strings cannot be encoded; only null, non-empty strings, numbers, booleans, arrays, and objects are encodable"
    )]
    EmptyString,
    #[error("value could not be serialized to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type CodecResult<T> = Result<T, CodecError>;
