use crate::value::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("missing value for dynamic segment '{name}' in template '{template}'")]
    MissingDynamicSegment { template: String, name: String },
    #[error("missing value for catch-all segment '{name}' in template '{template}'")]
    MissingCatchAllSegment { template: String, name: String },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type TemplateResult<T> = Result<T, TemplateError>;
