use crate::config::ConfigError;
use crate::discover::DiscoveryError;
use crate::generate::GenerateError;
use crate::template::TemplateError;
use crate::value::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
