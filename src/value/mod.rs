mod codec;
mod error;

pub use codec::{
    CodecOptions, decode_value, decode_value_with, encode_value, encode_value_with,
    escape_component,
};
pub use error::{CodecError, CodecResult};
