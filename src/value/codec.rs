use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde_json::Value;

use super::{CodecError, CodecResult};

/// Escape set matching ECMA-262 `encodeURIComponent`: everything except
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// When set, a top-level array is encoded by joining its
    /// individually-encoded elements with this separator instead of
    /// JSON-encoding the whole array, producing `?countries=NL~UK` style
    /// multi-value params. Decoding splits on the separator when present.
    pub array_format_separator: Option<char>,
}

pub fn escape_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

pub fn encode_value(value: &Value) -> CodecResult<String> {
    encode_value_with(value, &CodecOptions::default())
}

/// Encodes one JSON-compatible value as a URL-safe string. Empty strings
/// are rejected; the query builder treats them as bare keys before ever
/// reaching this function.
#[tracing::instrument(level = "trace", skip(value, options))]
pub fn encode_value_with(value: &Value, options: &CodecOptions) -> CodecResult<String> {
    match value {
        Value::String(s) if s.is_empty() => Err(CodecError::EmptyString),
        Value::String(s) => Ok(escape_component(s)),
        Value::Number(n) => Ok(escape_component(&n.to_string())),
        Value::Bool(b) => Ok(escape_component(if *b { "true" } else { "false" })),
        Value::Array(items) => {
            if let Some(separator) = options.array_format_separator {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    parts.push(encode_value(item)?);
                }
                Ok(parts.join(&separator.to_string()))
            } else {
                Ok(escape_component(&serde_json::to_string(value)?))
            }
        }
        Value::Null | Value::Object(_) => Ok(escape_component(&serde_json::to_string(value)?)),
    }
}

pub fn decode_value(raw: &str) -> Value {
    decode_value_with(raw, &CodecOptions::default())
}

/// Decodes one URL string back into a value: percent-decode, then attempt
/// a JSON parse, falling back to the decoded string verbatim.
///
/// A string that happens to be a valid JSON literal (`"123"`, `"true"`,
/// `"null"`) decodes to the non-string type; round-tripping such a string
/// as a string requires the caller to double-JSON-encode it.
#[tracing::instrument(level = "trace", skip(options))]
pub fn decode_value_with(raw: &str, options: &CodecOptions) -> Value {
    if let Some(separator) = options.array_format_separator
        && raw.contains(separator)
    {
        return Value::Array(raw.split(separator).map(decode_value).collect());
    }

    let decoded = match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => return Value::String(raw.to_string()),
    };

    match serde_json::from_str(&decoded) {
        Ok(value) => value,
        Err(_) => Value::String(decoded.into_owned()),
    }
}
