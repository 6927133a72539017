use serde_json::Value;

use crate::value::{CodecOptions, CodecResult, encode_value_with};

use super::QueryParams;

pub fn build_query_string(params: &QueryParams) -> CodecResult<String> {
    build_query_string_with(params, &CodecOptions::default())
}

/// Renders search params as a `?key=value&...` string in insertion order.
///
/// Undefined and empty-string values emit the bare key with no `=`; an
/// empty map yields the empty string rather than a lone `?`.
#[tracing::instrument(level = "trace", skip(params, options), fields(keys = params.len() as u64))]
pub fn build_query_string_with(params: &QueryParams, options: &CodecOptions) -> CodecResult<String> {
    let mut fragments: Vec<String> = Vec::with_capacity(params.len());

    for (key, value) in params {
        match value {
            None => fragments.push(key.clone()),
            Some(Value::String(s)) if s.is_empty() => fragments.push(key.clone()),
            Some(value) => fragments.push(format!("{key}={}", encode_value_with(value, options)?)),
        }
    }

    if fragments.is_empty() {
        return Ok(String::new());
    }

    Ok(format!("?{}", fragments.join("&")))
}
