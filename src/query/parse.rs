use indexmap::IndexMap;
use memchr::memchr;
use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::value::{CodecOptions, decode_value_with};

use super::{QueryParams, QueryValue};

/// A raw matched value as handed over by the routing layer: either a
/// single string or, for repeated keys and catch-all segments, a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Single(String),
    Multiple(Vec<String>),
}

pub fn parse_query_string(raw: &str) -> QueryParams {
    parse_query_string_with(raw, &CodecOptions::default())
}

/// Parses a `?key=value&...` string into an ordered param map.
///
/// A key occurring once without a value records an undefined entry; a key
/// occurring once with a value records the decoded scalar; a key occurring
/// multiple times records an array of the decoded values in appearance
/// order, with valueless occurrences dropped from the array.
#[tracing::instrument(level = "trace", skip(options))]
pub fn parse_query_string_with(raw: &str, options: &CodecOptions) -> QueryParams {
    let trimmed = raw.strip_prefix('?').unwrap_or(raw);
    let mut occurrences: IndexMap<String, Vec<Option<String>>> = IndexMap::new();

    for fragment in trimmed.split('&') {
        if fragment.is_empty() {
            continue;
        }

        let (raw_key, raw_value) = match memchr(b'=', fragment.as_bytes()) {
            Some(idx) => (&fragment[..idx], Some(&fragment[idx + 1..])),
            None => (fragment, None),
        };

        let key = decode_key(raw_key);
        let value = raw_value
            .filter(|value| !value.is_empty())
            .map(|value| value.replace('+', " "));

        occurrences.entry(key).or_default().push(value);
    }

    let mut params = QueryParams::with_capacity(occurrences.len());

    for (key, values) in occurrences {
        let present: Vec<String> = values.into_iter().flatten().collect();
        let entry: QueryValue = if present.is_empty() {
            None
        } else if present.len() == 1 {
            Some(decode_value_with(&present[0], options))
        } else {
            Some(Value::Array(
                present
                    .iter()
                    .map(|value| decode_value_with(value, options))
                    .collect(),
            ))
        };
        params.insert(key, entry);
    }

    params
}

pub fn parse_string_map(raw: &IndexMap<String, RawValue>) -> IndexMap<String, Value> {
    parse_string_map_with(raw, &CodecOptions::default())
}

/// Decodes a map of raw matched values, one value (or one array element)
/// at a time.
pub fn parse_string_map_with(
    raw: &IndexMap<String, RawValue>,
    options: &CodecOptions,
) -> IndexMap<String, Value> {
    raw.iter()
        .map(|(key, value)| (key.clone(), decode_raw_value(value, options)))
        .collect()
}

pub fn decode_raw_value(raw: &RawValue, options: &CodecOptions) -> Value {
    match raw {
        RawValue::Single(value) => decode_value_with(value, options),
        RawValue::Multiple(values) => Value::Array(
            values
                .iter()
                .map(|value| decode_value_with(value, options))
                .collect(),
        ),
    }
}

fn decode_key(raw: &str) -> String {
    let plus_normalized = raw.replace('+', " ");
    match percent_decode_str(&plus_normalized).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_normalized,
    }
}
