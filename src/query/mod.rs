mod build;
mod parse;

use indexmap::IndexMap;
use serde_json::Value;

pub use build::{build_query_string, build_query_string_with};
pub use parse::{
    RawValue, decode_raw_value, parse_query_string, parse_query_string_with, parse_string_map,
    parse_string_map_with,
};

/// One query-string value. `None` models an explicitly undefined entry,
/// which renders as a bare key with no `=value`.
pub type QueryValue = Option<Value>;

/// Search params in insertion order.
pub type QueryParams = IndexMap<String, QueryValue>;
