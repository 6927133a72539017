use indexmap::IndexMap;
use serde_json::Value;

use crate::query::{RawValue, decode_raw_value};
use crate::segment::{SegmentKind, parse_segment};
use crate::value::CodecOptions;

use super::RouteParams;

pub fn extract_route_params(
    template: &str,
    raw: &IndexMap<String, RawValue>,
) -> RouteParams {
    extract_route_params_with(template, raw, &CodecOptions::default())
}

/// The reverse of [`super::fill_route`]: pulls the typed values named by a
/// template's non-static segments back out of the raw matched values.
///
/// Dynamic names decode as scalars; catch-all and optional catch-all
/// names always yield arrays, wrapping a scalar raw value when needed.
/// Names absent from the raw map are omitted from the result.
#[tracing::instrument(level = "trace", skip(raw, options))]
pub fn extract_route_params_with(
    template: &str,
    raw: &IndexMap<String, RawValue>,
    options: &CodecOptions,
) -> RouteParams {
    let mut params = RouteParams::new();

    for token in template.split('/') {
        let segment = parse_segment(token);
        match segment.kind {
            SegmentKind::Static => {}
            SegmentKind::Dynamic => {
                if let Some(value) = raw.get(&segment.name) {
                    params.insert(segment.name, decode_raw_value(value, options));
                }
            }
            SegmentKind::CatchAll | SegmentKind::OptionalCatchAll => {
                if let Some(value) = raw.get(&segment.name) {
                    let decoded = decode_raw_value(value, options);
                    let wrapped = match decoded {
                        Value::Array(_) => decoded,
                        other => Value::Array(vec![other]),
                    };
                    params.insert(segment.name, wrapped);
                }
            }
        }
    }

    params
}
