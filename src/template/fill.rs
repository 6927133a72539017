use serde_json::Value;
use smallvec::SmallVec;

use crate::query::{QueryParams, build_query_string_with};
use crate::segment::{SegmentKind, parse_segment};
use crate::value::{CodecOptions, encode_value_with};

use super::{RouteParams, TemplateError, TemplateResult};

pub fn fill_route(template: &str, params: &RouteParams) -> TemplateResult<String> {
    fill_route_with(template, params, &CodecOptions::default())
}

/// Turns a route template plus a parameter mapping into a concrete path.
///
/// Fails fast on a missing dynamic or catch-all value; there is no
/// partial output. Catch-all arrays flatten into one path part per
/// element; an absent optional catch-all contributes nothing.
#[tracing::instrument(level = "trace", skip(params, options))]
pub fn fill_route_with(
    template: &str,
    params: &RouteParams,
    options: &CodecOptions,
) -> TemplateResult<String> {
    let mut parts: SmallVec<[String; 8]> = SmallVec::new();

    for token in template.split('/') {
        let segment = parse_segment(token);
        match segment.kind {
            SegmentKind::Static => parts.push(segment.name),
            SegmentKind::Dynamic => match params.get(&segment.name) {
                Some(value) => parts.push(encode_value_with(value, options)?),
                None => {
                    return Err(TemplateError::MissingDynamicSegment {
                        template: template.to_string(),
                        name: segment.name,
                    });
                }
            },
            SegmentKind::CatchAll => match params.get(&segment.name) {
                Some(Value::Array(items)) => {
                    for item in items {
                        parts.push(encode_value_with(item, options)?);
                    }
                }
                Some(value) => parts.push(encode_value_with(value, options)?),
                None => {
                    return Err(TemplateError::MissingCatchAllSegment {
                        template: template.to_string(),
                        name: segment.name,
                    });
                }
            },
            SegmentKind::OptionalCatchAll => match params.get(&segment.name) {
                Some(Value::Array(items)) => {
                    for item in items {
                        parts.push(encode_value_with(item, options)?);
                    }
                }
                Some(value) => parts.push(encode_value_with(value, options)?),
                None => {}
            },
        }
    }

    Ok(parts.join("/"))
}

/// Input to [`build_path`], mirroring the route/routeParams/searchParams
/// triple a caller supplies to construct one concrete URL.
#[derive(Debug, Clone, Default)]
pub struct PathArgs {
    pub route: String,
    pub route_params: Option<RouteParams>,
    pub search_params: Option<QueryParams>,
    pub format: CodecOptions,
}

/// Builds a concrete URL path from a route template and its params.
///
/// Pure string construction; schema validation, when wanted, is the
/// caller's business before invoking this.
pub fn build_path(args: &PathArgs) -> TemplateResult<String> {
    match (&args.route_params, &args.search_params) {
        (None, None) => Ok(args.route.clone()),
        (Some(route_params), None) => fill_route_with(&args.route, route_params, &args.format),
        (None, Some(search_params)) => Ok(format!(
            "{}{}",
            args.route,
            build_query_string_with(search_params, &args.format)?
        )),
        (Some(route_params), Some(search_params)) => Ok(format!(
            "{}{}",
            fill_route_with(&args.route, route_params, &args.format)?,
            build_query_string_with(search_params, &args.format)?
        )),
    }
}
