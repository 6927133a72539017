pub mod cli;
pub mod config;
pub mod discover;
pub mod errors;
pub mod generate;
pub mod query;
pub mod segment;
pub mod template;
pub mod validate;
pub mod value;
pub mod watch;

pub use discover::{
    ExportPatternLocator, RouteDescriptorLocator, RouteTable, RouteTableEntry,
    SiblingFileLocator, discover_routes,
};
pub use errors::{Error, Result};
pub use generate::{render_declaration_file, write_declaration_file};
pub use query::{
    QueryParams, QueryValue, RawValue, build_query_string, build_query_string_with,
    parse_query_string, parse_query_string_with,
};
pub use segment::{Segment, SegmentKind, parse_segment};
pub use template::{
    PathArgs, RouteParams, build_path, extract_route_params, fill_route, fill_route_with,
};
pub use validate::{RouteDescriptor, ValidationIssue, ValidationIssues, Validator};
pub use value::{CodecOptions, decode_value, decode_value_with, encode_value, encode_value_with};
