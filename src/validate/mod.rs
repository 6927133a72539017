mod shape;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::query::{RawValue, parse_query_string_with};
use crate::template::extract_route_params_with;
use crate::value::CodecOptions;

pub use shape::TypeShape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Key path into the offending value, outermost first.
    pub path: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationIssues(pub Vec<ValidationIssue>);

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, issue) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            if issue.path.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{}: {}", issue.path.join("."), issue.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationIssues {}

/// Opaque schema-validation capability. The codec and discovery core
/// never call this; it exists so route descriptors can carry whatever
/// validation the application pairs with them.
pub trait Validator: Send + Sync {
    fn validate(&self, input: &Value) -> Result<Value, ValidationIssues>;
}

/// The per-route typed contract. A descriptor with neither slot present
/// is still a typed route; it declares that the route takes no
/// parameters.
#[derive(Clone, Default)]
pub struct RouteDescriptor {
    pub route_params: Option<Arc<dyn Validator>>,
    pub search_params: Option<Arc<dyn Validator>>,
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("route_params", &self.route_params.is_some())
            .field("search_params", &self.search_params.is_some())
            .finish()
    }
}

/// Parses a query string and validates the result. Undefined entries
/// (bare keys) are treated as absent keys for validation purposes.
pub fn parse_search_params_with(
    validator: &dyn Validator,
    raw: &str,
    options: &CodecOptions,
) -> Result<Value, ValidationIssues> {
    let parsed = parse_query_string_with(raw, options);
    let object: serde_json::Map<String, Value> = parsed
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect();
    validator.validate(&Value::Object(object))
}

/// Extracts a template's route params from raw matched values and
/// validates the result.
pub fn parse_route_params_with(
    validator: &dyn Validator,
    template: &str,
    raw: &IndexMap<String, RawValue>,
    options: &CodecOptions,
) -> Result<Value, ValidationIssues> {
    let extracted = extract_route_params_with(template, raw, options);
    let object: serde_json::Map<String, Value> = extracted.into_iter().collect();
    validator.validate(&Value::Object(object))
}
