mod error;
mod extract;
mod fill;

use indexmap::IndexMap;
use serde_json::Value;

pub use error::{TemplateError, TemplateResult};
pub use extract::{extract_route_params, extract_route_params_with};
pub use fill::{PathArgs, build_path, fill_route, fill_route_with};

/// Route params in insertion order. Absence of a key is the undefined
/// case; optional catch-all segments tolerate it, required segments fail.
pub type RouteParams = IndexMap<String, Value>;
