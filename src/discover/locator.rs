use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions a route-descriptor file may carry, in priority order.
/// Fixed by the descriptor contract, independent of the user-configured
/// page extensions.
pub const DESCRIPTOR_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Decides whether a route directory declares a typed descriptor, and if
/// so at which path. The walker only needs presence; it never inspects
/// the descriptor's schema.
pub trait RouteDescriptorLocator {
    fn locate(&self, route_dir: &Path) -> Option<PathBuf>;
}

/// Locates a conventionally-named sibling file next to the page file,
/// trying each descriptor extension in priority order.
#[derive(Debug, Clone)]
pub struct SiblingFileLocator {
    filename: String,
}

impl SiblingFileLocator {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

impl Default for SiblingFileLocator {
    fn default() -> Self {
        Self::new("routeType")
    }
}

impl RouteDescriptorLocator for SiblingFileLocator {
    fn locate(&self, route_dir: &Path) -> Option<PathBuf> {
        DESCRIPTOR_EXTENSIONS
            .iter()
            .map(|ext| route_dir.join(format!("{}.{ext}", self.filename)))
            .find(|candidate| candidate.is_file())
    }
}

/// Detects an exported descriptor by scanning the page file's contents,
/// for trees that declare the descriptor inside the route file itself
/// rather than as a sibling.
#[derive(Debug, Clone)]
pub struct ExportPatternLocator {
    pattern: Regex,
    page_extensions: Vec<String>,
}

impl ExportPatternLocator {
    pub fn new(page_extensions: &[String]) -> Self {
        let pattern = Regex::new(r"export\s+(?:const|type)\s+RouteType\b")
            .expect("descriptor export pattern should compile");
        Self {
            pattern,
            page_extensions: page_extensions.to_vec(),
        }
    }
}

impl RouteDescriptorLocator for ExportPatternLocator {
    fn locate(&self, route_dir: &Path) -> Option<PathBuf> {
        for ext in &self.page_extensions {
            let candidate = route_dir.join(format!("page.{ext}"));
            if let Ok(contents) = fs::read_to_string(&candidate)
                && self.pattern.is_match(&contents)
            {
                return Some(candidate);
            }
        }
        None
    }
}
