mod error;
mod locator;
mod walker;

pub use error::{DiscoveryError, DiscoveryResult};
pub use locator::{
    DESCRIPTOR_EXTENSIONS, ExportPatternLocator, RouteDescriptorLocator, SiblingFileLocator,
};
pub use walker::discover_routes;

/// One discovered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTableEntry {
    /// Emitted route key: `/`-separated, framework bracket syntax kept,
    /// grouping segments stripped, `/` for the scan root itself.
    pub route_path: String,
    /// Scan-root-relative path of the descriptor file, when typed.
    pub descriptor: Option<String>,
    /// Scan-root-relative path of the page file that makes this a route.
    pub source_file: String,
}

impl RouteTableEntry {
    pub fn is_typed(&self) -> bool {
        self.descriptor.is_some()
    }
}

/// The aggregate compiled artifact: every discovered route in traversal
/// order, with unique route paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    pub entries: Vec<RouteTableEntry>,
}

impl RouteTable {
    pub fn typed(&self) -> impl Iterator<Item = &RouteTableEntry> {
        self.entries.iter().filter(|entry| entry.is_typed())
    }

    pub fn static_routes(&self) -> impl Iterator<Item = &RouteTableEntry> {
        self.entries.iter().filter(|entry| !entry.is_typed())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
