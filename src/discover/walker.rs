use hashbrown::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{DiscoveryError, DiscoveryResult, RouteDescriptorLocator, RouteTable, RouteTableEntry};

/// Directories starting with this marker are parallel-route slots; they
/// never produce independent routable entries and are not walked into.
const PARALLEL_ROUTE_MARKER: char = '@';

/// Intercepted-route prefixes; a directory named `<marker><rest>` is
/// skipped entirely. A bare marker with no rest is a grouping segment.
const INTERCEPTED_ROUTE_MARKERS: &[&str] = &["(.)", "(..)", "(...)"];

/// Escape standing in for a leading literal underscore in a directory
/// name; unescaped in the emitted route path only, never during
/// traversal.
const UNDERSCORE_ESCAPE: &str = "%5F";

/// Walks the page tree under `root` and classifies every route directory
/// as typed or static.
///
/// Traversal is lexicographic per directory, so repeated runs over an
/// unchanged tree produce an identical table.
#[tracing::instrument(level = "debug", skip(page_extensions, locator), fields(root = %root.display()))]
pub fn discover_routes(
    root: &Path,
    page_extensions: &[String],
    locator: &dyn RouteDescriptorLocator,
) -> DiscoveryResult<RouteTable> {
    if !root.exists() {
        return Err(DiscoveryError::SourcePathMissing {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(DiscoveryError::SourcePathNotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let walk = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_reserved_dir(entry));

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("unreadable directory entry"));
                return Err(DiscoveryError::Io { path, source });
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        let Some(page_file) = find_page_file(dir, page_extensions) else {
            continue;
        };

        let route_path = derive_route_path(root, dir);
        if !seen.insert(route_path.clone()) {
            tracing::warn!(
                route = %route_path,
                dir = %dir.display(),
                "duplicate route path after group stripping; keeping the first"
            );
            continue;
        }

        let descriptor = locator.locate(dir);
        tracing::debug!(
            route = %route_path,
            typed = descriptor.is_some(),
            "discovered route"
        );

        entries.push(RouteTableEntry {
            route_path,
            descriptor: descriptor.as_deref().map(|path| relative_to(root, path)),
            source_file: relative_to(root, &page_file),
        });
    }

    Ok(RouteTable { entries })
}

fn is_reserved_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    is_reserved_dir_name(&name)
}

fn is_reserved_dir_name(name: &str) -> bool {
    if name.starts_with(PARALLEL_ROUTE_MARKER) {
        return true;
    }
    INTERCEPTED_ROUTE_MARKERS
        .iter()
        .any(|marker| name.len() > marker.len() && name.starts_with(marker))
}

fn find_page_file(dir: &Path, page_extensions: &[String]) -> Option<PathBuf> {
    page_extensions
        .iter()
        .map(|ext| dir.join(format!("page.{ext}")))
        .find(|candidate| candidate.is_file())
}

fn derive_route_path(root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    let mut parts: Vec<String> = Vec::new();

    for component in relative.components() {
        let name = component.as_os_str().to_string_lossy();
        if is_group_segment(&name) {
            continue;
        }
        parts.push(unescape_segment(&name));
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

fn is_group_segment(name: &str) -> bool {
    name.len() > 2
        && name.starts_with('(')
        && name.ends_with(')')
        && !name[1..name.len() - 1].contains(|c| c == '(' || c == ')')
}

fn unescape_segment(name: &str) -> String {
    match name.strip_prefix(UNDERSCORE_ESCAPE) {
        Some(rest) => format!("_{rest}"),
        None => name.to_string(),
    }
}

fn relative_to(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
