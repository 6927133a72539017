use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{self, CliOverrides, ResolvedConfig};
use crate::discover::{RouteDescriptorLocator, SiblingFileLocator, discover_routes};
use crate::generate::write_declaration_file;
use crate::watch;

/// Generates the route type-declaration file for a file-based page tree.
///
/// Scans the source directory for route directories, classifies each one
/// as typed (it declares a route descriptor) or static, and writes one
/// declaration file mapping every route path to its parameter types.
#[derive(Debug, Parser)]
#[command(name = "typesafe-url", version)]
pub struct Cli {
    /// Watch the source tree and regenerate on every change
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// Path to the source directory to scan
    #[arg(long = "srcPath")]
    pub src_path: Option<String>,

    /// Path of the generated declaration file
    #[arg(long = "outputPath")]
    pub output_path: Option<String>,

    /// Comma-separated list of file extensions treated as page files
    #[arg(long = "pageExtensions")]
    pub page_extensions: Option<String>,

    /// Name of the route-descriptor file, without extension
    #[arg(long)]
    pub filename: Option<String>,
}

impl Cli {
    pub fn overrides(self) -> CliOverrides {
        CliOverrides {
            // an absent flag falls back to the config file; the flag
            // cannot assert watch=false
            watch: self.watch.then_some(true),
            src_path: self.src_path,
            output_path: self.output_path,
            page_extensions: self.page_extensions,
            filename: self.filename,
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = config::load_config_file(Path::new("."))?;
    let resolved = config::resolve_config(cli.overrides(), file_config);

    let scan_root = resolve_scan_root(Path::new(&resolved.src_path));
    let output_path = PathBuf::from(&resolved.output_path);
    let locator = SiblingFileLocator::new(resolved.filename.clone());

    regenerate(&scan_root, &resolved, &locator, &output_path)?;

    if resolved.watch {
        println!("Watching for route changes in {}...", scan_root.display());
        watch::watch_and_regenerate(&scan_root, || {
            // a failed rerun leaves the previous file untouched; keep watching
            if let Err(error) = regenerate(&scan_root, &resolved, &locator, &output_path) {
                eprintln!("regeneration failed: {error}");
            }
        })?;
    }

    Ok(())
}

fn regenerate(
    scan_root: &Path,
    resolved: &ResolvedConfig,
    locator: &dyn RouteDescriptorLocator,
    output_path: &Path,
) -> crate::Result<()> {
    let table = discover_routes(scan_root, &resolved.page_extensions, locator)?;
    write_declaration_file(&table, scan_root, output_path)?;
    println!(
        "Generated route types for {} routes -> {}",
        table.len(),
        output_path.display()
    );
    Ok(())
}

/// Scans `<srcPath>/app` when it exists, otherwise the source path
/// itself, so a page tree can also be pointed at directly.
fn resolve_scan_root(src_path: &Path) -> PathBuf {
    let app_dir = src_path.join("app");
    if app_dir.is_dir() {
        app_dir
    } else {
        src_path.to_path_buf()
    }
}
