use std::fs;
use std::path::Path;

use crate::discover::{RouteTable, RouteTableEntry};

use super::{GenerateError, GenerateResult};

pub const GENERATED_HEADER: &str =
    "// This file is generated by typesafe-url. Do not edit it manually.";

const DECLARED_MODULE: &str = "@@@typesafe-url";
const DESCRIPTOR_EXPORT: &str = "RouteType";

const HELPER_PRELUDE: &str = "type StaticRoute = {\n  routeParams: undefined;\n  searchParams: undefined;\n};\ntype InferRoute<T> = T;\n";

/// Renders the route table as declaration-file text: header, one aliased
/// import per typed route, the shared helper types, then the two
/// aggregate interfaces. Deterministic for a given table.
#[tracing::instrument(level = "debug", skip(table), fields(routes = table.len() as u64, output = %output_path.display()))]
pub fn render_declaration_file(table: &RouteTable, scan_root: &Path, output_path: &Path) -> String {
    let output_dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let typed: Vec<&RouteTableEntry> = table.typed().collect();

    let mut imports = String::new();
    let mut dynamic_block = String::new();
    for (index, entry) in typed.iter().enumerate() {
        let Some(descriptor) = entry.descriptor.as_deref() else {
            continue;
        };
        let specifier = import_specifier(output_dir, &scan_root.join(descriptor));
        imports.push_str(&format!(
            "import {{ type {DESCRIPTOR_EXPORT} as Route_{index} }} from \"{specifier}\";\n"
        ));
        dynamic_block.push_str(&format!(
            "    \"{}\": InferRoute<Route_{index}>;\n",
            entry.route_path
        ));
    }

    let mut static_block = String::new();
    for entry in table.static_routes() {
        static_block.push_str(&format!("    \"{}\": StaticRoute;\n", entry.route_path));
    }

    format!(
        "{GENERATED_HEADER}\n\n{imports}\n{HELPER_PRELUDE}\ndeclare module \"{DECLARED_MODULE}\" {{\n  interface DynamicRouter {{\n{dynamic_block}  }}\n\n  interface StaticRouter {{\n{static_block}  }}\n}}\n"
    )
}

/// Writes the rendered declaration to `output_path`, creating
/// intermediate directories as needed. Full-file overwrite; rerunning
/// over an unchanged tree rewrites byte-identical content.
pub fn write_declaration_file(
    table: &RouteTable,
    scan_root: &Path,
    output_path: &Path,
) -> GenerateResult<()> {
    let contents = render_declaration_file(table, scan_root, output_path);

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(output_path, contents).map_err(|source| GenerateError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}

/// Module specifier for a descriptor file, relative to the directory the
/// declaration file lands in.
fn import_specifier(output_dir: &Path, descriptor: &Path) -> String {
    let module = descriptor.with_extension("");
    let relative =
        pathdiff::diff_paths(&module, output_dir).unwrap_or_else(|| module.clone());
    let joined = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}
