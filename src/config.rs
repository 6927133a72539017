use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "typesafe-url.toml";

pub const DEFAULT_SRC_PATH: &str = "./src";
pub const DEFAULT_OUTPUT_PATH: &str = "./_typesafe-url_.d.ts";
pub const DEFAULT_PAGE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];
pub const DEFAULT_FILENAME: &str = "routeType";

/// Raw configuration as read from `typesafe-url.toml`. Every field is
/// optional so each key can fall back independently.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub watch: Option<bool>,
    pub src_path: Option<String>,
    pub output_path: Option<String>,
    pub page_extensions: Option<PageExtensions>,
    pub filename: Option<String>,
}

/// Page extensions accept either a list or a comma-separated string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageExtensions {
    List(Vec<String>),
    Csv(String),
}

impl PageExtensions {
    pub fn into_list(self) -> Vec<String> {
        match self {
            PageExtensions::List(list) => list,
            PageExtensions::Csv(csv) => split_extensions(&csv),
        }
    }
}

/// Fully-resolved configuration with every option pinned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub watch: bool,
    pub src_path: String,
    pub output_path: String,
    pub page_extensions: Vec<String>,
    pub filename: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            watch: false,
            src_path: DEFAULT_SRC_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            page_extensions: DEFAULT_PAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

/// CLI-side overrides. `page_extensions` arrives as the raw comma string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub watch: Option<bool>,
    pub src_path: Option<String>,
    pub output_path: Option<String>,
    pub page_extensions: Option<String>,
    pub filename: Option<String>,
}

/// Merges CLI flags over config-file values over built-in defaults,
/// key by key.
pub fn resolve_config(cli: CliOverrides, file: Option<Config>) -> ResolvedConfig {
    let file = file.unwrap_or_default();
    let defaults = ResolvedConfig::default();

    ResolvedConfig {
        watch: cli.watch.or(file.watch).unwrap_or(defaults.watch),
        src_path: cli.src_path.or(file.src_path).unwrap_or(defaults.src_path),
        output_path: cli
            .output_path
            .or(file.output_path)
            .unwrap_or(defaults.output_path),
        filename: cli.filename.or(file.filename).unwrap_or(defaults.filename),
        page_extensions: cli
            .page_extensions
            .map(|csv| split_extensions(&csv))
            .or_else(|| file.page_extensions.map(PageExtensions::into_list))
            .unwrap_or(defaults.page_extensions),
    }
}

pub fn split_extensions(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(|ext| ext.trim().to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Loads `typesafe-url.toml` from `dir` when present.
pub fn load_config_file(dir: &Path) -> ConfigResult<Option<Config>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
    Ok(Some(config))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
