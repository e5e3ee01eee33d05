// src/config.rs
// =============================================================================
// Everything the generator needs to know, in one struct.
//
// Values come from three layers, later layers win:
// 1. Built-in defaults (the constants below)
// 2. An optional JSON config file (--config sitemap.json)
// 3. Command-line flags
//
// After merging, validate() makes sure the URLs parse, the chunk size is
// inside the sitemap protocol limit, and the file stem is a plain name.
//
// Rust concepts:
// - serde: Derive Deserialize to read the JSON config file
// - Option<T>: Every override is optional, None means "keep what we have"
// - url::Url: Real URL parsing instead of string checks
// =============================================================================

use crate::error::{Result, SitemapError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_DOMAIN_URL: &str = "https://officialadmin.bangkok.go.th/upload/";
pub const DEFAULT_BASE_URL: &str = "https://officialadmin.bangkok.go.th/upload/?video=";
pub const DEFAULT_SITEMAP_NAME: &str = "sitemap";
pub const DEFAULT_MAX_LINKS: usize = 20_000;
pub const DEFAULT_INPUT_FILE: &str = "car.txt";
pub const INDEX_FILE_NAME: &str = "sitemap-index.xml";

/// The sitemap protocol allows at most 50,000 URLs per file.
pub const PROTOCOL_MAX_LINKS: usize = 50_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapConfig {
    /// Public base under which the chunk files are served (index <loc> prefix)
    pub domain_url: String,
    /// Query-string prefix every keyword slug is appended to
    pub base_url: String,
    /// Chunk filename stem: <sitemap_name>-<N>.xml
    pub sitemap_name: String,
    pub max_links_per_sitemap: usize,
    /// Keyword file, relative to output_dir unless absolute
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            domain_url: DEFAULT_DOMAIN_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            sitemap_name: DEFAULT_SITEMAP_NAME.to_string(),
            max_links_per_sitemap: DEFAULT_MAX_LINKS,
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
        }
    }
}

impl SitemapConfig {
    /// Builds the final config: defaults, then the config file, then `overrides`.
    pub fn resolve(config_file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = config_file {
            ConfigOverrides::from_json_file(path)?.apply_to(&mut config);
        }
        overrides.apply_to(&mut config);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_http_url("base_url", &self.base_url)?;
        validate_http_url("domain_url", &self.domain_url)?;

        if !self.domain_url.ends_with('/') {
            tracing::warn!(
                domain_url = %self.domain_url,
                "domain_url has no trailing '/', chunk URLs will be glued onto the last path segment"
            );
        }

        if self.sitemap_name.trim().is_empty() {
            return Err(SitemapError::InvalidConfig(
                "sitemap_name must not be empty".to_string(),
            ));
        }
        if self.sitemap_name.contains(['/', '\\']) {
            return Err(SitemapError::InvalidConfig(format!(
                "sitemap_name '{}' must be a file name, not a path",
                self.sitemap_name
            )));
        }

        if !(1..=PROTOCOL_MAX_LINKS).contains(&self.max_links_per_sitemap) {
            return Err(SitemapError::InvalidConfig(format!(
                "max_links_per_sitemap must be between 1 and {}, got {}",
                PROTOCOL_MAX_LINKS, self.max_links_per_sitemap
            )));
        }

        Ok(())
    }

    /// Where the keyword file actually lives.
    pub fn input_file(&self) -> PathBuf {
        if self.input_path.is_absolute() {
            self.input_path.clone()
        } else {
            self.output_dir.join(&self.input_path)
        }
    }

    /// File name of chunk `index` (1-based), e.g. "sitemap-2.xml".
    pub fn chunk_file_name(&self, index: usize) -> String {
        format!("{}-{}.xml", self.sitemap_name, index)
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE_NAME)
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let parsed = Url::parse(value).map_err(|e| {
        SitemapError::InvalidConfig(format!("{} '{}' is not a valid URL: {}", field, value, e))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SitemapError::InvalidConfig(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}

/// A partial config. Used both for the JSON file and for CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub domain_url: Option<String>,
    pub base_url: Option<String>,
    pub sitemap_name: Option<String>,
    pub max_links_per_sitemap: Option<usize>,
    #[serde(alias = "local_file")]
    pub input_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn from_json_str(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SitemapError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SitemapError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_str(path, &json)
    }

    pub fn apply_to(self, config: &mut SitemapConfig) {
        if let Some(v) = self.domain_url {
            config.domain_url = v;
        }
        if let Some(v) = self.base_url {
            config.base_url = v;
        }
        if let Some(v) = self.sitemap_name {
            config.sitemap_name = v;
        }
        if let Some(v) = self.max_links_per_sitemap {
            config.max_links_per_sitemap = v;
        }
        if let Some(v) = self.input_path {
            config.input_path = v;
        }
        if let Some(v) = self.output_dir {
            config.output_dir = v;
        }
    }
}
