// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: one run = one sitemap set. Every flag is
// optional. A flag that isn't given falls back to the config file (if any)
// and then to the built-in defaults in config.rs.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates all the parsing code
// - Option<T>: An unset flag is None, so we can tell "not given" apart
//   from "given with the default value"
// =============================================================================

use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sitemap-forge",
    version = "0.1.0",
    about = "Generate a sitemap index and chunked sitemaps from a keyword list",
    long_about = "sitemap-forge reads one keyword per line, turns each keyword into a URL on a \
                  query-string endpoint, and writes sitemap-1.xml, sitemap-2.xml, ... plus a \
                  sitemap-index.xml that points at all of them."
)]
pub struct Cli {
    /// Public URL the chunk files are served from (used in sitemap-index.xml)
    #[arg(long)]
    pub domain_url: Option<String>,

    /// Prefix every keyword slug is appended to
    ///
    /// Example: https://example.com/search?q=
    #[arg(long)]
    pub base_url: Option<String>,

    /// File name stem of the chunk files: <NAME>-1.xml, <NAME>-2.xml, ...
    #[arg(long, value_name = "NAME")]
    pub sitemap_name: Option<String>,

    /// Maximum number of URLs per chunk file (1 to 50000)
    #[arg(long, value_name = "N")]
    pub max_links: Option<usize>,

    /// Keyword file, relative to --dir unless absolute (default: car.txt)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Directory the sitemap files are written to (default: current directory)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// JSON file with any of: domain_url, base_url, sitemap_name,
    /// max_links_per_sitemap, input_path (or local_file), output_dir
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of the human-readable summary
    #[arg(long)]
    pub json: bool,

    /// Show debug diagnostics on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// The config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            domain_url: self.domain_url.clone(),
            base_url: self.base_url.clone(),
            sitemap_name: self.sitemap_name.clone(),
            max_links_per_sitemap: self.max_links,
            input_path: self.input.clone(),
            output_dir: self.dir.clone(),
        }
    }
}
