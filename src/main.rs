// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Merge defaults, the optional config file and the flags into one config
// 3. Run the generator against the real file system
// 4. Print a summary (or a JSON report)
// 5. Exit with proper code (0 = success, 1 = generation failed, 2 = bad config)
//
// The generator never exits the process itself. It returns a SitemapError,
// and this file is the only place that turns errors into messages and
// exit codes.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - defaults, config file, validation
mod error;    // src/error.rs - SitemapError
mod sitemap;  // src/sitemap/ - keyword loading, URL building, XML output
mod storage;  // src/storage/ - file system access

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::SitemapConfig;
use error::SitemapError;
use sitemap::GenerationReport;
use storage::OsFileSystem;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    // Defaults, then the --config file, then flags; validated before anything else
    let mut config = SitemapConfig::resolve(cli.config.as_deref(), cli.overrides())?;

    // Absolute paths make every message point at exactly one place on disk
    config.output_dir = std::path::absolute(&config.output_dir).with_context(|| {
        format!(
            "cannot resolve output directory '{}'",
            config.output_dir.display()
        )
    })?;
    tracing::debug!(?config, "resolved configuration");

    // Keep stdout clean for --json so the report can be piped into other tools
    if !cli.json {
        println!("🔍 Reading keywords from '{}'", config.input_file().display());
    }

    // The whole run happens here; any SitemapError bubbles up to main()
    let report = sitemap::generate(&OsFileSystem, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    println!(
        "📄 {} keyword(s) -> {} sitemap file(s)",
        report.keyword_count,
        report.chunks.len()
    );
    for chunk in &report.chunks {
        println!("   {:<24} {:>6} URL(s)", chunk.file_name, chunk.url_count);
    }
    println!("   {}", report.index_file.display());
    println!();
    println!(
        "✅ Sitemap(s) successfully created in '{}'.",
        report.output_dir.display()
    );
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<SitemapError>() {
        Some(e) if e.is_config_error() => 2,
        _ => 1,
    }
}

// RUST_LOG wins; otherwise warnings only, or debug with --verbose.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
