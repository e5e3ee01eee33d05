// src/sitemap/generate.rs
// =============================================================================
// The whole run, start to finish:
//
//   pre-flight -> load keywords -> bucket into chunks -> write chunks
//              -> write index -> report
//
// Any failure stops the run right there and comes back as a SitemapError.
// Chunk files that were already written stay on disk; there is no rollback.
// The index is written last, only after every chunk made it.
// =============================================================================

use super::chunks::ChunkSet;
use super::keywords::parse_keywords;
use super::xml::SitemapIndex;
use crate::config::SitemapConfig;
use crate::error::{Result, SitemapError};
use crate::storage::{AccessMode, AccessStatus, FileSystem};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a successful run produced. Printed as JSON with --json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub keyword_count: usize,
    pub chunks: Vec<ChunkSummary>,
    pub index_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkSummary {
    pub index: usize,
    pub file_name: String,
    pub path: PathBuf,
    /// Public URL of this chunk, as listed in the index
    pub url: String,
    pub url_count: usize,
}

/// Runs the generator against `fs` using `config`.
pub fn generate<F: FileSystem + ?Sized>(fs: &F, config: &SitemapConfig) -> Result<GenerationReport> {
    // Fail before reading anything if we couldn't write the results anyway
    let input = config.input_file();
    preflight(fs, &config.output_dir, &input)?;

    // Errors out if the file holds no usable keyword
    let keywords = load_keywords(fs, &input)?;
    tracing::debug!(count = keywords.len(), input = %input.display(), "loaded keywords");

    // Keyword order decides chunk membership, so this is fully deterministic
    let chunks = ChunkSet::build(&keywords, &config.base_url, config.max_links_per_sitemap);

    // Write chunk files in ascending order; stop at the first failed write
    let mut summaries = Vec::with_capacity(chunks.len());
    for (index, urls) in chunks.iter() {
        let file_name = config.chunk_file_name(index);
        let path = config.output_dir.join(&file_name);

        write_file(fs, &path, &urls.finish())?;
        tracing::debug!(path = %path.display(), urls = urls.len(), "wrote chunk");

        summaries.push(ChunkSummary {
            index,
            url: format!("{}{}", config.domain_url, file_name),
            file_name,
            path,
            url_count: urls.len(),
        });
    }

    // The index goes last, so it only ever lists chunks that were written
    let mut index = SitemapIndex::new();
    for chunk in &summaries {
        index.push(&chunk.url);
    }
    let index_file = config.index_path();
    write_file(fs, &index_file, &index.finish())?;
    tracing::debug!(path = %index_file.display(), chunks = summaries.len(), "wrote sitemap index");

    Ok(GenerationReport {
        output_dir: config.output_dir.clone(),
        keyword_count: keywords.len(),
        chunks: summaries,
        index_file,
    })
}

/// Checks the output directory and the input file before anything is read.
pub fn preflight<F: FileSystem + ?Sized>(fs: &F, output_dir: &Path, input: &Path) -> Result<()> {
    match fs.access(output_dir, AccessMode::WriteDir) {
        AccessStatus::Ok => {}
        AccessStatus::PermissionDenied => {
            return Err(SitemapError::OutputDirNotWritable(output_dir.to_path_buf()))
        }
        AccessStatus::NotFound => {
            return Err(SitemapError::OutputDirMissing(output_dir.to_path_buf()))
        }
    }

    let not_found = || SitemapError::InputNotFound {
        path: input.to_path_buf(),
        dir: output_dir.to_path_buf(),
    };

    if !fs.exists(input) {
        return Err(not_found());
    }

    match fs.access(input, AccessMode::ReadFile) {
        AccessStatus::Ok => Ok(()),
        AccessStatus::NotFound => Err(not_found()),
        AccessStatus::PermissionDenied => Err(SitemapError::InputUnreadable {
            path: input.to_path_buf(),
            source: None,
        }),
    }
}

/// Reads the input file and returns its keywords; an empty list is an error.
pub fn load_keywords<F: FileSystem + ?Sized>(fs: &F, input: &Path) -> Result<Vec<String>> {
    let bytes = fs.read(input).map_err(|e| SitemapError::InputUnreadable {
        path: input.to_path_buf(),
        source: Some(e),
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let keywords = parse_keywords(&text);

    if keywords.is_empty() {
        return Err(SitemapError::NoKeywords(input.to_path_buf()));
    }
    Ok(keywords)
}

fn write_file<F: FileSystem + ?Sized>(fs: &F, path: &Path, contents: &str) -> Result<()> {
    fs.write(path, contents.as_bytes())
        .map_err(|source| SitemapError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}
