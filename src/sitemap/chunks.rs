// src/sitemap/chunks.rs
// =============================================================================
// Splitting keywords into chunk files.
//
// Keyword #1..=max goes to chunk 1, the next max to chunk 2, and so on.
// A chunk only exists once a keyword is assigned to it, so there are never
// empty chunk files, and chunk numbers are always 1, 2, 3, ... with no gaps.
//
// Rust concepts:
// - BTreeMap: Keeps chunks sorted by index, so iteration is ascending
// - entry().or_default(): Create a value the first time a key is seen
// =============================================================================

use super::slug::keyword_url;
use super::xml::UrlSet;
use std::collections::BTreeMap;

/// The 1-based chunk a keyword at 1-based `position` belongs to.
pub fn chunk_index(position: usize, max_links_per_sitemap: usize) -> usize {
    position.div_ceil(max_links_per_sitemap)
}

#[derive(Debug, Default)]
pub struct ChunkSet {
    chunks: BTreeMap<usize, UrlSet>,
}

impl ChunkSet {
    /// Builds every chunk's <urlset> from the keyword list, in order.
    pub fn build(keywords: &[String], base_url: &str, max_links_per_sitemap: usize) -> Self {
        let mut set = Self::default();
        for (i, keyword) in keywords.iter().enumerate() {
            let index = chunk_index(i + 1, max_links_per_sitemap);
            set.chunks
                .entry(index)
                .or_default()
                .push(&keyword_url(base_url, keyword));
        }
        set
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Chunks in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &UrlSet)> {
        self.chunks.iter().map(|(index, urls)| (*index, urls))
    }
}
