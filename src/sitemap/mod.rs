// src/sitemap/mod.rs
// =============================================================================
// This module contains the sitemap generator.
//
// Submodules:
// - keywords: Reads and cleans up keyword lines
// - slug: Turns a keyword into an encoded URL
// - xml: Builds <urlset> and <sitemapindex> documents
// - chunks: Splits URLs into chunk files of a fixed maximum size
// - generate: Runs everything in order and writes the files
// =============================================================================

mod chunks;
mod generate;
mod keywords;
mod slug;
mod xml;

pub use generate::{generate, GenerationReport};
