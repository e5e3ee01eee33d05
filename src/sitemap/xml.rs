// src/sitemap/xml.rs
// =============================================================================
// This module builds the two kinds of XML documents we write:
//
// - A <urlset> per chunk, one <url><loc>...</loc></url> line per keyword
// - A single <sitemapindex>, one <sitemap><loc>...</loc></sitemap> per chunk
//
// The documents are small and flat, so we build them as strings. Every
// <loc> value goes through quick-xml's escape() first, which handles
// & < > " and '.
//
// Rust concepts:
// - Cow<str>: escape() only allocates when something actually needs escaping
// - Builder pattern: push entries, then finish() to get the full document
// =============================================================================

use quick_xml::escape::escape;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One chunk file's <urlset> document, built up entry by entry.
#[derive(Debug, Clone)]
pub struct UrlSet {
    body: String,
    len: usize,
}

impl UrlSet {
    pub fn new() -> Self {
        let mut body = String::new();
        body.push_str(XML_DECLARATION);
        body.push('\n');
        body.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));
        Self { body, len: 0 }
    }

    /// Appends one URL. `link` is raw, it gets escaped here.
    pub fn push(&mut self, link: &str) {
        self.body.push_str("  <url><loc>");
        self.body.push_str(&escape(link));
        self.body.push_str("</loc></url>\n");
        self.len += 1;
    }

    /// Number of <url> entries so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Closes the <urlset> and returns the complete document.
    pub fn finish(&self) -> String {
        format!("{}</urlset>\n", self.body)
    }
}

impl Default for UrlSet {
    fn default() -> Self {
        Self::new()
    }
}

/// The <sitemapindex> document pointing at every chunk file.
#[derive(Debug, Clone)]
pub struct SitemapIndex {
    body: String,
}

impl SitemapIndex {
    pub fn new() -> Self {
        let mut body = String::new();
        body.push_str(XML_DECLARATION);
        body.push('\n');
        body.push_str(&format!("<sitemapindex xmlns=\"{}\">\n", SITEMAP_NAMESPACE));
        Self { body }
    }

    pub fn push(&mut self, chunk_url: &str) {
        self.body.push_str("  <sitemap><loc>");
        self.body.push_str(&escape(chunk_url));
        self.body.push_str("</loc></sitemap>\n");
    }

    pub fn finish(&self) -> String {
        format!("{}</sitemapindex>\n", self.body)
    }
}

/// Reads back every <loc> text (unescaped) from a generated document.
#[cfg(test)]
pub(crate) fn read_locs(xml: &str) -> Vec<String> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut in_loc = false;
    let mut locs = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => in_loc = e.name().as_ref() == b"loc",
            Ok(Event::Text(ref e)) if in_loc => {
                locs.push(e.unescape().unwrap().into_owned());
            }
            Ok(Event::End(_)) => in_loc = false,
            Ok(Event::Eof) => break,
            Err(e) => panic!("generated XML failed to parse: {}", e),
            _ => {}
        }
        buf.clear();
    }

    locs
}
