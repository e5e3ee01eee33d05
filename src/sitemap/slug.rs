// src/sitemap/slug.rs
// =============================================================================
// Keyword -> URL.
//
// "Toyota Camry" -> "toyota-camry" -> base_url + "toyota-camry"
// "ตุ๊กตา"        -> "%E0%B8%95%E0%B8%B8..." (Thai has no case, only encoding)
//
// The result is NOT XML-escaped yet; that happens when it's written into
// a <loc> element (see xml.rs).
// =============================================================================

/// Lowercases the keyword, turns spaces into hyphens, then percent-encodes it.
///
/// Only RFC 3986 unreserved characters (A-Z a-z 0-9 - _ . ~) survive as-is.
/// Everything else is escaped byte by byte with uppercase hex.
pub fn slugify(keyword: &str) -> String {
    let slug = keyword.to_lowercase().replace(' ', "-");
    urlencoding::encode(&slug).into_owned()
}

/// The full link for one keyword.
pub fn keyword_url(base_url: &str, keyword: &str) -> String {
    format!("{}{}", base_url, slugify(keyword))
}
