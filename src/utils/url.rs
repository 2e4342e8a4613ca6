// src/utils/url.rs

//! URL normalization for extracted hrefs.

/// Turn a root-relative href into an absolute URL under `origin`.
///
/// Only hrefs starting with `/` are rewritten; anything else is returned
/// unchanged.
///
/// # Examples
/// ```
/// use listing_watcher::utils::url::normalize;
///
/// assert_eq!(
///     normalize("https://www.idx.co.id", "/listing/b"),
///     "https://www.idx.co.id/listing/b"
/// );
/// ```
pub fn normalize(origin: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}

/// Whether `haystack` contains any of the lowercase `needles`, ignoring case.
pub fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}
