//! URL helper functions for IFDB
//!
//! Builds the JSON search and game-detail URLs, and derives a local file
//! name from a download link.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::DownloadLink;

/// Public IFDB instance
pub const DEFAULT_BASE_URL: &str = "https://ifdb.org";

/// Characters that are unsafe in a file name on common file systems
static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]+"#).expect("valid regex"));

/// Builds the JSON search URL for a free-text query
///
/// The query is passed through verbatim (catalog search syntax such as
/// `author:` or `+word` included) and only percent-encoded.
///
/// # Example
/// ```
/// use ifdb_core::url::build_search_url;
/// let url = build_search_url("https://ifdb.org", "zork");
/// assert_eq!(url, "https://ifdb.org/search?json&searchfor=zork");
/// ```
pub fn build_search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/search?json&searchfor={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

/// Builds the JSON detail URL for one game
///
/// # Example
/// ```
/// use ifdb_core::url::build_game_url;
/// let url = build_game_url("https://ifdb.org", "0dbnusxunq7fw5ro");
/// assert_eq!(url, "https://ifdb.org/viewgame?json&id=0dbnusxunq7fw5ro");
/// ```
pub fn build_game_url(base_url: &str, tuid: &str) -> String {
    format!(
        "{}/viewgame?json&id={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(tuid)
    )
}

/// Suggests a local file name for a download link
///
/// Uses the last path segment of the link URL when it looks like a file,
/// otherwise the link title. Returns `None` when neither yields a usable
/// name.
pub fn suggested_file_name(link: &DownloadLink) -> Option<String> {
    file_name_from_url(&link.url).or_else(|| sanitize_file_name(&link.title))
}

/// Extracts and decodes the last path segment of a URL
fn file_name_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let path = path.split_once("://").map(|(_, rest)| rest).unwrap_or(path);

    // Host only, no path
    let (_, path) = path.split_once('/')?;
    let segment = path.rsplit('/').next()?;

    let decoded = urlencoding::decode(segment).ok()?;
    sanitize_file_name(&decoded)
}

/// Replaces unsafe characters and rejects empty or dot-only names
fn sanitize_file_name(name: &str) -> Option<String> {
    let cleaned = UNSAFE_FILE_CHARS.replace_all(name.trim(), "_");
    let cleaned = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());

    if cleaned.is_empty() {
        return None;
    }

    Some(cleaned.to_string())
}
