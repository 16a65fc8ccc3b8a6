//! Core data types for the IFDB client
//!
//! Mirrors the JSON documents returned by the IFDB `search?json` and
//! `viewgame?json` endpoints. Missing fields decode to their defaults so a
//! sparse catalog entry never fails the whole response.

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One search result from the IFDB catalog
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Candidate {
    /// Opaque unique identifier (e.g., "0dbnusxunq7fw5ro")
    pub tuid: String,

    /// Game title
    pub title: String,

    /// Authoring system label (e.g., "Inform 6", "TADS 3")
    pub devsys: String,

    /// Average star rating, 0.0 to 5.0
    #[serde(deserialize_with = "null_as_default")]
    pub star_rating: f32,

    /// Number of member ratings
    #[serde(deserialize_with = "null_as_default")]
    pub num_ratings: u32,
}

/// Envelope of a search response
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub games: Vec<Candidate>,
}

/// One downloadable resource attached to a game
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadLink {
    /// Absolute URL of the resource
    pub url: String,

    /// Display title (often the file name)
    pub title: String,

    /// Free-text description
    pub desc: String,

    /// Format label (e.g., "Z-Machine 5", "PDF")
    pub format: String,

    /// True when the link is the playable game file itself
    pub is_game: bool,
}

/// Detail record for one game
///
/// Only the download links are modelled; the rest of the `viewgame`
/// document is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct GameDetail {
    pub ifdb: IfdbSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct IfdbSection {
    pub downloads: Downloads,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Downloads {
    pub links: Vec<DownloadLink>,
}

impl GameDetail {
    /// All download links in catalog order
    pub fn links(&self) -> &[DownloadLink] {
        &self.ifdb.downloads.links
    }

    /// Links that point at a playable game file, catalog order preserved
    pub fn game_links(&self) -> Vec<DownloadLink> {
        filter_game_links(self.links())
    }
}

/// Keeps only game-flagged links without touching the source slice
pub fn filter_game_links(links: &[DownloadLink]) -> Vec<DownloadLink> {
    links.iter().filter(|link| link.is_game).cloned().collect()
}
