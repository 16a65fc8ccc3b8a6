//! Remote collaborators used by a session
//!
//! The session only talks to these traits, so the HTTP client can be swapped
//! for in-memory fakes in tests.

use std::future::Future;

use crate::error::Result;
use crate::types::{Candidate, GameDetail};

/// Returns ranked candidates for a free-text query
pub trait SearchProvider {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Candidate>>>;
}

/// Returns the detail record for one candidate identifier
pub trait DetailProvider {
    fn game_detail(&self, tuid: &str) -> impl Future<Output = Result<GameDetail>>;
}

/// Downloads the raw bytes behind a URL
pub trait FileFetcher {
    fn fetch_bytes(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>>;
}
