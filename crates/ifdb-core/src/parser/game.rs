//! Game detail parser for IFDB
//!
//! Decodes the `viewgame?json` payload. Only the download section is kept.

use crate::error::{IfdbError, Result};
use crate::types::GameDetail;

/// Parses a game detail response body
///
/// # Errors
/// Returns `DecodeError` if the body is not a JSON object of the expected shape
pub fn parse_game_detail(body: &str) -> Result<GameDetail> {
    serde_json::from_str(body).map_err(|e| IfdbError::DecodeError(e.to_string()))
}
