//! JSON parsers for IFDB responses
//!
//! Contains modules for decoding the different endpoint payloads.

pub mod game;
pub mod search;

pub use game::parse_game_detail;
pub use search::parse_search_results;
