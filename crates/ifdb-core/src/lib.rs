//! IFDB Download Client Core Library
//!
//! Search the Interactive Fiction Database, pick a game, pick one of its
//! playable files and save it locally, all from a line-oriented terminal.
//!
//! # Overview
//!
//! This crate provides:
//! - An HTTP client for the IFDB JSON API and for download links
//! - JSON parsers for search results and game detail records
//! - The interactive pieces of a session: result pager, selection resolver
//!   and download chooser
//! - A [`Session`] controller that runs one search-to-file flow over any
//!   [`Terminal`]
//!
//! # Example
//!
//! ```no_run
//! use ifdb_core::{FsStore, IfdbClient, Result, Session, SessionConfig, Terminal};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let client = IfdbClient::new()?;
//!     let mut terminal = Terminal::stdio();
//!
//!     let outcome = Session::new(&client, &FsStore, SessionConfig::default())
//!         .run(&mut terminal)
//!         .await?;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Transport failures and a closed terminal are fatal and are returned from
//! [`Session::run`]. Malformed responses and failed writes are reported on
//! the terminal and end the session normally; see [`IfdbError::is_fatal`].

mod client;
pub mod disambiguator;
mod error;
pub mod pager;
pub mod parser;
pub mod provider;
pub mod resolver;
mod session;
mod store;
mod terminal;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, IfdbClient};

// Re-export error types
pub use error::{IfdbError, Result};

// Re-export parser functions
pub use parser::{parse_game_detail, parse_search_results};

// Re-export collaborator traits
pub use provider::{DetailProvider, FileFetcher, SearchProvider};

// Re-export session API
pub use session::{QuerySource, Session, SessionConfig, SessionOutcome};
pub use store::{FsStore, Store};
pub use terminal::Terminal;

// Re-export data types
pub use types::{
    Candidate, DownloadLink, Downloads, GameDetail, IfdbSection, SearchResponse, filter_game_links,
};
