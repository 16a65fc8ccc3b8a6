//! One interactive search-and-download session
//!
//! Runs strictly forward: query, search, pick a game, fetch its detail,
//! pick a playable file, fetch it and store it. Fatal errors are returned to
//! the caller; decode and storage failures are reported on the terminal and
//! end the session normally.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::disambiguator::{LinkChoice, choose_link};
use crate::error::{IfdbError, Result};
use crate::provider::{DetailProvider, FileFetcher, SearchProvider};
use crate::resolver::select_candidate;
use crate::store::Store;
use crate::terminal::Terminal;
use crate::types::{DownloadLink, GameDetail};
use crate::url::suggested_file_name;

const WELCOME: &str = "WELCOME TO IFDB-DL! Download your favorite IF games here! Type in your search or Ctrl-C to exit.";

/// Where the search term comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuerySource {
    /// Ask on the terminal after a welcome banner
    #[default]
    Prompt,
    /// Use a term given up front (e.g., a command-line argument)
    Given(String),
}

/// Options of one session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub query: QuerySource,
    /// Directory suggested at the path prompt; `None` requires an explicit path
    pub default_dir: Option<PathBuf>,
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Saved { path: PathBuf, bytes: usize },
    NoResults,
    NoDownloadLinks,
    Declined,
    StoreFailed { path: PathBuf },
}

/// Session controller over a catalog and a store
pub struct Session<'a, C, S> {
    catalog: &'a C,
    store: &'a S,
    config: SessionConfig,
}

impl<'a, C, S> Session<'a, C, S>
where
    C: SearchProvider + DetailProvider + FileFetcher,
    S: Store,
{
    pub fn new(catalog: &'a C, store: &'a S, config: SessionConfig) -> Self {
        Self {
            catalog,
            store,
            config,
        }
    }

    /// Run the session to a terminal state
    ///
    /// # Errors
    /// Only fatal errors: transport failures, non-success statuses, and a
    /// closed or broken terminal.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
    ) -> Result<SessionOutcome> {
        let query = self.read_query(terminal)?;
        info!(query = %query, "searching");

        let candidates = recover(terminal, self.catalog.search(&query).await, Vec::new)?;
        if candidates.is_empty() {
            terminal.say("No search results found.")?;
            return Ok(SessionOutcome::NoResults);
        }

        let candidate = select_candidate(terminal, &candidates)?;
        info!(tuid = %candidate.tuid, title = %candidate.title, "selected game");

        let detail = recover(
            terminal,
            self.catalog.game_detail(&candidate.tuid).await,
            GameDetail::default,
        )?;
        let links = detail.game_links();

        let link = match choose_link(terminal, &links)? {
            LinkChoice::NoLinks => return Ok(SessionOutcome::NoDownloadLinks),
            LinkChoice::Declined => return Ok(SessionOutcome::Declined),
            LinkChoice::Chosen(link) => link,
        };

        let path = self.read_destination(terminal, link)?;
        let bytes = self.catalog.fetch_bytes(&link.url).await?;

        match self.store.save(&bytes, &path).await {
            Ok(()) => {
                terminal.say(&format!("Saved {} bytes to {}", bytes.len(), path.display()))?;
                Ok(SessionOutcome::Saved {
                    path,
                    bytes: bytes.len(),
                })
            }
            Err(error) if !error.is_fatal() => {
                debug!(%error, "store failed");
                terminal.say("Failed to download file: do you have enough storage?")?;
                terminal.say(&format!("({})", error))?;
                Ok(SessionOutcome::StoreFailed { path })
            }
            Err(error) => Err(error),
        }
    }

    fn read_query<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> Result<String> {
        if let QuerySource::Given(query) = &self.config.query
            && !query.trim().is_empty()
        {
            return Ok(query.trim().to_string());
        }

        terminal.say(WELCOME)?;
        let mut query = terminal.prompt("Search: ")?;
        while query.trim().is_empty() {
            query = terminal.prompt("Please enter a search term: ")?;
        }
        Ok(query.trim().to_string())
    }

    fn read_destination<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
        link: &DownloadLink,
    ) -> Result<PathBuf> {
        let default = self.default_path(link);

        let question = match &default {
            Some(path) => format!("File path? (default: '{}') ", path.display()),
            None => "File path? ".to_string(),
        };

        let mut answer = terminal.prompt(&question)?;
        loop {
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
            if let Some(path) = &default {
                return Ok(path.clone());
            }
            answer = terminal.prompt("Please enter a file path: ")?;
        }
    }

    fn default_path(&self, link: &DownloadLink) -> Option<PathBuf> {
        let dir: &Path = self.config.default_dir.as_deref()?;
        let name = suggested_file_name(link)?;
        Some(dir.join(name))
    }
}

/// Report a decode failure and fall back to an empty value
fn recover<T, R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    result: Result<T>,
    fallback: impl FnOnce() -> T,
) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(error @ IfdbError::DecodeError(_)) => {
            debug!(%error, "continuing with empty result");
            terminal.say(&format!("error: {}", error))?;
            Ok(fallback())
        }
        Err(error) => Err(error),
    }
}
