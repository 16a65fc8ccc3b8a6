//! Command-line arguments for `ifdb-dl`

use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use ifdb_core::{ClientConfig, QuerySource, SessionConfig, url::DEFAULT_BASE_URL};

use crate::help::SEARCH_SYNTAX;

/// Download your favorite IFDB games through the terminal!
///
/// This is an interactive program: run it without arguments to be asked for
/// a search, or pass the search directly.
#[derive(Debug, Parser)]
#[command(
    name = "ifdb-dl",
    version,
    after_help = SEARCH_SYNTAX,
    after_long_help = SEARCH_SYNTAX
)]
pub struct Cli {
    /// Search term, passed to IFDB verbatim (`help` prints this help)
    ///
    /// A leading `-word` (prohibited word) is accepted as the query unless
    /// every letter is a known short flag; use `--` to force it.
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Directory suggested as the default download location
    #[arg(short, long, env = "IFDB_DL_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Never suggest a default download path; an explicit path is required
    #[arg(long)]
    pub no_default_path: bool,

    /// Catalog root URL
    #[arg(long, env = "IFDB_BASE_URL", default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// `ifdb-dl help` is a help request, not a search for "help"
    pub fn wants_help(&self) -> bool {
        self.query.as_deref().map(str::trim) == Some("help")
    }

    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_long_help()
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            ..ClientConfig::default()
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        let query = match &self.query {
            Some(query) => QuerySource::Given(query.clone()),
            None => QuerySource::Prompt,
        };

        let default_dir = if self.no_default_path {
            None
        } else {
            Some(self.output_dir.clone().unwrap_or_else(|| PathBuf::from(".")))
        };

        SessionConfig { query, default_dir }
    }
}
