//! Command-line entry point: parse flags, load config, start logging, then run
//! either the interactive TUI or a one-shot printed search.

use crate::config::{self, Config};
use crate::search::{HttpClient, HttpFetch};
use crate::tui::{terminal, App};
use crate::view::{SearchState, SearchView};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// hnsearch - search Hacker News from the terminal
#[derive(Debug, Parser)]
#[command(name = "hnsearch")]
#[command(version)]
#[command(about = "Search Hacker News from the terminal", long_about = None)]
pub struct Cli {
    /// Initial search query
    pub query: Option<String>,

    /// Print results to stdout and exit instead of starting the TUI
    #[arg(long, requires = "query")]
    pub print: bool,

    /// Override the search endpoint prefix (requests go to `<API>query=<QUERY>`)
    #[arg(long, value_name = "API")]
    pub api: Option<String>,

    /// Write debug logs to file
    #[arg(long)]
    pub debug: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Fold command-line overrides into the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(api) = &self.api {
            config.api_base = api.clone();
        }
        if self.debug {
            config.debug = true;
        }
    }
}

/// Parse arguments and run
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_or_create_config_at(path)?,
        None => config::load_or_create_config()?,
    };
    cli.apply_overrides(&mut config);

    let _log_guard = crate::logging::init(&config)?;

    let client = HttpClient::new(Duration::from_secs(config.request_timeout_secs))
        .context("Failed to build HTTP client")?;
    let fetcher: Arc<dyn HttpFetch> = Arc::new(client);
    let query = cli.query.clone().unwrap_or_default();

    tracing::info!(api = %config.api_base, query = %query, print = cli.print, "starting hnsearch");

    let mut view = SearchView::new(fetcher, config.api_base.clone(), query);

    if cli.print {
        let stdout = std::io::stdout();
        return print_results(&mut view, &mut stdout.lock()).await;
    }

    terminal::run(App::new(view), Duration::from_millis(config.tick_rate_ms)).await
}

/// Wait for the current search to settle and write one `title <url>` line per hit
pub async fn print_results(view: &mut SearchView, out: &mut impl Write) -> Result<()> {
    loop {
        match view.state() {
            SearchState::Loaded(items) => {
                for item in items {
                    writeln!(out, "{} <{}>", item.title, item.url)?;
                }
                return Ok(());
            }
            SearchState::Error(message) => {
                bail!("search for {} failed: {}", view.query(), message)
            }
            SearchState::Loading => {}
        }
        view.next_update().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_requires_query() {
        assert!(Cli::try_parse_from(["hnsearch", "--print"]).is_err());
        assert!(Cli::try_parse_from(["hnsearch", "--print", "rust"]).is_ok());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli =
            Cli::try_parse_from(["hnsearch", "--api", "http://localhost/?", "--debug"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.api_base, "http://localhost/?");
        assert!(config.debug);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cli = Cli::try_parse_from(["hnsearch"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }
}
