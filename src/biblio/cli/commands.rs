//! # CLI Layer
//!
//! This module is **one possible client** for biblio, not the application itself.
//! It is the only place that knows about stdout/stderr, exit codes, argument
//! parsing and logging setup.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Loads configuration, installs logging, builds the API
//! - `handle_*()`: Per-command handlers that call the API and print results
//!
//! Every invocation starts from a fresh in-memory catalog; nothing written by
//! `add` outlives the process.

use super::demo;
use super::render::{print_messages, render_book, render_book_list, render_error};
use super::setup::{Cli, Commands};
use biblio::api::BiblioApi;
use biblio::config::BiblioConfig;
use biblio::error::{BiblioError, Result};
use biblio::model::BookId;
use biblio::store::memory::InMemoryStore;
use clap::Parser;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: BiblioApi<InMemoryStore>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Get { id }) => handle_get(&ctx, &id),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add {
            title,
            author,
            year,
        }) => handle_add(&mut ctx, &title, &author, &year),
        Some(Commands::Count) => handle_count(&ctx),
        // The walkthrough always uses its own fresh sample catalog.
        Some(Commands::Demo) => demo::run(),
    }
}

/// Catalog errors print with their HTTP-equivalent status; anything else
/// (config, IO) as a plain error line.
pub fn report_error(err: &BiblioError) {
    match err {
        BiblioError::InvalidInput(_) | BiblioError::NotFound(_) => {
            eprint!("{}", render_error(err))
        }
        _ => eprintln!("Error: {}", err),
    }
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "biblio", "biblio")
            .map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn load_config(cli: &Cli) -> Result<BiblioConfig> {
    match config_dir(cli) {
        Some(dir) => BiblioConfig::load(dir),
        None => Ok(BiblioConfig::default()),
    }
}

fn init_tracing(config: &BiblioConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("biblio=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = load_config(cli)?;
    init_tracing(&config, cli.verbose);
    debug!(?config, "configuration loaded");

    let store = if config.seed_samples {
        InMemoryStore::seeded()
    } else {
        InMemoryStore::new()
    };

    Ok(AppContext {
        api: BiblioApi::new(store),
        json: cli.json,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Empty input means "no id"; anything else must be a whole number.
fn parse_id(raw: &str) -> Result<Option<BookId>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| BiblioError::invalid(format!("id must be a whole number, got '{}'", raw)))
}

fn handle_get(ctx: &AppContext, raw_id: &str) -> Result<()> {
    let id = parse_id(raw_id)?;
    let book = ctx.api.get_book(id)?.into_book()?;

    if ctx.json {
        return print_json(&book);
    }
    print!("{}", render_book(200, "Book found:", &book));
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;

    if ctx.json {
        return print_json(&result.books);
    }
    print!("{}", render_book_list(&result.books));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: &str, author: &str, year: &str) -> Result<()> {
    let result = ctx.api.create_book(Some(title), Some(author), year)?;
    let messages = result.messages.clone();
    let book = result.into_book()?;

    if ctx.json {
        return print_json(&book);
    }
    print!("{}", render_book(201, "Book created:", &book));
    print_messages(&messages);
    Ok(())
}

#[derive(Serialize)]
struct Stats {
    total: usize,
}

fn handle_count(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.count_books()?;

    if ctx.json {
        return print_json(&Stats {
            total: result.total.unwrap_or_default(),
        });
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids() {
        assert_eq!(parse_id("42").unwrap(), Some(42));
        assert_eq!(parse_id(" -5 ").unwrap(), Some(-5));
        assert_eq!(parse_id("  ").unwrap(), None);
    }

    #[test]
    fn non_numeric_id_is_invalid_input() {
        let err = parse_id("abc").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
