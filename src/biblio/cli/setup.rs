use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biblio", bin_name = "biblio", version)]
#[command(about = "Book catalog with validated creates and lookups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding biblio.json
    #[arg(long, global = true, env = "BIBLIO_CONFIG_DIR", value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one book by id
    #[command(alias = "g")]
    Get {
        /// Book id (a positive whole number)
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// List every book in the catalog
    #[command(alias = "ls")]
    List,

    /// Add a new book
    #[command(alias = "a")]
    Add {
        /// Title (2-200 characters)
        title: String,

        /// Author (letters, spaces, periods, hyphens and apostrophes)
        author: String,

        /// Publication year (1000 up to the current year)
        #[arg(allow_hyphen_values = true)]
        year: String,
    },

    /// Show catalog statistics
    #[command(alias = "stats")]
    Count,

    /// Run the scripted walkthrough against a fresh sample catalog
    Demo,
}
