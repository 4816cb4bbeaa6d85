//! # Biblio CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring (config, logging, store) and dispatch
//! - `cli/render.rs`: terminal output
//! - `cli/demo.rs`: the scripted walkthrough
//!
//! Everything from `biblio::api` inward is UI agnostic. See the library docs
//! for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
