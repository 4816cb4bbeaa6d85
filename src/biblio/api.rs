//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every catalog operation, whatever the client: the CLI, the
//! simulated REST wrapper in [`crate::rest`], or a test.
//!
//! The facade:
//! - **Owns** its store. There is no process-global catalog; each
//!   `BiblioApi` is its own world, built by whoever composes the app.
//! - **Dispatches** to the matching command function.
//! - **Normalizes inputs** (a year given as text or as a number).
//! - **Returns structured types** (`Result<CmdResult>`), never strings.
//!
//! Business rules live in `commands/` and `validation.rs`, not here.
//!
//! ## Current year
//!
//! Publication years may not lie in the future. By default the bound is the
//! local calendar year at call time; [`BiblioApi::with_current_year`] pins it.

use crate::commands;
use crate::error::Result;
use crate::model::BookId;
use crate::store::CatalogStore;
use crate::validation::{self, YearInput};

/// The catalog service, generic over its storage backend.
pub struct BiblioApi<S: CatalogStore> {
    store: S,
    pinned_year: Option<i32>,
}

impl<S: CatalogStore> BiblioApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            pinned_year: None,
        }
    }

    /// Use a fixed year as "now" for publication year checks.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.pinned_year = Some(year);
        self
    }

    fn current_year(&self) -> i32 {
        self.pinned_year.unwrap_or_else(validation::current_year)
    }

    /// Look up one book. A missing id is rejected as invalid input.
    pub fn get_book(&self, id: Option<BookId>) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Validate and store a new book.
    ///
    /// The year may be raw text (`"1967"`) or a parsed number (`1967`); either
    /// may be absent.
    pub fn create_book<'a>(
        &mut self,
        title: Option<&str>,
        author: Option<&str>,
        year: impl Into<YearInput<'a>>,
    ) -> Result<commands::CmdResult> {
        let current_year = self.current_year();
        commands::create::run(
            &mut self.store,
            title,
            author,
            year.into(),
            current_year,
        )
    }

    pub fn count_books(&self) -> Result<commands::CmdResult> {
        commands::count::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
