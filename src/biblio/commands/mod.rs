//! # Command Layer
//!
//! One module per catalog operation. Commands hold the business logic: they
//! validate, talk to a [`CatalogStore`](crate::store::CatalogStore), and shape
//! results into [`BookView`]s. They never print and never exit.

use crate::error::{BiblioError, Result};
use crate::model::BookView;

pub mod count;
pub mod create;
pub mod get;
pub mod helpers;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books read or written by the command, as public views.
    pub books: Vec<BookView>,
    /// Catalog size, for commands that report it.
    pub total: Option<usize>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<BookView>) -> Self {
        self.books = books;
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    /// The single book a lookup or create produced.
    pub fn into_book(self) -> Result<BookView> {
        self.books
            .into_iter()
            .next()
            .ok_or_else(|| BiblioError::Store("command produced no book".to_string()))
    }
}
