//! # Storage Layer
//!
//! The [`CatalogStore`] trait is the only thing the rest of biblio knows about
//! persistence. It is a plain keyed map of books with an identifier counter:
//! no validation, no business rules, no errors.
//!
//! ## Contract
//!
//! - Absence is a value (`None` / `false`), never a failure.
//! - `save` assigns the next identifier to a book that has none, then inserts
//!   or overwrites under that identifier. Identifiers are never reused.
//! - `find_all` hands out an owned snapshot. Mutating it does not touch the
//!   store, and later saves do not show up in it.
//!
//! Exclusive access for `save` comes from `&mut self`, so the counter and the
//! map always move together.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: process-local map, optionally seeded with the
//!   sample catalog.
//!
//! Swapping in a database-backed store means implementing this trait; the
//! validation in `commands/` stays untouched.

use crate::model::{Book, BookId};
use std::collections::HashMap;

pub mod memory;
pub mod seed;

/// Keyed storage for books.
pub trait CatalogStore {
    /// Look up a book. `None` for a missing id or an unknown one.
    fn find_by_id(&self, id: Option<BookId>) -> Option<Book>;

    /// Insert or overwrite, assigning an identifier first if the book has none.
    fn save(&mut self, book: Book) -> Book;

    fn exists_by_id(&self, id: Option<BookId>) -> bool;

    /// Snapshot copy of every stored book, keyed by identifier.
    fn find_all(&self) -> HashMap<BookId, Book>;

    fn count(&self) -> usize;
}
