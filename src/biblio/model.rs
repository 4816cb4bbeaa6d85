use serde::{Deserialize, Serialize};

pub type BookId = i64;

/// The stored shape of a book, including fields that never leave the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned by the store on first save; never reassigned.
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    // Internal only. `BookView` never carries it.
    pub available: bool,
}

impl Book {
    /// A fresh, unsaved book. New books start out available.
    pub fn new(title: String, author: String, publication_year: i32) -> Self {
        Self {
            id: None,
            title,
            author,
            publication_year,
            available: true,
        }
    }

    pub(crate) fn with_id(mut self, id: BookId) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

/// The public projection of a [`Book`]. Built fresh on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl BookView {
    /// Projects a saved book. Returns `None` for a book that was never saved.
    pub fn from_saved(book: &Book) -> Option<Self> {
        book.id.map(|id| Self::keyed(id, book))
    }

    /// Projects a book under the identifier it is stored at.
    pub fn keyed(id: BookId, book: &Book) -> Self {
        Self {
            id,
            title: book.title.clone(),
            author: book.author.clone(),
            publication_year: book.publication_year,
        }
    }
}
