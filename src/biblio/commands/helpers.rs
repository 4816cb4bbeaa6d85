use crate::error::{BiblioError, Result};
use crate::model::{Book, BookView};

/// Public view of a book the store handed back. A stored book without an
/// identifier means the store broke its contract.
pub fn to_view(book: &Book) -> Result<BookView> {
    BookView::from_saved(book)
        .ok_or_else(|| BiblioError::Store("stored book has no identifier".to_string()))
}
