use super::seed::sample_books;
use super::CatalogStore;
use crate::model::{Book, BookId};
use std::collections::HashMap;
use tracing::debug;

const FIRST_ID: BookId = 1;

/// Process-local book storage. Nothing survives the process.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    books: HashMap<BookId, Book>,
    next_id: BookId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            books: HashMap::new(),
            next_id: FIRST_ID,
        }
    }
}

impl InMemoryStore {
    /// An empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample catalog, counter positioned after it.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for book in sample_books() {
            store.save(book);
        }
        store
    }

    /// The identifier the next unsaved book will receive.
    pub fn next_id(&self) -> BookId {
        self.next_id
    }
}

impl CatalogStore for InMemoryStore {
    fn find_by_id(&self, id: Option<BookId>) -> Option<Book> {
        id.and_then(|id| self.books.get(&id).cloned())
    }

    fn save(&mut self, mut book: Book) -> Book {
        let id = match book.id {
            Some(id) => id,
            None => {
                let id = self.next_id;
                book.id = Some(id);
                id
            }
        };
        // Explicit ids can run ahead of the counter; never hand them out again.
        // An id at BookId::MAX has no successor, so the counter stays put.
        if id >= self.next_id {
            if let Some(next) = id.checked_add(1) {
                self.next_id = next;
            }
        }

        if self.books.insert(id, book.clone()).is_some() {
            debug!(id, "overwrote stored book");
        } else {
            debug!(id, next_id = self.next_id, "inserted book");
        }
        book
    }

    fn exists_by_id(&self, id: Option<BookId>) -> bool {
        id.is_some_and(|id| self.books.contains_key(&id))
    }

    fn find_all(&self) -> HashMap<BookId, Book> {
        self.books.clone()
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::seeded(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let book = Book::new(
                    format!("Test Book {}", i + 1),
                    "Test Author".to_string(),
                    2000 + i as i32,
                );
                self.store.save(book);
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let book = Book::new(title.to_string(), author.to_string(), year);
            self.store.save(book);
            self
        }

        pub fn with_unavailable_book(mut self, title: &str) -> Self {
            let book = Book::new(title.to_string(), "Test Author".to_string(), 1990)
                .with_available(false);
            self.store.save(book);
            self
        }
    }
}
