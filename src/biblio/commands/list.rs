use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::BookView;
use crate::store::CatalogStore;

/// Every stored book, ordered by identifier.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut books: Vec<BookView> = store
        .find_all()
        .iter()
        .map(|(id, book)| BookView::keyed(*id, book))
        .collect();
    books.sort_by_key(|book| book.id);

    Ok(CmdResult::default().with_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().books.is_empty());
    }

    #[test]
    fn lists_in_id_order() {
        let store = StoreFixture::seeded().with_books(4).store;
        let ids: Vec<_> = run(&store).unwrap().books.iter().map(|b| b.id).collect();

        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn length_matches_count() {
        let store = StoreFixture::seeded().with_books(2).store;
        assert_eq!(run(&store).unwrap().books.len(), store.count());
    }
}
