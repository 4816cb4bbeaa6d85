use crate::model::{Book, BookId};

/// The sample catalog every seeded store starts with.
pub fn sample_books() -> Vec<Book> {
    [
        (1, "El Quijote", "Miguel de Cervantes", 1605, true),
        (2, "Cien años de soledad", "Gabriel García Márquez", 1967, false),
        (3, "1984", "George Orwell", 1949, true),
        (4, "El Principito", "Antoine de Saint-Exupéry", 1943, true),
        (5, "Crimen y Castigo", "Fiódor Dostoyevski", 1866, false),
    ]
    .into_iter()
    .map(|(id, title, author, year, available): (BookId, &str, &str, i32, bool)| {
        Book::new(title.to_string(), author.to_string(), year)
            .with_id(id)
            .with_available(available)
    })
    .collect()
}
