use biblio::api::BiblioApi;
use biblio::error::BiblioError;
use biblio::model::Book;
use biblio::rest::{self, BookRequest};
use biblio::store::memory::InMemoryStore;
use biblio::store::CatalogStore;

fn setup() -> BiblioApi<InMemoryStore> {
    BiblioApi::new(InMemoryStore::seeded()).with_current_year(2026)
}

fn is_invalid(err: BiblioError) -> bool {
    matches!(err, BiblioError::InvalidInput(_))
}

#[test]
fn test_seed_books_read_back() {
    let api = setup();
    let expected = [
        (1, "El Quijote", "Miguel de Cervantes", 1605),
        (2, "Cien años de soledad", "Gabriel García Márquez", 1967),
        (3, "1984", "George Orwell", 1949),
        (4, "El Principito", "Antoine de Saint-Exupéry", 1943),
        (5, "Crimen y Castigo", "Fiódor Dostoyevski", 1866),
    ];

    for (id, title, author, year) in expected {
        let book = api.get_book(Some(id)).unwrap().into_book().unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.title, title);
        assert_eq!(book.author, author);
        assert_eq!(book.publication_year, year);
    }
}

#[test]
fn test_lookup_failures() {
    let api = setup();
    assert!(is_invalid(api.get_book(None).unwrap_err()));
    assert!(is_invalid(api.get_book(Some(0)).unwrap_err()));
    assert!(is_invalid(api.get_book(Some(-1)).unwrap_err()));
    assert!(matches!(
        api.get_book(Some(999_999)).unwrap_err(),
        BiblioError::NotFound(999_999)
    ));
}

#[test]
fn test_create_rejections() {
    let mut api = setup();
    assert!(is_invalid(
        api.create_book(Some(""), Some("Author"), 2000).unwrap_err()
    ));
    assert!(is_invalid(
        api.create_book(Some("AB"), Some("Author123"), 2000)
            .unwrap_err()
    ));
    assert!(is_invalid(
        api.create_book(Some("AB"), Some("Author"), 3000).unwrap_err()
    ));
    assert!(is_invalid(
        api.create_book(Some("AB"), Some("Author"), 999).unwrap_err()
    ));
    assert_eq!(api.store().count(), 5);
}

#[test]
fn test_create_then_get() {
    let mut api = setup();
    let created = api
        .create_book(Some("Valid Title"), Some("Valid Author"), 2000)
        .unwrap()
        .into_book()
        .unwrap();
    let fetched = api.get_book(Some(created.id)).unwrap().into_book().unwrap();

    assert_eq!(fetched.title, "Valid Title");
    assert_eq!(fetched.author, "Valid Author");
    assert_eq!(fetched.publication_year, 2000);
}

#[test]
fn test_ids_exceed_every_previous_id() {
    let mut api = setup();
    for i in 0..5 {
        let before_max = api.store().find_all().keys().copied().max().unwrap_or(0);
        let title = format!("Volume {}", i + 1);
        let book = api
            .create_book(Some(title.as_str()), Some("Serial Writer"), "2001")
            .unwrap()
            .into_book()
            .unwrap();
        assert!(book.id > before_max);
    }
}

#[test]
fn test_list_length_tracks_count() {
    let mut api = setup();
    let check = |api: &BiblioApi<InMemoryStore>| {
        let listed = api.list_books().unwrap().books.len();
        assert_eq!(Some(listed), api.count_books().unwrap().total);
    };

    check(&api);
    api.create_book(Some("Dune"), Some("Frank Herbert"), 1965)
        .unwrap();
    check(&api);
    let _ = api.create_book(Some("X"), Some("Nobody"), 1965);
    check(&api);
}

#[test]
fn test_snapshot_ignores_later_saves() {
    let mut store = InMemoryStore::seeded();
    let snapshot = store.find_all();
    store.save(Book::new("Later".into(), "Someone".into(), 2020));

    assert_eq!(snapshot.len(), 5);
    assert_eq!(store.count(), 6);
}

#[test]
fn test_views_never_expose_availability() {
    let api = setup();
    let json = serde_json::to_value(api.list_books().unwrap().books).unwrap();

    for book in json.as_array().unwrap() {
        assert!(book.get("available").is_none());
    }
}

#[test]
fn test_rest_walkthrough() {
    let mut api = setup();

    assert_eq!(rest::get_book(&api, Some(1)).status, 200);
    assert_eq!(rest::get_book(&api, Some(404)).status, 404);
    assert_eq!(rest::get_book(&api, None).status, 400);

    let created = rest::post_book(
        &mut api,
        &BookRequest::new("The Pragmatic Programmer", "David Thomas", 1999),
    );
    assert_eq!(created.status, 201);
    assert_eq!(created.data.unwrap().id, 6);

    let rejected = rest::post_book(&mut api, &BookRequest::new("", "Invalid Author", 2023));
    assert_eq!(rejected.status, 400);
    assert!(rejected.data.is_none());
}
