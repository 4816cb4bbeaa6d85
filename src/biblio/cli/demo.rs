//! Scripted walkthrough of every operation and failure mode, run against a
//! fresh sample catalog so it always tells the same story.

use super::render::{print_messages, render_book, render_error};
use biblio::api::BiblioApi;
use biblio::error::Result;
use biblio::model::BookId;
use biblio::rest::{self, BookRequest};
use biblio::store::memory::InMemoryStore;
use colored::Colorize;

const RULE: &str = "════════════════════════════════════════════════════════";

pub(super) fn run() -> Result<()> {
    let mut api = BiblioApi::new(InMemoryStore::seeded());

    println!("{}", "Catalog walkthrough".bold());
    println!("{}\n", RULE);
    run_service_cases(&mut api)?;

    println!("{}", "Simulated REST endpoints".bold());
    println!("{}\n", RULE);
    run_rest_cases(&mut api);
    println!("{}", RULE);
    Ok(())
}

fn case(n: usize, description: &str) {
    println!("{}", format!("Case {}: {}", n, description).cyan());
}

fn lookup(api: &BiblioApi<InMemoryStore>, id: Option<BookId>) {
    match api.get_book(id).and_then(|r| r.into_book()) {
        Ok(book) => println!("{}", render_book(200, "Book found:", &book)),
        Err(err) => println!("{}", render_error(&err)),
    }
}

fn add(
    api: &mut BiblioApi<InMemoryStore>,
    title: Option<&str>,
    author: Option<&str>,
    year: i32,
) {
    match api.create_book(title, author, year).and_then(|r| r.into_book()) {
        Ok(book) => println!("{}", render_book(201, "Book created:", &book)),
        Err(err) => println!("{}", render_error(&err)),
    }
}

fn run_service_cases(api: &mut BiblioApi<InMemoryStore>) -> Result<()> {
    case(1, "look up an existing book (id 1)");
    lookup(api, Some(1));

    case(2, "unknown book (id 999)");
    lookup(api, Some(999));

    case(3, "missing id");
    lookup(api, None);

    case(4, "negative id (-5)");
    lookup(api, Some(-5));

    case(5, "add a valid book");
    add(api, Some("Clean Code"), Some("Robert C. Martin"), 2008);

    case(6, "empty title");
    add(api, Some(""), Some("Test Author"), 2023);

    case(7, "missing author");
    add(api, Some("Test Book"), None, 2023);

    case(8, "publication year in the future");
    add(api, Some("Future Book"), Some("Future Author"), 9999);

    case(9, "read back the new book (id 6)");
    lookup(api, Some(6));

    case(10, "add a second book, id keeps increasing");
    add(api, Some("Design Patterns"), Some("Gang of Four"), 1994);

    case(11, "catalog statistics");
    print_messages(&api.count_books()?.messages);
    println!();
    Ok(())
}

fn endpoint(method: &str, path: &str) {
    println!("{} {}", method.yellow().bold(), path);
}

fn run_rest_cases(api: &mut BiblioApi<InMemoryStore>) {
    for (path, id) in [
        ("/books/1", Some(1)),
        ("/books/404", Some(404)),
        ("/books/null", None),
    ] {
        endpoint("GET", path);
        println!("  Response: {}\n", rest::get_book(api, id));
    }

    for (label, request) in [
        (
            "/books",
            BookRequest::new("The Pragmatic Programmer", "David Thomas", 1999),
        ),
        (
            "/books (bad request)",
            BookRequest::new("", "Invalid Author", 2023),
        ),
    ] {
        endpoint("POST", label);
        println!("  Request:  {:?}", request);
        println!("  Response: {}\n", rest::post_book(api, &request));
    }
}
