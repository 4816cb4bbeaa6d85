use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::CatalogStore;
use crate::validation::{validate_author, validate_title, validate_year, YearInput};
use tracing::info;

use super::helpers::to_view;

/// Validates and stores a new book. Nothing is saved unless every rule passes.
pub fn run<S: CatalogStore>(
    store: &mut S,
    title: Option<&str>,
    author: Option<&str>,
    year: YearInput<'_>,
    current_year: i32,
) -> Result<CmdResult> {
    let title = validate_title(title)?;
    let author = validate_author(author)?;
    let year = validate_year(year, current_year)?;

    let saved = store.save(Book::new(title.to_string(), author.to_string(), year));
    let view = to_view(&saved)?;
    info!(id = view.id, title = %view.title, "book created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book created ({}): {}",
        view.id, view.title
    )));
    Ok(result.with_books(vec![view]))
}
