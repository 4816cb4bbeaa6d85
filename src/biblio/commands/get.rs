use crate::commands::CmdResult;
use crate::error::{BiblioError, Result};
use crate::model::BookId;
use crate::store::CatalogStore;

use super::helpers::to_view;

pub fn run<S: CatalogStore>(store: &S, id: Option<BookId>) -> Result<CmdResult> {
    let id = id.ok_or_else(|| BiblioError::invalid("id cannot be null"))?;
    if id <= 0 {
        return Err(BiblioError::invalid("id must be a positive number"));
    }

    let book = store.find_by_id(Some(id)).ok_or(BiblioError::NotFound(id))?;
    Ok(CmdResult::default().with_books(vec![to_view(&book)?]))
}
