use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let total = store.count();
    let mut result = CmdResult::default().with_total(total);
    result.add_message(CmdMessage::info(format!("Total books: {}", total)));
    Ok(result)
}
