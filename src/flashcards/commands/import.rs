use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardsError, Result};
use crate::store::records::parse_records;
use crate::store::CardStore;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Loads every record in `path` into the store, overwriting cards with the
/// same term. A missing file is reported, not raised. A malformed record
/// rejects the whole file before anything is applied.
pub fn run(store: &mut CardStore, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("import source {} does not exist", path.display());
            result.add_message(CmdMessage::warning("File not found."));
            return Ok(result);
        }
        Err(e) => return Err(FlashcardsError::Io(e)),
    };

    let cards = parse_records(&content)?;
    let count = cards.len();
    for card in cards {
        store.upsert(card);
    }
    log::debug!("imported {} records from {}", count, path.display());

    if count > 0 {
        result.add_message(CmdMessage::success(format!(
            "{} cards have been loaded.",
            count
        )));
    }
    Ok(result)
}
