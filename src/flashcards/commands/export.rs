use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::records::write_records;
use crate::store::CardStore;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes the whole store to `path` in store order, replacing any existing file.
pub fn run(store: &CardStore, path: &Path) -> Result<CmdResult> {
    let file = File::create(path)?;
    let written = write_records(BufWriter::new(file), store.cards())?;
    log::debug!("exported {} records to {}", written, path.display());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} cards have been saved",
        written
    )));
    Ok(result)
}
