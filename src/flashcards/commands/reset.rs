use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

pub fn run(store: &mut CardStore) -> Result<CmdResult> {
    store.reset_stats();
    log::debug!("reset mistake counters on {} cards", store.len());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Card statistics have been reset."));
    Ok(result)
}
