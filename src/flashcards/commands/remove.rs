use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

pub fn run(store: &mut CardStore, term: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove(term) {
        Some(card) => {
            log::debug!("removed card {:?}", card.term);
            result.add_message(CmdMessage::success("The card has been removed."));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Can't remove \"{}\": there is no such card.",
                term
            )));
        }
    }

    Ok(result)
}
