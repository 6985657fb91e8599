use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

pub fn run(store: &mut CardStore, term: &str, definition: &str) -> Result<CmdResult> {
    let card = store.add(term, definition)?;
    log::debug!("added card {:?}", card.term);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "The pair (\"{}\":\"{}\") has been added",
        card.term, card.definition
    )));
    Ok(result)
}

pub fn term_taken_message(term: &str) -> String {
    format!("The card \"{}\" already exists. Try again:", term)
}

pub fn definition_taken_message(definition: &str) -> String {
    format!("The definition \"{}\" already exists. Try again:", definition)
}
