use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CardStore, Hardest};

pub fn run(store: &CardStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.hardest() {
        Hardest::NoErrors => {
            result.add_message(CmdMessage::info("There are no cards with errors."));
        }
        Hardest::Cards { terms, mistakes } => {
            let message = if let [term] = terms.as_slice() {
                format!(
                    "The hardest card is \"{}\". You have {} errors answering it",
                    term, mistakes
                )
            } else {
                let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
                format!("The hardest cards are {}.", quoted.join(", "))
            };
            result.add_message(CmdMessage::warning(message));
        }
    }

    Ok(result)
}
