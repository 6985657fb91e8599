use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Answer, CardStore};

pub fn question(term: &str) -> String {
    format!("Print the definition of \"{}\":", term)
}

/// Grades one answer for `term` and reports the outcome.
pub fn run(store: &mut CardStore, term: &str, attempt: &str) -> Result<CmdResult> {
    let answer = store.record_answer(term, attempt)?;
    log::debug!("answer for {:?}: {:?}", term, answer);

    let message = match answer {
        Answer::Correct => CmdMessage::success("Correct!"),
        Answer::WrongMatchesOther {
            expected,
            other_term,
        } => CmdMessage::error(format!(
            "Wrong. The right answer is \"{}\", but your definition is correct for \"{} card.\"",
            expected, other_term
        )),
        Answer::Wrong { expected } => {
            CmdMessage::error(format!("Wrong. The right answer is \"{}\".", expected))
        }
    };

    let mut result = CmdResult::default();
    result.add_message(message);
    Ok(result)
}
