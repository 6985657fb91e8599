//! Line-record codec for card files.
//!
//! One card per line, `<term> <definition> <mistakes>`, fields separated by
//! whitespace. Terms and definitions cannot contain spaces in this format.

use crate::error::{FlashcardsError, Result};
use crate::model::Card;
use std::io::Write;

/// Parses every record in `content`. Whitespace-only lines are skipped; any
/// other line that is not exactly three fields fails the whole parse.
pub fn parse_records(content: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        cards.push(parse_record(idx + 1, line)?);
    }
    Ok(cards)
}

fn parse_record(line_no: usize, line: &str) -> Result<Card> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [term, definition, mistakes] = fields.as_slice() else {
        return Err(FlashcardsError::MalformedRecord {
            line: line_no,
            content: line.to_string(),
        });
    };
    let mistakes = mistakes
        .parse::<u64>()
        .map_err(|_| FlashcardsError::InvalidMistakes {
            line: line_no,
            value: mistakes.to_string(),
        })?;
    Ok(Card::new(*term, *definition).with_mistakes(mistakes))
}

pub fn format_record(card: &Card) -> String {
    format!("{} {} {}", card.term, card.definition, card.mistakes)
}

/// Writes one line per card and returns the number written.
pub fn write_records<'a, W, I>(mut writer: W, cards: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Card>,
{
    let mut count = 0;
    for card in cards {
        writeln!(writer, "{}", format_record(card))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
