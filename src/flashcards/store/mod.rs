//! # Card Storage
//!
//! [`CardStore`] is the single piece of state in a flashcards session: an
//! insertion-ordered map from term to [`Card`].
//!
//! ## Ordering
//!
//! Insertion order is observable in two places:
//! - `export` writes records in store order
//! - `hardest card` lists tied cards in store order
//!
//! Re-inserting an existing term (via import) keeps its original position, and
//! removing a card closes the gap without reordering the rest.
//!
//! ## Uniqueness
//!
//! Terms are unique keys. Definitions are unique at `add` time only: an import
//! may bring in a definition already held by another term, and the store keeps
//! both.
//!
//! Persistence lives in [`records`], the line codec shared by import and export.

use crate::error::{FlashcardsError, Result};
use crate::model::Card;
use indexmap::IndexMap;

pub mod records;

/// Result of checking an answer with [`CardStore::record_answer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Correct,
    /// The attempt is the definition of `other_term` instead.
    WrongMatchesOther {
        expected: String,
        other_term: String,
    },
    Wrong {
        expected: String,
    },
}

/// Result of [`CardStore::hardest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hardest {
    NoErrors,
    Cards { terms: Vec<String>, mistakes: u64 },
}

#[derive(Debug, Default, Clone)]
pub struct CardStore {
    cards: IndexMap<String, Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.get(term)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.term_for_definition(definition).is_some()
    }

    /// First term, in store order, whose definition is exactly `definition`.
    pub fn term_for_definition(&self, definition: &str) -> Option<&str> {
        self.cards
            .values()
            .find(|card| card.definition == definition)
            .map(|card| card.term.as_str())
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    pub fn terms(&self) -> Vec<&str> {
        self.cards.keys().map(String::as_str).collect()
    }

    /// Adds a new card with zero mistakes. Both the term and the definition must be unused.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<&Card> {
        if self.contains_term(term) {
            return Err(FlashcardsError::DuplicateTerm(term.to_string()));
        }
        if self.contains_definition(definition) {
            return Err(FlashcardsError::DuplicateDefinition(definition.to_string()));
        }
        let card = Card::new(term, definition);
        let (index, _) = self.cards.insert_full(term.to_string(), card);
        Ok(&self.cards[index])
    }

    pub fn remove(&mut self, term: &str) -> Option<Card> {
        self.cards.shift_remove(term)
    }

    /// Inserts or overwrites by term. Overwritten cards keep their position.
    pub fn upsert(&mut self, card: Card) {
        self.cards.insert(card.term.clone(), card);
    }

    pub fn reset_stats(&mut self) {
        for card in self.cards.values_mut() {
            card.mistakes = 0;
        }
    }

    pub fn hardest(&self) -> Hardest {
        let max = self.cards.values().map(|c| c.mistakes).max().unwrap_or(0);
        if max == 0 {
            return Hardest::NoErrors;
        }
        let terms = self
            .cards
            .values()
            .filter(|c| c.mistakes == max)
            .map(|c| c.term.clone())
            .collect();
        Hardest::Cards {
            terms,
            mistakes: max,
        }
    }

    /// Checks `attempt` against the definition of `term` by exact string
    /// equality. A wrong attempt bumps that card's mistake counter by one.
    pub fn record_answer(&mut self, term: &str, attempt: &str) -> Result<Answer> {
        let expected = self
            .cards
            .get(term)
            .map(|c| c.definition.clone())
            .ok_or_else(|| FlashcardsError::CardNotFound(term.to_string()))?;

        if attempt == expected {
            return Ok(Answer::Correct);
        }

        let answer = match self.term_for_definition(attempt) {
            Some(other) => Answer::WrongMatchesOther {
                expected,
                other_term: other.to_string(),
            },
            None => Answer::Wrong { expected },
        };

        if let Some(card) = self.cards.get_mut(term) {
            card.mistakes = card.mistakes.saturating_add(1);
        }
        Ok(answer)
    }
}
