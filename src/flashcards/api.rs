//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for card
//! operations, whatever front end drives them.
//!
//! The facade owns the [`CardStore`] and dispatches each call to the matching
//! `commands::<name>::run`. It holds no business logic, performs no console
//! I/O, and returns structured [`CmdResult`]s for the caller to present.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::CardStore;
use std::path::Path;

#[derive(Debug, Default)]
pub struct FlashcardsApi {
    store: CardStore,
}

impl FlashcardsApi {
    pub fn new(store: CardStore) -> Self {
        Self { store }
    }

    pub fn add_card(&mut self, term: &str, definition: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, term, definition)
    }

    pub fn remove_card(&mut self, term: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, term)
    }

    pub fn import_cards(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn export_cards(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn answer(&mut self, term: &str, attempt: &str) -> Result<CmdResult> {
        commands::ask::run(&mut self.store, term, attempt)
    }

    pub fn hardest_cards(&self) -> Result<CmdResult> {
        commands::hardest::run(&self.store)
    }

    pub fn reset_stats(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
