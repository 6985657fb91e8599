//! # Flashcards Architecture
//!
//! Flashcards is an interactive term/definition trainer. The binary is a thin
//! wrapper: all behavior lives in this library, so the whole interaction can be
//! driven from tests with in-memory input and output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Loop (session.rs, wired by main.rs)                │
//! │  - Menu prompt, nested prompts, retry loops                 │
//! │  - Mirrors every line into the transcript                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the CardStore            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult messages     │
//! │  - Never writes to stdout                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CardStore: insertion-ordered term → card map             │
//! │  - records: `<term> <definition> <mistakes>` line codec     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **store**: unit tests of the card logic and messages.
//! 2. **Session**: scripted input through a `Cursor`, output captured in a
//!    `Vec<u8>`, with a scripted [`picker::TermPicker`] where `ask` needs to be
//!    deterministic.
//! 3. **Binary**: `tests/` drives the compiled program over stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Card storage and the record file format
//! - [`model`]: The `Card` type
//! - [`session`]: The interactive command loop
//! - [`transcript`]: Session transcript buffer
//! - [`picker`]: Card selection for `ask`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod picker;
pub mod session;
pub mod store;
pub mod transcript;
