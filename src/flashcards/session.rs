//! # Session Loop
//!
//! Reads commands line by line, dispatches them to [`FlashcardsApi`], and
//! presents the results. Each command, with all of its nested prompts, is
//! handled completely before the next menu prompt.
//!
//! Everything shown to the user is written to the output and also recorded in
//! the [`Transcript`]. Lines read from the input are recorded in the
//! transcript only, since the user already saw them while typing.
//!
//! ## Errors
//!
//! Per-command problems (duplicates, unknown cards, missing or malformed
//! import files) become messages and the loop carries on. Failing to write an
//! export or a log, or the input closing during a nested prompt, ends the
//! session with an error.

use crate::api::FlashcardsApi;
use crate::commands::{add, ask, CmdMessage, CmdResult, MessageLevel};
use crate::error::{FlashcardsError, Result};
use crate::picker::TermPicker;
use crate::transcript::Transcript;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";
const FILE_PROMPT: &str = "File name:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Command {
    /// Exact, case-sensitive match against the menu vocabulary.
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "add" => Some(Command::Add),
            "remove" => Some(Command::Remove),
            "import" => Some(Command::Import),
            "export" => Some(Command::Export),
            "ask" => Some(Command::Ask),
            "exit" => Some(Command::Exit),
            "log" => Some(Command::Log),
            "hardest card" => Some(Command::HardestCard),
            "reset stats" => Some(Command::ResetStats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Imported once before the first prompt
    pub import_from: Option<PathBuf>,
    /// Exported to on `exit`
    pub export_to: Option<PathBuf>,
    pub color: bool,
}

pub struct Session<R, W, P> {
    api: FlashcardsApi,
    input: R,
    output: W,
    picker: P,
    transcript: Transcript,
    options: SessionOptions,
}

impl<R: BufRead, W: Write, P: TermPicker> Session<R, W, P> {
    pub fn new(input: R, output: W, picker: P, options: SessionOptions) -> Self {
        Self {
            api: FlashcardsApi::default(),
            input,
            output,
            picker,
            transcript: Transcript::new(),
            options,
        }
    }

    pub fn with_api(mut self, api: FlashcardsApi) -> Self {
        self.api = api;
        self
    }

    pub fn api(&self) -> &FlashcardsApi {
        &self.api
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        if let Some(path) = self.options.import_from.clone() {
            log::info!("importing startup cards from {}", path.display());
            self.transcript.record(path.display().to_string());
            self.import_from(&path)?;
        }

        loop {
            self.say(MENU)?;
            let Some(line) = self.read_line()? else {
                log::info!("input closed, exiting");
                return self.exit();
            };

            match Command::from_input(&line) {
                Some(Command::Exit) => return self.exit(),
                Some(command) => self.dispatch(command)?,
                None => log::debug!("ignoring unrecognized command {:?}", line),
            }
            self.say("")?;
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add => self.handle_add(),
            Command::Remove => self.handle_remove(),
            Command::Import => {
                let path = self.prompt(FILE_PROMPT)?;
                self.import_from(Path::new(&path))
            }
            Command::Export => {
                let path = self.prompt(FILE_PROMPT)?;
                let result = self.api.export_cards(Path::new(&path))?;
                self.report(&result)
            }
            Command::Ask => self.handle_ask(),
            Command::Log => self.handle_log(),
            Command::HardestCard => {
                let result = self.api.hardest_cards()?;
                self.report(&result)
            }
            Command::ResetStats => {
                let result = self.api.reset_stats()?;
                self.report(&result)
            }
            Command::Exit => self.exit(),
        }
    }

    fn handle_add(&mut self) -> Result<()> {
        let mut term = self.prompt("The card:")?;
        while self.api.store().contains_term(&term) {
            term = self.prompt(&add::term_taken_message(&term))?;
        }

        let mut definition = self.prompt("The definition of the card:")?;
        while self.api.store().contains_definition(&definition) {
            definition = self.prompt(&add::definition_taken_message(&definition))?;
        }

        let result = self.api.add_card(&term, &definition)?;
        self.report(&result)
    }

    fn handle_remove(&mut self) -> Result<()> {
        let term = self.prompt("Which card?")?;
        let result = self.api.remove_card(&term)?;
        self.report(&result)
    }

    fn handle_ask(&mut self) -> Result<()> {
        let raw = self.prompt("How many times to ask?")?;
        let Ok(count) = raw.trim().parse::<usize>() else {
            return self.emit(&CmdMessage::warning("Invalid number."));
        };

        for _ in 0..count {
            let terms: Vec<String> = self
                .api
                .store()
                .terms()
                .into_iter()
                .map(String::from)
                .collect();
            let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
            let Some(term) = self.picker.pick(&refs).and_then(|i| terms.get(i)) else {
                return self.emit(&CmdMessage::warning("There are no cards to ask."));
            };

            let attempt = self.prompt(&ask::question(term))?;
            let result = self.api.answer(term, &attempt)?;
            self.report(&result)?;
        }
        Ok(())
    }

    fn handle_log(&mut self) -> Result<()> {
        let path = self.prompt(FILE_PROMPT)?;
        self.transcript.save(Path::new(&path))?;
        self.say("The log has been saved.")
    }

    fn import_from(&mut self, path: &Path) -> Result<()> {
        match self.api.import_cards(path) {
            Ok(result) => self.report(&result),
            Err(e) => {
                log::warn!("import from {} failed: {}", path.display(), e);
                self.emit(&CmdMessage::error(e.to_string()))
            }
        }
    }

    fn exit(&mut self) -> Result<()> {
        self.say("Bye bye!")?;
        if let Some(path) = self.options.export_to.clone() {
            log::info!("exporting cards to {} on exit", path.display());
            self.transcript.record(path.display().to_string());
            let result = self.api.export_cards(&path)?;
            self.report(&result)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            self.emit(message)?;
        }
        Ok(())
    }

    fn emit(&mut self, message: &CmdMessage) -> Result<()> {
        self.transcript.record(message.content.clone());
        if !self.options.color {
            writeln!(self.output, "{}", message.content)?;
            return Ok(());
        }
        match message.level {
            MessageLevel::Info => writeln!(self.output, "{}", message.content)?,
            MessageLevel::Success => writeln!(self.output, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(self.output, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(self.output, "{}", message.content.red())?,
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.transcript.record(text);
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        self.say(text)?;
        self.read_line()?.ok_or(FlashcardsError::InputClosed)
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.transcript.record(line.clone());
        Ok(Some(line))
    }
}
