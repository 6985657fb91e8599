use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Append-only record of a session: prompts, echoed input and results, one
/// entry per line in the order they happened.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The transcript as text, every entry newline-terminated.
    pub fn contents(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Overwrites `path` with everything recorded so far.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.contents().as_bytes())?;
        file.flush()?;
        log::info!("saved {} transcript lines to {}", self.lines.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn contents_terminates_every_line() {
        let mut transcript = Transcript::new();
        transcript.record("Which card?");
        transcript.record("France");
        transcript.record("");
        assert_eq!(transcript.contents(), "Which card?\nFrance\n\n");
        assert_eq!(transcript.lines().len(), 3);
    }

    #[test]
    fn save_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        fs::write(&path, "old\nold\nold\n").unwrap();

        let mut transcript = Transcript::new();
        transcript.record("new");
        transcript.save(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = Transcript::new();
        assert!(transcript
            .save(&dir.path().join("no-such-dir").join("log.txt"))
            .is_err());
    }
}
