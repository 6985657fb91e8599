#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
    /// Wrong answers since the card was created or stats were last reset.
    pub mistakes: u64,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    pub fn with_mistakes(mut self, mistakes: u64) -> Self {
        self.mistakes = mistakes;
        self
    }
}
