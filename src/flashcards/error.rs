use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed record on line {line}: expected `<term> <definition> <mistakes>`, got {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("Invalid mistake count on line {line}: {value:?}")]
    InvalidMistakes { line: usize, value: String },

    #[error("The card \"{0}\" already exists")]
    DuplicateTerm(String),

    #[error("The definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Input closed while waiting for an answer")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, FlashcardsError>;
