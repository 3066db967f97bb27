use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeditateError {
    #[error("Unknown meditation type '{category}' for language '{language}'")]
    UnknownCategory { category: String, language: String },

    #[error("No templates registered for '{category}' in language '{language}'")]
    EmptyCategory { category: String, language: String },

    #[error("Template '{template}' is missing its '{section}' section")]
    MalformedTemplate { template: String, section: String },

    #[error("Template {index} not found for '{category}' in language '{language}'")]
    TemplateNotFound {
        category: String,
        language: String,
        index: usize,
    },

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, MeditateError>;
