use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appassets operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    #[diagnostic(code(appassets::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(appassets::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(appassets::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(appassets::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{context}")]
    #[diagnostic(code(appassets::generate))]
    Generate {
        context: String,
        #[source]
        source: Box<AssetError>,
    },
}

impl AssetError {
    /// Wrap this error with a description of the stage that failed.
    pub fn context(self, context: impl Into<String>) -> Self {
        AssetError::Generate {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
