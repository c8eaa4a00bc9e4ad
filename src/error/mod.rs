use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::ErrorCode;
pub use helpers::{common, ErrorExt};

/// The error type for roster loading
#[derive(Error, Debug)]
pub enum StandupError {
    #[error("[E{code:04}] Roster error: {message}")]
    Roster {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StandupError {
    /// Create a roster error with specific code and path
    pub fn roster_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Roster {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Roster { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Roster { code, .. } => *code,
        }
    }

    /// Roster file the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Roster { path, .. } => path.as_deref(),
        }
    }
}

/// Result type alias using StandupError
pub type Result<T> = std::result::Result<T, StandupError>;
