use super::{ErrorCode, StandupError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to a roster error with a specific code, remembering the file
    fn to_roster_error(
        self,
        code: u16,
        message: impl Into<String>,
        path: &Path,
    ) -> Result<T, StandupError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_roster_error(
        self,
        code: u16,
        message: impl Into<String>,
        path: &Path,
    ) -> Result<T, StandupError> {
        self.map_err(|e| {
            StandupError::roster_with_code(code, message, Some(path.to_path_buf())).with_source(e)
        })
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for a roster file
    pub fn roster_not_found(path: impl AsRef<Path>) -> StandupError {
        let path = path.as_ref();
        StandupError::roster_with_code(
            ErrorCode::ROSTER_NOT_FOUND,
            format!("Roster file not found: {}", path.display()),
            Some(path.to_path_buf()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_to_roster_error_keeps_source() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result
            .to_roster_error(
                ErrorCode::ROSTER_READ_FAILED,
                "Failed to read roster",
                Path::new("team.toml"),
            )
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ROSTER_READ_FAILED);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.path(), Some(Path::new("team.toml")));
    }

    #[test]
    fn test_roster_not_found_message() {
        let err = common::roster_not_found("missing.toml");
        assert_eq!(err.code(), ErrorCode::ROSTER_NOT_FOUND);
        assert!(err.to_string().contains("missing.toml"));
        assert!(err.to_string().starts_with("[E1001]"));
    }
}
