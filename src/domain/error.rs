use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for kallysto operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A managed path could not be created or written.
    #[error("Cannot provision '{}': {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Title cannot be used as a publication directory name.
    #[error("Invalid publication title '{title}': {reason}")]
    InvalidTitle { title: String, reason: &'static str },

    /// Output format name is not recognised.
    #[error("Invalid output format '{0}': must be one of latex, markdown")]
    InvalidFormat(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Wrap an I/O failure with the path it concerns.
    pub fn path<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        AppError::Path { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Path { source, .. } => source.kind(),
            AppError::InvalidTitle { .. }
            | AppError::InvalidFormat(_)
            | AppError::Configuration(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) => io::ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_error_keeps_io_kind() {
        let err = AppError::path(
            "/tmp/kallysto",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(err.to_string().contains("/tmp/kallysto"));
    }

    #[test]
    fn validation_errors_are_invalid_input() {
        assert_eq!(
            AppError::InvalidTitle { title: "..".into(), reason: "no usable characters" }.kind(),
            io::ErrorKind::InvalidInput
        );
        assert_eq!(AppError::InvalidFormat("rst".into()).kind(), io::ErrorKind::InvalidInput);
    }
}
