use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Version manager not found")]
    NotFound,

    #[error("Command failed: {stderr}")]
    CommandFailed { stderr: String },

    #[error("IO error ({kind}): {message}")]
    IoError {
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("Timeout waiting for command")]
    Timeout,

    #[error("no version matching {specifier}")]
    NoMatchingVersion { specifier: String },
}

impl BackendError {
    pub fn no_match(specifier: impl Into<String>) -> Self {
        Self::NoMatchingVersion {
            specifier: specifier.into(),
        }
    }

    /// True when the version manager itself could not be run or reported a
    /// failure, as opposed to running fine without a satisfying version.
    #[must_use]
    pub fn is_tool_error(&self) -> bool {
        !matches!(self, Self::NoMatchingVersion { .. })
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return BackendError::NotFound;
        }
        BackendError::IoError {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
