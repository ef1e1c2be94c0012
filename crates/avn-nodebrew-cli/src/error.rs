use thiserror::Error;

use avn_nodebrew::BackendError;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to read listing from {origin}: {source}")]
    Listing {
        origin: String,
        source: std::io::Error,
    },

    #[error("Failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// 2 when nodebrew worked but nothing matched, 1 for everything else.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Backend(BackendError::NoMatchingVersion { .. }) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use avn_nodebrew::BackendError;

    use super::AppError;

    #[test]
    fn no_match_exits_with_two() {
        let error = AppError::from(BackendError::NoMatchingVersion {
            specifier: "node@^9".to_string(),
        });

        assert_eq!(error.exit_status(), 2);
        assert_eq!(error.to_string(), "no version matching node@^9");
    }

    #[test]
    fn tool_failure_exits_with_one() {
        let error = AppError::from(BackendError::Timeout);

        assert_eq!(error.exit_status(), 1);
    }
}
