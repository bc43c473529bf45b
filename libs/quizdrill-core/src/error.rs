//! Error types for quizdrill-core.

use thiserror::Error;

/// Result type alias using the core Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the engine boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grade: {0}")]
    InvalidGrade(String),

    #[error("a confidence grade is required in review mode")]
    MissingGrade,

    #[error("snapshot has no version tag")]
    MissingVersion,

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u64),

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("invalid question bank: {0}")]
    InvalidQuestionBank(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidGrade("meh".to_string()).to_string(),
            "invalid grade: meh"
        );
        assert_eq!(
            Error::UnsupportedVersion(7).to_string(),
            "unsupported snapshot version 7"
        );
    }
}
