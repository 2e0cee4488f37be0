use shared::SharedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error(transparent)]
    Shared(#[from] SharedError),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Group {0} is full")]
    GroupFull(String),

    #[error("League for group {0} is already finalized")]
    AlreadyFinalized(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for LeagueError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Shared(SharedError::from(errors))
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_errors_are_transparent() {
        let err: LeagueError = SharedError::MissingField("group.id".to_string()).into();
        assert_eq!(err.to_string(), "Required field missing: group.id");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LeagueError::GroupFull("g1".to_string()).to_string(), "Group g1 is full");
        assert_eq!(LeagueError::NotSignedIn.to_string(), "Not signed in");
    }
}
