use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriveError {
    /// Play name outside the six supported calls.
    #[error("Invalid play: {0}")]
    InvalidPlay(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriveError {
    /// Stable code used by the JSON facade (`"CODE: message"`).
    pub fn code(&self) -> &'static str {
        match self {
            DriveError::InvalidPlay(_) => "E_INVALID_PLAY",
            DriveError::InvalidConfig(_) => "E_INVALID_CONFIG",
            DriveError::InvariantViolation(_) => "E_INVARIANT",
            DriveError::Json(_) => "E_INVALID_JSON",
            DriveError::Yaml(_) => "E_INVALID_YAML",
            DriveError::Io(_) => "E_IO",
        }
    }
}

pub type Result<T> = std::result::Result<T, DriveError>;
