use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{endpoint} endpoint returned HTTP {status}: {body}")]
    ApiStatusError {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("Malformed record in {file} at line {line}: {source}")]
    MalformedRecordError {
        file: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not find any files to process")]
    NoInputFilesError,
}

impl CheckError {
    /// Configuration problems exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::MissingConfigError { .. }
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::NoInputFilesError => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
