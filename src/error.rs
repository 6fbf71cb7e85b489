use thiserror::Error;

/// Main error type for the reelcut library
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Timecode parsing errors
#[derive(Error, Debug)]
pub enum TimecodeError {
    #[error("Invalid time format '{value}'. Use HH:MM:SS or MM:SS")]
    InvalidFormat { value: String },

    #[error("Negative time component in '{value}'")]
    NegativeComponent { value: String },

    #[error("Split duration '{value}' must be at least one second")]
    ZeroDuration { value: String },
}

/// File and folder validation errors
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("The file {path} does not exist")]
    MissingFile { path: String },

    #[error("No video files ({extensions}) found in {path}")]
    EmptyFolder { path: String, extensions: String },

    #[error("Cannot derive output names from {path}")]
    UnusablePath { path: String },
}

/// External backend errors
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Required tool '{tool}' was not found on PATH")]
    Unavailable { tool: String },

    #[error("{tool} failed: {detail}")]
    Invocation { tool: String, detail: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Unknown backend '{name}'. Available backends: {available}")]
    UnknownBackend { name: String, available: String },
}

/// Convenience type alias for Results using EditorError
pub type Result<T> = std::result::Result<T, EditorError>;
