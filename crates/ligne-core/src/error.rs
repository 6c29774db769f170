//! Error types and exit codes for ligne
//!
//! Exit codes:
//! - 0: Success
//! - 1: Any failure (bad arguments, station out of range, unreachable destination)

use thiserror::Error;

/// Exit codes for the ligne binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Any failure (1)
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while planning a route
#[derive(Error, Debug)]
pub enum LigneError {
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    Usage(String),

    #[error("{what} station must be at least 1 and at most {limit}, got {station}")]
    StationOutOfRange {
        what: &'static str,
        station: usize,
        limit: usize,
    },

    #[error("destination unreachable: no route from station {from} to station {to}")]
    Unreachable { from: usize, to: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl LigneError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        // Every failure is terminal for a single invocation and maps to 1.
        ExitCode::Failure
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            LigneError::UnknownFormat(_) => "unknown_format",
            LigneError::Usage(_) => "usage_error",
            LigneError::StationOutOfRange { .. } => "station_out_of_range",
            LigneError::Unreachable { .. } => "unreachable",
            LigneError::Json(_) => "json_error",
            LigneError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for ligne operations
pub type Result<T> = std::result::Result<T, LigneError>;
