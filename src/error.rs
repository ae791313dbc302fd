use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error type for simulation setup and execution.
///
/// Input parsing and parameter validation fail fast: no simulation step
/// executes, and no partial history is ever returned, once one of these is
/// raised.
#[derive(Debug)]
pub enum DirnError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ParseIntError(std::num::ParseIntError),
    ParseFloatError(std::num::ParseFloatError),
    /// An input file violates its wire format. The message names the
    /// offending line.
    MalformedInput(String),
    /// A parameter was rejected before any simulation step executed.
    InvalidParameter(String),
}

impl From<std::io::Error> for DirnError {
    fn from(error: std::io::Error) -> Self {
        DirnError::IoError(error)
    }
}

impl From<serde_json::Error> for DirnError {
    fn from(error: serde_json::Error) -> Self {
        DirnError::JsonError(error)
    }
}

impl From<std::num::ParseIntError> for DirnError {
    fn from(error: std::num::ParseIntError) -> Self {
        DirnError::ParseIntError(error)
    }
}

impl From<std::num::ParseFloatError> for DirnError {
    fn from(error: std::num::ParseFloatError) -> Self {
        DirnError::ParseFloatError(error)
    }
}

impl Display for DirnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DirnError::IoError(error) => write!(f, "io error: {error}"),
            DirnError::JsonError(error) => write!(f, "json error: {error}"),
            DirnError::ParseIntError(error) => write!(f, "parse error: {error}"),
            DirnError::ParseFloatError(error) => write!(f, "parse error: {error}"),
            DirnError::MalformedInput(message) => write!(f, "malformed input: {message}"),
            DirnError::InvalidParameter(message) => write!(f, "invalid parameter: {message}"),
        }
    }
}

impl Error for DirnError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DirnError::IoError(error) => Some(error),
            DirnError::JsonError(error) => Some(error),
            DirnError::ParseIntError(error) => Some(error),
            DirnError::ParseFloatError(error) => Some(error),
            DirnError::MalformedInput(_) | DirnError::InvalidParameter(_) => None,
        }
    }
}
