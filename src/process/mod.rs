use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessRunner;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Interrupted(String),
    SignalError(String),
    Other(String),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Other(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::Interrupted(msg) => write!(f, "Process interrupted: {}", msg),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
            ProcessError::Other(msg) => write!(f, "Process error: {}", msg),
        }
    }
}
