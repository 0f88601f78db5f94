use std::fmt;

use cloner_core::GeneratedProject;

pub type RunId = u64;

/// Text shown to the user whenever the model's answer cannot be used.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid response format from AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Scraping,
    Analyzing,
    Generating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    StageEntered {
        run_id: RunId,
        stage: Stage,
    },
    RunCompleted {
        run_id: RunId,
        result: Result<GeneratedProject, CloneError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CloneError {
    pub kind: FailureKind,
    pub message: String,
}

impl CloneError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The message to put in front of the user for this failure.
    pub fn user_message(&self) -> String {
        match self.kind {
            FailureKind::InvalidFormat => INVALID_FORMAT_MESSAGE.to_string(),
            _ if self.message.trim().is_empty() => self.kind.to_string(),
            _ => self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Scrape,
    MissingCredential,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidFormat,
    Cancelled,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Scrape => write!(f, "scrape failed"),
            FailureKind::MissingCredential => write!(f, "missing generator credential"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidFormat => write!(f, "invalid response format"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_has_fixed_user_message() {
        let err = CloneError::new(FailureKind::InvalidFormat, "expected value at line 1");
        assert_eq!(err.user_message(), INVALID_FORMAT_MESSAGE);
    }

    #[test]
    fn other_failures_surface_their_message() {
        let err = CloneError::new(FailureKind::HttpStatus(503), "503 Service Unavailable");
        assert_eq!(err.user_message(), "503 Service Unavailable");

        let blank = CloneError::new(FailureKind::Timeout, "");
        assert_eq!(blank.user_message(), "timeout");
    }
}
