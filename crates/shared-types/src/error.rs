use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of engine errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EngineErrorKind {
    /// Holiday feed unreachable, unparseable, or never loaded.
    Configuration,
    /// A required case field is missing or unparseable.
    InvalidCaseData,
    /// No flow-state guard matched the snapshot.
    UnclassifiableState,
}

impl fmt::Display for EngineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineErrorKind::Configuration => write!(f, "Configuration"),
            EngineErrorKind::InvalidCaseData => write!(f, "InvalidCaseData"),
            EngineErrorKind::UnclassifiableState => write!(f, "UnclassifiableState"),
        }
    }
}

/// Structured error used across the deadline and state-flow components.
///
/// Computation never defaults silently: a failed holiday fetch, a missing
/// case field, or an unclassifiable snapshot always surfaces one of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineError {
    pub kind: EngineErrorKind,
    pub message: String,
}

impl EngineError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self {
            kind: EngineErrorKind::Configuration,
            message: message.into(),
        }
    }

    pub fn invalid_case_data(message: impl Into<String>) -> Self {
        Self {
            kind: EngineErrorKind::InvalidCaseData,
            message: message.into(),
        }
    }

    pub fn unclassifiable_state(message: impl Into<String>) -> Self {
        Self {
            kind: EngineErrorKind::UnclassifiableState,
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for EngineError {}
