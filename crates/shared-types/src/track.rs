use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Case-complexity track governing which deadline rule variant applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocatedTrack {
    SmallClaim,
    FastClaim,
    MultiClaim,
}

impl AllocatedTrack {
    /// Days the applicant has to respond after the defence is filed.
    pub fn response_days(&self) -> i64 {
        match self {
            Self::SmallClaim => 14,
            Self::FastClaim | Self::MultiClaim => 28,
        }
    }

    /// Weeks from claim issue at which service-level tracking begins.
    pub fn sla_weeks(&self) -> i64 {
        match self {
            Self::SmallClaim => 30,
            Self::FastClaim => 50,
            Self::MultiClaim => 80,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmallClaim => "SMALL_CLAIM",
            Self::FastClaim => "FAST_CLAIM",
            Self::MultiClaim => "MULTI_CLAIM",
        }
    }
}

impl fmt::Display for AllocatedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AllocatedTrack {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SMALL_CLAIM" => Ok(Self::SmallClaim),
            "FAST_CLAIM" => Ok(Self::FastClaim),
            "MULTI_CLAIM" => Ok(Self::MultiClaim),
            _ => Err(EngineError::invalid_case_data(
                "The allocated track provided was not of type AllocatedTrack",
            )),
        }
    }
}
