//! Duration values as recorded in table cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Units a duration token can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

impl TimeUnit {
    /// Map the single-letter unit suffix used on disk
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            't' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            'w' => Some(Self::Weeks),
            'm' => Some(Self::Months),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Minutes => 't',
            Self::Hours => 'h',
            Self::Days => 'd',
            Self::Weeks => 'w',
            Self::Months => 'm',
        }
    }
}

/// An amount of time in a specific unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
    pub duration: f64,
    pub units: TimeUnit,
}

impl Duration {
    pub fn new(duration: f64, units: TimeUnit) -> Self {
        Self { duration, units }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.duration, self.units.code())
    }
}
