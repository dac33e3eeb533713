//! Record mode chosen during onboarding

use crate::error::MoodlogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record modes determine how entries are framed for reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordMode {
    /// Festinger's principle: 10% is what happens, 90% is how you react
    Festinger,
}

impl RecordMode {
    /// Raw code as persisted under the record mode key
    pub fn code(&self) -> &'static str {
        match self {
            RecordMode::Festinger => "festinger",
        }
    }

    /// Translation key of the reminder shown alongside new records
    pub fn reminder_key(&self) -> &'static str {
        match self {
            RecordMode::Festinger => "festingerReminder",
        }
    }
}

impl fmt::Display for RecordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RecordMode {
    type Err = MoodlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "festinger" => Ok(RecordMode::Festinger),
            _ => Err(MoodlogError::InvalidMode(s.to_string())),
        }
    }
}
