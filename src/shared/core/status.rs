// Approval statuses for weekly timesheets and the time entries they own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl WeekStatus {
    /// Draft and rejected weeks accept new, changed and removed entries.
    pub fn is_editable(&self) -> bool {
        matches!(self, WeekStatus::Draft | WeekStatus::Rejected)
    }

    /// The status every attached entry takes when the week lands here.
    pub fn mirrored_entry_status(&self) -> Option<EntryStatus> {
        match self {
            WeekStatus::Draft => None,
            WeekStatus::Submitted => Some(EntryStatus::Pending),
            WeekStatus::Approved => Some(EntryStatus::Approved),
            WeekStatus::Rejected => Some(EntryStatus::Rejected),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStatus::Draft => "DRAFT",
            WeekStatus::Submitted => "SUBMITTED",
            WeekStatus::Approved => "APPROVED",
            WeekStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "PENDING",
            EntryStatus::Approved => "APPROVED",
            EntryStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(EntryStatus::Pending),
            "APPROVED" => Ok(EntryStatus::Approved),
            "REJECTED" => Ok(EntryStatus::Rejected),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    #[default]
    Manual,
    Timer,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Manual => "MANUAL",
            EntryType::Timer => "TIMER",
        }
    }
}
