//! Everything about the challenge itself, independent of where it's stored or how it's shown.
//!  - [entities] holds the persisted document.
//!  - [manager::ChallengeManager] owns that document and applies [Command]s to it.
//!  - [calendar] and [stats] derive read-only values from it.

pub mod calendar;
pub mod entities;
pub mod manager;
pub mod rejection;
pub mod stats;

use std::path::PathBuf;

use chrono::NaiveDate;
use entities::ChecklistItem;

pub const CHALLENGE_LENGTH: usize = 75;
pub const LAST_DAY_INDEX: usize = CHALLENGE_LENGTH - 1;
/// Eight cups of half a liter.
pub const FULL_HYDRATION: u8 = 8;

/// A user action that may change the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `date` falls back to today. `weight` is the raw text of the baseline weight field.
    SetStart {
        date: Option<NaiveDate>,
        weight: Option<String>,
    },
    SetCheck {
        item: ChecklistItem,
        done: bool,
    },
    SetWater {
        cups: u8,
    },
    UploadPhoto {
        path: PathBuf,
    },
    MarkDayDone,
    Reset,
    /// `input` is the raw text of the weight field.
    LogWeight {
        input: String,
    },
}

/// Result of an accepted command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Changed { notice: Option<String> },
    Unchanged { notice: Option<String> },
}

impl Outcome {
    pub fn changed(notice: impl Into<String>) -> Self {
        Outcome::Changed {
            notice: Some(notice.into()),
        }
    }

    pub fn quietly_changed() -> Self {
        Outcome::Changed { notice: None }
    }

    pub fn unchanged() -> Self {
        Outcome::Unchanged { notice: None }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed { .. })
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Outcome::Changed { notice } | Outcome::Unchanged { notice } => notice.as_deref(),
        }
    }
}
