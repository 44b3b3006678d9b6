use std::fmt::Display;

use anyhow::{ensure, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{calendar::challenge_date, CHALLENGE_LENGTH, FULL_HYDRATION};

/// Boolean items of the daily checklist. Hydration is tracked separately as a cup count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChecklistItem {
    Diet,
    InGym,
    Outdoor,
    Read,
    Photo,
}

impl Display for ChecklistItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecklistItem::Diet => write!(f, "diet"),
            ChecklistItem::InGym => write!(f, "indoor workout"),
            ChecklistItem::Outdoor => write!(f, "outdoor workout"),
            ChecklistItem::Read => write!(f, "reading"),
            ChecklistItem::Photo => write!(f, "progress photo"),
        }
    }
}

/// Something that still has to be done before a day can be marked complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTask {
    Item(ChecklistItem),
    Water { cups: u8 },
}

impl Display for MissingTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingTask::Item(item) => item.fmt(f),
            MissingTask::Water { cups } => write!(f, "water {cups}/{FULL_HYDRATION}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checks {
    pub diet: bool,
    pub water_cups: u8,
    pub in_gym: bool,
    pub outdoor: bool,
    pub read: bool,
    pub photo: bool,
}

impl Checks {
    pub fn get(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::Diet => self.diet,
            ChecklistItem::InGym => self.in_gym,
            ChecklistItem::Outdoor => self.outdoor,
            ChecklistItem::Read => self.read,
            ChecklistItem::Photo => self.photo,
        }
    }

    pub fn set(&mut self, item: ChecklistItem, value: bool) {
        let field = match item {
            ChecklistItem::Diet => &mut self.diet,
            ChecklistItem::InGym => &mut self.in_gym,
            ChecklistItem::Outdoor => &mut self.outdoor,
            ChecklistItem::Read => &mut self.read,
            ChecklistItem::Photo => &mut self.photo,
        };
        *field = value;
    }

    /// Tasks blocking completion, in checklist order.
    pub fn missing(&self) -> Vec<MissingTask> {
        let mut missing = vec![];
        if !self.diet {
            missing.push(MissingTask::Item(ChecklistItem::Diet));
        }
        if self.water_cups != FULL_HYDRATION {
            missing.push(MissingTask::Water {
                cups: self.water_cups,
            });
        }
        missing.extend(
            [
                ChecklistItem::InGym,
                ChecklistItem::Outdoor,
                ChecklistItem::Read,
                ChecklistItem::Photo,
            ]
            .into_iter()
            .filter(|item| !self.get(*item))
            .map(MissingTask::Item),
        );
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// One challenge day. `date` is derived from the start date and never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub completed: bool,
    pub date: Option<NaiveDate>,
    pub checks: Checks,
    pub photo_data_url: Option<String>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub value: f64,
}

/// The whole persisted document. Field names follow the stored JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeState {
    pub start_date: Option<NaiveDate>,
    pub start_weight: Option<f64>,
    pub days: Vec<DayRecord>,
    pub weights: Vec<WeightEntry>,
    pub last_completed_index: i32,
    pub last_open_date: Option<NaiveDate>,
}

impl Default for ChallengeState {
    fn default() -> Self {
        Self {
            start_date: None,
            start_weight: None,
            days: vec![DayRecord::default(); CHALLENGE_LENGTH],
            weights: vec![],
            last_completed_index: -1,
            last_open_date: None,
        }
    }
}

impl ChallengeState {
    /// Rewrites every day's date as `start_date + index`. Does nothing before a start date is
    /// known.
    pub fn ensure_start_dates(&mut self) {
        let Some(start) = self.start_date else {
            return;
        };
        for (index, day) in self.days.iter_mut().enumerate() {
            day.date = challenge_date(start, index);
        }
    }

    /// A fresh challenge that keeps only the start date and the baseline weight.
    pub fn restarted(&self) -> Self {
        let mut state = Self {
            start_date: self.start_date,
            start_weight: self.start_weight,
            ..Self::default()
        };
        state.ensure_start_dates();
        state
    }

    pub fn completed_days(&self) -> usize {
        self.days.iter().filter(|day| day.completed).count()
    }

    /// Checks invariants serde can't express. Stored documents failing this are discarded.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.days.len() == CHALLENGE_LENGTH,
            "expected {CHALLENGE_LENGTH} days, found {}",
            self.days.len()
        );
        if let Some((index, day)) = self
            .days
            .iter()
            .enumerate()
            .find(|(_, day)| day.checks.water_cups > FULL_HYDRATION)
        {
            anyhow::bail!(
                "day {} has {} water cups",
                index + 1,
                day.checks.water_cups
            );
        }
        Ok(())
    }
}
