use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, info};

use crate::utils::clock::Clock;

use super::{
    calendar::challenge_index,
    entities::{ChallengeState, ChecklistItem, DayRecord, WeightEntry},
    rejection::Rejection,
    stats::Dashboard,
    Outcome, FULL_HYDRATION,
};

/// Result of looking for missed days when the application is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapCheck {
    /// No start date, nothing to check.
    NotStarted,
    /// The application was never opened since the start date was set. Nothing is evaluated.
    FirstOpen,
    Clear,
    /// The earliest open day before today.
    Gap { index: usize },
}

/// Single owner of the [ChallengeState]. Every mutation goes through a named method that
/// checks its preconditions first; a rejected method leaves the state as it was.
///
/// The manager never persists anything itself, the caller saves after a changed [Outcome].
pub struct ChallengeManager {
    state: ChallengeState,
    clock: Box<dyn Clock>,
}

impl ChallengeManager {
    pub fn new(mut state: ChallengeState, clock: Box<dyn Clock>) -> Self {
        state.ensure_start_dates();
        Self { state, clock }
    }

    pub fn state(&self) -> &ChallengeState {
        &self.state
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.time()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state
            .start_date
            .map(|start| challenge_index(start, self.today()))
    }

    pub fn current_day(&self) -> Option<&DayRecord> {
        self.current_index().map(|index| &self.state.days[index])
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::project(&self.state, self.current_index())
    }

    fn current_day_mut(&mut self) -> Result<&mut DayRecord, Rejection> {
        let index = self.current_index().ok_or(Rejection::NoStartDate)?;
        Ok(&mut self.state.days[index])
    }

    pub fn set_start(
        &mut self,
        date: Option<NaiveDate>,
        weight: Option<&str>,
    ) -> Result<Outcome, Rejection> {
        let weight = match weight.map(str::trim).filter(|v| !v.is_empty()) {
            Some(input) => Some(parse_weight(input)?),
            None => None,
        };
        let date = date.unwrap_or_else(|| self.today());
        info!("Starting challenge on {date} with weight {weight:?}");
        self.state.start_date = Some(date);
        self.state.start_weight = weight;
        self.state.ensure_start_dates();
        Ok(Outcome::changed("Saved. Off you go!"))
    }

    pub fn set_check(&mut self, item: ChecklistItem, done: bool) -> Result<Outcome, Rejection> {
        let day = self.current_day_mut()?;
        day.checks.set(item, done);
        Ok(Outcome::quietly_changed())
    }

    pub fn set_water(&mut self, cups: u8) -> Result<Outcome, Rejection> {
        if !(1..=FULL_HYDRATION).contains(&cups) {
            return Err(Rejection::WaterOutOfRange(cups));
        }
        let day = self.current_day_mut()?;
        day.checks.water_cups = cups;
        Ok(Outcome::quietly_changed())
    }

    /// Stores an already encoded photo on today's record, replacing any earlier one. Without a
    /// current day there is nowhere to put it and the photo is dropped.
    pub fn attach_photo(&mut self, data_url: String) -> Outcome {
        match self.current_day_mut() {
            Ok(day) => {
                day.photo_data_url = Some(data_url);
                Outcome::changed("Progress photo saved locally.")
            }
            Err(_) => Outcome::unchanged(),
        }
    }

    pub fn mark_day_done(&mut self) -> Result<Outcome, Rejection> {
        let index = self.current_index().ok_or(Rejection::NoStartDate)?;
        let day = &mut self.state.days[index];
        if day.completed {
            return Ok(Outcome::Unchanged {
                notice: Some(format!("Day {} is already complete.", index + 1)),
            });
        }

        let missing = day.checks.missing();
        if !missing.is_empty() {
            debug!("Day {} is missing {missing:?}", index + 1);
            return Err(Rejection::ChecklistIncomplete { missing });
        }

        day.completed = true;
        self.state.last_completed_index = self.state.last_completed_index.max(index as i32);
        info!("Completed day {}", index + 1);
        Ok(Outcome::changed("Day complete. Well done!"))
    }

    /// Wipes all progress, keeping only the start date and the baseline weight.
    pub fn restart(&mut self) -> Outcome {
        info!("Restarting the challenge from day 1");
        self.state = self.state.restarted();
        Outcome::changed("By the rules, back to day 1.")
    }

    pub fn log_weight(&mut self, input: &str) -> Result<Outcome, Rejection> {
        let value = parse_weight(input)?;
        let date = self.today();
        self.state.weights.push(WeightEntry { date, value });
        if let Ok(day) = self.current_day_mut() {
            day.weight = Some(value);
        }
        Ok(Outcome::changed("Weight added."))
    }

    /// Only the first open day before today is reported, later ones don't change the verdict.
    pub fn inspect_gap(&self) -> GapCheck {
        let Some(index) = self.current_index() else {
            return GapCheck::NotStarted;
        };
        if self.state.last_open_date.is_none() {
            return GapCheck::FirstOpen;
        }
        self.state.days[..index]
            .iter()
            .position(|day| !day.completed)
            .map_or(GapCheck::Clear, |index| GapCheck::Gap { index })
    }

    pub fn mark_opened(&mut self) {
        self.state.last_open_date = Some(self.today());
    }
}

/// Weights come in as text. Anything that isn't a positive number is refused.
pub fn parse_weight(input: &str) -> Result<f64, Rejection> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0. => Ok(value),
        _ => Err(Rejection::InvalidWeight),
    }
}
