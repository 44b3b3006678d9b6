use crate::utils::percentage::Percentage;

use super::{entities::ChallengeState, CHALLENGE_LENGTH};

pub fn completion_percentage(state: &ChallengeState) -> Percentage {
    Percentage::of_count(state.completed_days(), CHALLENGE_LENGTH)
}

/// Completed days counted from day 1 up to the first open day. A gap later on doesn't matter,
/// a gap early on caps the streak.
pub fn consistency_streak(state: &ChallengeState) -> usize {
    state.days.iter().take_while(|day| day.completed).count()
}

pub fn streak_percentage(state: &ChallengeState) -> Percentage {
    Percentage::of_count(consistency_streak(state), CHALLENGE_LENGTH).capped()
}

/// Read-only projection used by the dashboard and stats views.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// 1-based day number, `None` until a start date is set.
    pub current_day: Option<usize>,
    pub days_left: Option<usize>,
    pub completed_days: usize,
    pub completion: Percentage,
    pub streak: usize,
    pub streak_share: Percentage,
    pub motivation_index: usize,
}

impl Dashboard {
    pub fn project(state: &ChallengeState, current_index: Option<usize>) -> Self {
        let current_day = state
            .start_date
            .map(|_| current_index.map_or(1, |index| index + 1));
        Self {
            current_day,
            days_left: current_day.map(|day| CHALLENGE_LENGTH.saturating_sub(day)),
            completed_days: state.completed_days(),
            completion: completion_percentage(state),
            streak: consistency_streak(state),
            streak_share: streak_percentage(state),
            motivation_index: current_index.unwrap_or(0),
        }
    }
}
