//! Text views of the challenge. Every function here is a pure projection of the state, the
//! caller decides when to print.

use ansi_term::{Colour, Style};

use crate::{
    challenge::{
        entities::{ChallengeState, ChecklistItem, DayRecord},
        manager::ChallengeManager,
        stats::Dashboard,
        CHALLENGE_LENGTH, FULL_HYDRATION,
    },
    session::notice::{Notice, NoticeKind},
    utils::{percentage::Percentage, time::date_to_iso},
};

pub const MOTIVATION: [&str; 7] = [
    "A promise to yourself is the most important contract you will ever sign.",
    "Today, not tomorrow. Get going.",
    "If it matters you will find a way. If it doesn't you will find an excuse.",
    "Discipline beats motivation.",
    "A small step today is miles tomorrow.",
    "It's just you and the mirror. Win.",
    "No weather is stronger than you.",
];

const BAR_WIDTH: usize = 30;
const LITERS_PER_CUP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Status,
    Days,
    Stats,
    Weights,
}

pub fn render_view(view: View, manager: &ChallengeManager) -> String {
    match view {
        View::Status => format!(
            "{}\n\n{}",
            dashboard(&manager.dashboard()),
            checklist(manager.current_day())
        ),
        View::Days => days_table(manager.state()),
        View::Stats => stats(&manager.dashboard()),
        View::Weights => weight_log(manager.state()),
    }
}

pub fn motivation(day_index: usize) -> &'static str {
    MOTIVATION[day_index % MOTIVATION.len()]
}

fn bar(share: Percentage) -> String {
    let filled = ((*share / 100. * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let heading = match (dashboard.current_day, dashboard.days_left) {
        (Some(day), Some(left)) => format!("Day {day} of {CHALLENGE_LENGTH}, {left} days left"),
        _ => "No start date yet. Pick one with `start`.".to_owned(),
    };
    [
        Style::new().bold().paint(heading).to_string(),
        format!(
            "{} {}  {} / {CHALLENGE_LENGTH} days",
            bar(dashboard.completion),
            dashboard.completion,
            dashboard.completed_days
        ),
        Style::new()
            .italic()
            .paint(motivation(dashboard.motivation_index))
            .to_string(),
    ]
    .join("\n")
}

/// Today's checklist. Without a current day everything is shown unticked.
pub fn checklist(day: Option<&DayRecord>) -> String {
    let checks = day.map(|d| d.checks).unwrap_or_default();
    let mut lines = vec![Style::new().bold().paint("Today").to_string()];
    for item in [
        ChecklistItem::Diet,
        ChecklistItem::InGym,
        ChecklistItem::Outdoor,
        ChecklistItem::Read,
        ChecklistItem::Photo,
    ] {
        let mark = if checks.get(item) { "x" } else { " " };
        lines.push(format!("  [{mark}] {item}"));
    }

    let cups = (0..FULL_HYDRATION)
        .map(|i| if i < checks.water_cups { '●' } else { '○' })
        .collect::<String>();
    lines.push(format!(
        "  water {cups}  {:.1} L / {:.1} L",
        checks.water_cups as f64 * LITERS_PER_CUP,
        FULL_HYDRATION as f64 * LITERS_PER_CUP
    ));
    if day.is_some_and(|d| d.photo_data_url.is_some()) {
        lines.push("  progress photo uploaded".to_owned());
    }
    lines.join("\n")
}

pub fn days_table(state: &ChallengeState) -> String {
    state
        .days
        .iter()
        .enumerate()
        .map(|(index, day)| {
            let date = day.date.map_or_else(|| "-".to_owned(), date_to_iso);
            let status = if day.completed {
                Colour::Green.paint("done")
            } else {
                Style::new().dimmed().paint("open")
            };
            format!("{:>3}  {date:<10}  {status}", index + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stats(dashboard: &Dashboard) -> String {
    [
        format!(
            "Completion {} {}",
            bar(dashboard.completion),
            dashboard.completion
        ),
        format!(
            "Streak     {} current streak: {} days",
            bar(dashboard.streak_share),
            dashboard.streak
        ),
    ]
    .join("\n")
}

/// Weights ordered by date for reading. The stored log itself stays in insertion order.
pub fn weight_log(state: &ChallengeState) -> String {
    let mut lines = vec![];
    if let Some(start) = state.start_weight {
        lines.push(format!("baseline    {start} kg"));
    }
    let mut entries = state.weights.iter().collect::<Vec<_>>();
    entries.sort_by_key(|entry| entry.date);
    lines.extend(
        entries
            .into_iter()
            .map(|entry| format!("{}  {} kg", date_to_iso(entry.date), entry.value)),
    );
    if lines.is_empty() {
        return "No weights logged yet.".to_owned();
    }
    lines.join("\n")
}

pub fn notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Info => Colour::Green.paint(&notice.text).to_string(),
        NoticeKind::Rejected => Colour::Yellow.paint(&notice.text).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{checklist, dashboard, days_table, motivation, weight_log, MOTIVATION};
    use crate::challenge::{
        entities::{ChallengeState, DayRecord, WeightEntry},
        stats::Dashboard,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_motivation_rotates() {
        assert_eq!(motivation(0), MOTIVATION[0]);
        assert_eq!(motivation(6), MOTIVATION[6]);
        assert_eq!(motivation(7), MOTIVATION[0]);
        assert_eq!(motivation(74), MOTIVATION[74 % 7]);
    }

    #[test]
    fn test_dashboard_text() {
        let mut state = ChallengeState::default();
        state.start_date = Some(date(2024, 1, 1));
        let text = dashboard(&Dashboard::project(&state, Some(3)));
        assert!(text.contains("Day 4 of 75, 71 days left"));
        assert!(text.contains("0 / 75 days"));
        assert!(text.contains(motivation(3)));

        let text = dashboard(&Dashboard::project(&ChallengeState::default(), None));
        assert!(text.contains("No start date yet"));
    }

    #[test]
    fn test_checklist_water() {
        let mut day = DayRecord::default();
        day.checks.water_cups = 3;
        day.checks.diet = true;
        let text = checklist(Some(&day));
        assert!(text.contains("[x] diet"));
        assert!(text.contains("[ ] reading"));
        assert!(text.contains("●●●○○○○○  1.5 L / 4.0 L"));

        assert!(checklist(None).contains("○○○○○○○○  0.0 L"));
    }

    #[test]
    fn test_days_table_lists_every_day() {
        let mut state = ChallengeState::default();
        state.start_date = Some(date(2024, 1, 1));
        state.ensure_start_dates();
        state.days[0].completed = true;

        let table = days_table(&state);
        let rows = table.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 75);
        assert!(rows[0].contains("2024-01-01") && rows[0].contains("done"));
        assert!(rows[74].contains(" 75  2024-03-15") && rows[74].contains("open"));

        let unset = days_table(&ChallengeState::default());
        assert!(unset.lines().all(|row| row.contains("  -  ")));
    }

    #[test]
    fn test_weight_log_is_chronological() {
        let mut state = ChallengeState::default();
        state.start_weight = Some(90.);
        state.weights = vec![
            WeightEntry {
                date: date(2024, 1, 5),
                value: 88.,
            },
            WeightEntry {
                date: date(2024, 1, 2),
                value: 89.5,
            },
        ];

        assert_eq!(
            weight_log(&state),
            "baseline    90 kg\n2024-01-02  89.5 kg\n2024-01-05  88 kg"
        );
        assert_eq!(state.weights[0].date, date(2024, 1, 5));
        assert_eq!(
            weight_log(&ChallengeState::default()),
            "No weights logged yet."
        );
    }
}
