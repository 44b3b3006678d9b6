use thiserror::Error;

use super::entities::MissingTask;

/// Why a command was refused. Rejections never abort the program; they become a notice and
/// leave the state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("Set a start date first.")]
    NoStartDate,
    #[error(
        "To complete a day every task must be done (including 8/8 water). Missing: {}",
        list_missing(.missing)
    )]
    ChecklistIncomplete { missing: Vec<MissingTask> },
    #[error("Enter a numeric weight.")]
    InvalidWeight,
    #[error("Water must be between 1 and 8 cups, got {0}.")]
    WaterOutOfRange(u8),
}

fn list_missing(missing: &[MissingTask]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
