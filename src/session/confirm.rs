/// Asks the user a yes/no question before something destructive happens.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Confirms everything. Used for `--yes`.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}
