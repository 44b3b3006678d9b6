pub mod confirm;
pub mod notice;

use anyhow::Result;
use confirm::Confirmer;
use notice::{Notice, NoticeKind};
use tracing::{info, instrument, warn};

use crate::{
    challenge::{
        manager::{ChallengeManager, GapCheck},
        rejection::Rejection,
        Command, Outcome,
    },
    fs::photo::read_as_data_url,
    storage::{load_state, save_state, KeyValueStore},
    utils::clock::Clock,
};

const RESET_QUESTION: &str = "Restart the challenge from day 1?";
const GAP_QUESTION: &str =
    "A past day was not completed. By the rules the challenge starts over. Restart from day 1?";

/// Controller sitting between the user and the [ChallengeManager]. It loads the state, runs the
/// missed-day guard, dispatches commands and saves after every accepted change.
pub struct Session<S: KeyValueStore> {
    manager: ChallengeManager,
    store: S,
    confirmer: Box<dyn Confirmer>,
    notice: Option<Notice>,
}

impl<S: KeyValueStore> Session<S> {
    /// Loads the stored state and checks it for missed days.
    pub async fn open(
        store: S,
        clock: Box<dyn Clock>,
        confirmer: Box<dyn Confirmer>,
    ) -> Result<Self> {
        let state = load_state(&store).await;
        let mut session = Self {
            manager: ChallengeManager::new(state, clock),
            store,
            confirmer,
            notice: None,
        };
        session.guard_gap().await?;
        Ok(session)
    }

    pub fn manager(&self) -> &ChallengeManager {
        &self.manager
    }

    async fn guard_gap(&mut self) -> Result<()> {
        match self.manager.inspect_gap() {
            GapCheck::NotStarted => return Ok(()),
            GapCheck::FirstOpen | GapCheck::Clear => {}
            GapCheck::Gap { index } => {
                info!("Day {} was missed", index + 1);
                if self.confirmer.confirm(GAP_QUESTION) {
                    self.manager.restart();
                }
            }
        }
        self.manager.mark_opened();
        self.save().await
    }

    async fn save(&self) -> Result<()> {
        save_state(&self.store, self.manager.state()).await
    }

    /// Runs a single command. The outer result carries storage failures, the inner one tells
    /// whether the command was accepted.
    #[instrument(skip(self))]
    pub async fn dispatch(&mut self, command: Command) -> Result<Result<Outcome, Rejection>> {
        let result = match command {
            Command::SetStart { date, weight } => self.manager.set_start(date, weight.as_deref()),
            Command::SetCheck { item, done } => self.manager.set_check(item, done),
            Command::SetWater { cups } => self.manager.set_water(cups),
            Command::UploadPhoto { path } => {
                if self.manager.current_index().is_none() {
                    Ok(Outcome::unchanged())
                } else {
                    match read_as_data_url(&path).await {
                        Ok(data_url) => Ok(self.manager.attach_photo(data_url)),
                        Err(e) => {
                            warn!("Photo was not attached {e:?}");
                            Ok(Outcome::unchanged())
                        }
                    }
                }
            }
            Command::MarkDayDone => self.manager.mark_day_done(),
            Command::Reset => {
                if self.confirmer.confirm(RESET_QUESTION) {
                    Ok(self.manager.restart())
                } else {
                    Ok(Outcome::unchanged())
                }
            }
            Command::LogWeight { input } => self.manager.log_weight(&input),
        };

        match &result {
            Ok(outcome) => {
                if outcome.is_changed() {
                    self.save().await?;
                }
                if let Some(text) = outcome.notice() {
                    self.post_notice(text.to_owned(), NoticeKind::Info);
                }
            }
            Err(rejection) => {
                info!("Rejected: {rejection}");
                self.post_notice(rejection.to_string(), NoticeKind::Rejected);
            }
        }
        Ok(result)
    }

    fn post_notice(&mut self, text: String, kind: NoticeKind) {
        self.notice = Some(Notice::new(text, kind, self.manager.now()));
    }

    /// The latest notice while it is still fresh.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|notice| notice.visible_at(self.manager.now()))
    }
}
