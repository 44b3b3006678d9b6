//!  Storage is organized through [KeyValueStore].
//!  The basic idea is:
//!   - The whole [ChallengeState] is a single JSON document stored under [STATE_KEY].
//!   - Loading never fails. Anything that can't be turned back into a valid state is replaced
//!     with a fresh default.
//!   - Saving is explicit and happens after every accepted command.

pub mod file_store;
pub mod memory_store;

use std::{future::Future, ops::Deref};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::challenge::entities::ChallengeState;

pub const STATE_KEY: &str = "seventyfive_state_v1";

/// Interface for abstracting a durable string key-value store.
pub trait KeyValueStore {
    /// `None` when nothing was ever stored under `key`.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>>;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>>;
}

impl<T: Deref> KeyValueStore for T
where
    T::Target: KeyValueStore,
{
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> {
        self.deref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> {
        self.deref().set(key, value)
    }
}

pub async fn load_state(store: &impl KeyValueStore) -> ChallengeState {
    match try_load_state(store).await {
        Ok(Some(state)) => state,
        Ok(None) => {
            debug!("No stored state, starting fresh");
            ChallengeState::default()
        }
        Err(e) => {
            warn!("Stored state is unusable, starting fresh: {e:?}");
            ChallengeState::default()
        }
    }
}

async fn try_load_state(store: &impl KeyValueStore) -> Result<Option<ChallengeState>> {
    let Some(raw) = store.get(STATE_KEY).await? else {
        return Ok(None);
    };
    let state = serde_json::from_str::<ChallengeState>(&raw).context("Malformed state")?;
    state.validate()?;
    Ok(Some(state))
}

pub async fn save_state(store: &impl KeyValueStore, state: &ChallengeState) -> Result<()> {
    let raw = serde_json::to_string(state)?;
    store.set(STATE_KEY, &raw).await
}
